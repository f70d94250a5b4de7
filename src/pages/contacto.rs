use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::section::Section;
use crate::components::whatsapp::WhatsAppButton;
use crate::config;
use crate::forms::{self, LeadPayload, SubmissionOutcome};

const MISSING_ENDPOINT_MESSAGE: &str =
    "Falta configurar el envío directo (CONTACT_FORM_ENDPOINT).";
const INVALID_ENDPOINT_MESSAGE: &str =
    "La URL del Apps Script es inválida. Debe ser de script.google.com y terminar en /exec.";
const SEND_FAILED_MESSAGE: &str =
    "No se pudo enviar directamente. Intenta de nuevo o contáctanos por WhatsApp.";

const SUBJECT_OPTIONS: &[(&str, &str)] = &[
    ("admisiones", "Información de Admisiones"),
    ("visita", "Agendar una Visita"),
    ("academico", "Consulta Académica"),
    ("otro", "Otro"),
];

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    content: &'static str,
    action: Option<&'static str>,
    color: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "📞",
        title: "Teléfono",
        content: config::LANDLINE_DISPLAY,
        action: Some(config::LANDLINE_TEL),
        color: "blue",
    },
    ContactInfo {
        icon: "💬",
        title: "WhatsApp",
        content: config::WHATSAPP_DISPLAY,
        action: Some(config::WHATSAPP_URL),
        color: "green",
    },
    ContactInfo {
        icon: "✉",
        title: "Correo Electrónico",
        content: config::SCHOOL_EMAIL,
        action: Some("mailto:cebuenpastor.goldenheaven@gmail.com"),
        color: "pink",
    },
    ContactInfo {
        icon: "🕑",
        title: "Horario de Atención",
        content: "Atención únicamente con cita previa. No se recibe a nadie sin previa coordinación.",
        action: None,
        color: "yellow",
    },
];

#[function_component(Contacto)]
pub fn contacto() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);

    let sending = use_state(|| false);
    let outcome = use_state(|| SubmissionOutcome::Idle);

    // Shape check runs once per mount, not per submission.
    let endpoint_ok = use_memo(
        |_| forms::is_valid_apps_script_url(config::contact_form_endpoint()),
        (),
    );

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let sending = sending.clone();
        let outcome = outcome.clone();
        let endpoint_ok = *endpoint_ok;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            if !endpoint_ok {
                warn!("contact form: endpoint missing or invalid, submission blocked");
                let msg = if config::contact_form_endpoint().is_none() {
                    MISSING_ENDPOINT_MESSAGE
                } else {
                    INVALID_ENDPOINT_MESSAGE
                };
                outcome.set(SubmissionOutcome::Error(msg.to_string()));
                return;
            }

            sending.set(true);
            outcome.set(SubmissionOutcome::Idle);

            let payload = LeadPayload::contact(
                (*name).clone(),
                (*phone).clone(),
                (*email).clone(),
                (*subject).clone(),
                (*message).clone(),
                forms::iso_timestamp(),
                forms::user_agent(),
            );

            let name = name.clone();
            let phone = phone.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let sending = sending.clone();
            let outcome = outcome.clone();

            spawn_local(async move {
                match forms::submit(config::contact_form_endpoint(), &payload).await {
                    Ok(()) => {
                        name.set(String::new());
                        phone.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                        outcome.set(SubmissionOutcome::Success);
                    }
                    Err(err) => {
                        error!("contact form submission failed: {err}");
                        outcome.set(SubmissionOutcome::Error(SEND_FAILED_MESSAGE.to_string()));
                    }
                }
                sending.set(false);
            });
        })
    };

    let on_send_another = {
        let outcome = outcome.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            outcome.set(SubmissionOutcome::Idle);
        })
    };

    html! {
        <div class="page">
            <section class="page-hero hero-gradient">
                <div class="container">
                    <span class="hero-badge">{"💬 Contáctanos"}</span>
                    <h1>{"Estamos aquí para ayudarte"}</h1>
                    <p>
                        {"Escríbenos por WhatsApp o envíanos tu mensaje. La atención es únicamente \
                          con cita previa."}
                    </p>
                </div>
            </section>

            <Section>
                <div class="card-grid cols-4 contact-info-grid">
                    {
                        CONTACT_INFO.iter().map(|info| {
                            let inner = html! {
                                <>
                                    <div class={classes!("feature-card-icon", format!("pastel-{}", info.color))}>
                                        <span aria-hidden="true">{info.icon}</span>
                                    </div>
                                    <h3>{info.title}</h3>
                                    <p>{info.content}</p>
                                </>
                            };
                            match info.action {
                                Some(action) => html! {
                                    <a
                                        key={info.title}
                                        class="feature-card centered"
                                        href={action}
                                        target={action.starts_with("http").then_some("_blank")}
                                        rel={action.starts_with("http").then_some("noopener noreferrer")}
                                    >
                                        {inner}
                                    </a>
                                },
                                None => html! {
                                    <div key={info.title} class="feature-card centered">{inner}</div>
                                },
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="contact-columns">
                    <div>
                        <h2>{"Envíanos un mensaje"}</h2>
                        {
                            if *outcome == SubmissionOutcome::Success {
                                html! {
                                    <div class="form-success pastel-green">
                                        <span class="form-success-icon" aria-hidden="true">{"✓"}</span>
                                        <h3>{"¡Solicitud enviada!"}</h3>
                                        <p>{"Gracias por escribirnos. Te responderemos a la brevedad."}</p>
                                        <button class="btn btn-outline" onclick={on_send_another}>
                                            {"Enviar otro mensaje"}
                                        </button>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="lead-form" onsubmit={onsubmit}>
                                        <div class="form-row">
                                            <div class="form-field">
                                                <label for="name">{"Nombre del acudiente"}</label>
                                                <input
                                                    id="name"
                                                    placeholder="Nombre completo"
                                                    required=true
                                                    disabled={*sending}
                                                    value={(*name).clone()}
                                                    oninput={let name = name.clone(); move |e: InputEvent| {
                                                        let input: HtmlInputElement = e.target_unchecked_into();
                                                        name.set(input.value());
                                                    }}
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="phone">{"Teléfono"}</label>
                                                <input
                                                    id="phone"
                                                    type="tel"
                                                    placeholder="+507 6XXX-XXXX"
                                                    required=true
                                                    disabled={*sending}
                                                    value={(*phone).clone()}
                                                    oninput={let phone = phone.clone(); move |e: InputEvent| {
                                                        let input: HtmlInputElement = e.target_unchecked_into();
                                                        phone.set(input.value());
                                                    }}
                                                />
                                            </div>
                                        </div>

                                        <div class="form-field">
                                            <label for="email">{"Correo electrónico"}</label>
                                            <input
                                                id="email"
                                                type="email"
                                                placeholder="correo@ejemplo.com"
                                                required=true
                                                disabled={*sending}
                                                value={(*email).clone()}
                                                oninput={let email = email.clone(); move |e: InputEvent| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    email.set(input.value());
                                                }}
                                            />
                                        </div>

                                        <div class="form-field">
                                            <label for="subject">{"Asunto"}</label>
                                            <select
                                                id="subject"
                                                required=true
                                                disabled={*sending}
                                                value={(*subject).clone()}
                                                onchange={let subject = subject.clone(); move |e: Event| {
                                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                                    subject.set(select.value());
                                                }}
                                            >
                                                <option value="" selected={subject.is_empty()}>{"Seleccionar..."}</option>
                                                {
                                                    SUBJECT_OPTIONS.iter().map(|(value, label)| html! {
                                                        <option
                                                            key={*value}
                                                            value={*value}
                                                            selected={*subject == *value}
                                                        >
                                                            {*label}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>

                                        <div class="form-field">
                                            <label for="message">{"Mensaje"}</label>
                                            <textarea
                                                id="message"
                                                placeholder="Indícanos el grado de interés y tu consulta."
                                                required=true
                                                disabled={*sending}
                                                value={(*message).clone()}
                                                oninput={let message = message.clone(); move |e: InputEvent| {
                                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                                    message.set(area.value());
                                                }}
                                            />
                                        </div>

                                        {
                                            if let SubmissionOutcome::Error(msg) = &*outcome {
                                                html! { <div class="form-error">{msg}</div> }
                                            } else {
                                                html! {}
                                            }
                                        }

                                        <button type="submit" class="btn btn-cta btn-lg full-width" disabled={*sending}>
                                            { if *sending { "Enviando…" } else { "Enviar Mensaje" } }
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>

                    <div>
                        <h2>{"Nuestra Ubicación"}</h2>
                        <div class="location-card">
                            <a
                                href={config::MAPS_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Ver ubicación en Google Maps"
                            >
                                <img
                                    src="/assets/ubicacion.jpg"
                                    alt="Vista exterior de la ubicación"
                                    loading="lazy"
                                />
                            </a>
                            <div class="location-card-body">
                                <h3>{"Centro Educativo El Buen Pastor Golden Heaven"}</h3>
                                <p>
                                    <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer">
                                        {format!("📍 {}, {}", config::ADDRESS_LINE_1, config::ADDRESS_LINE_2)}
                                    </a>
                                </p>
                                <p>
                                    {"🕑 Atención únicamente con cita previa. No se recibe a nadie \
                                      sin previa coordinación."}
                                </p>
                            </div>
                        </div>
                        <div class="cta-row">
                            <a class="btn btn-primary btn-lg" href={config::LANDLINE_TEL}>
                                {"📞 Llamar"}
                            </a>
                            <a
                                class="btn btn-whatsapp btn-lg"
                                href={config::WHATSAPP_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"💬 WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            </Section>

            <Footer />
            <WhatsAppButton />

            <style>
                {r#"
                .contact-info-grid {
                    margin-bottom: 4rem;
                }
                .contact-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-columns h2 {
                    margin-bottom: 1.5rem;
                }
                .location-card {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                }
                .location-card img {
                    width: 100%;
                    height: 256px;
                    object-fit: cover;
                    display: block;
                }
                .location-card-body {
                    padding: 1.5rem;
                }
                .location-card-body p {
                    margin: 0.5rem 0;
                    font-size: 0.9rem;
                    color: var(--muted);
                }
                @media (max-width: 900px) {
                    .contact-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

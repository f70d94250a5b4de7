use log::{error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::section::{Section, SectionHeader};
use crate::components::whatsapp::WhatsAppButton;
use crate::config;
use crate::forms::{self, LeadPayload, SubmissionOutcome, GRADE_OPTIONS};

const SEND_FAILED_MESSAGE: &str =
    "No se pudo enviar en este momento. Intenta nuevamente o contáctanos por WhatsApp.";

const WHATSAPP_ENROLLMENT_URL: &str =
    "https://wa.me/50764616826?text=Hola,%20me%20gustar%C3%ADa%20informaci%C3%B3n%20sobre%20las%20matr%C3%ADculas.";

const STEPS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Solicita Información",
        "Completa el formulario o contáctanos por WhatsApp para recibir toda la información.",
    ),
    (
        "2",
        "Llena el formulario",
        "Accede a los documentos para ver el formulario y la lista de requisitos.",
    ),
    (
        "3",
        "Completa la documentación",
        "Entrega los documentos requeridos y completa el proceso de inscripción.",
    ),
    (
        "4",
        "Formaliza la matrícula",
        "Realiza el pago de matrícula y ¡bienvenido a la familia Golden Heaven!",
    ),
];

const REQUIREMENTS: &[&str] = &[
    "Copia de cédula del estudiante",
    "Copia de cédula de los padres o tutores",
    "Certificado de nacimiento",
    "Récord de vacunas actualizado",
    "Certificación de notas (para estudiantes de traslado)",
    "2 fotos tamaño carnet",
    "Carta de buena conducta (para estudiantes de traslado)",
];

const PRICES: &[(&str, &str, &str, &str)] = &[
    ("Preescolar · Niños 4 años", "B/. 200.00", "B/. 60.00", "pink"),
    ("Kínder+ · Niños 5 años", "B/. 200.00", "B/. 60.00", "blue"),
    (
        "Primaria (1°–6°)",
        "B/. 200.00",
        "B/. 65.00 – B/. 75.00 (según grado)",
        "green",
    ),
];

#[function_component(Admisiones)]
pub fn admisiones() -> Html {
    let parent_name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let student_name = use_state(String::new);
    let grade = use_state(String::new);
    let message = use_state(String::new);

    let sending = use_state(|| false);
    let outcome = use_state(|| SubmissionOutcome::Idle);

    let endpoint_ok = use_memo(
        |_| forms::is_valid_apps_script_url(config::contact_form_endpoint()),
        (),
    );

    let onsubmit = {
        let parent_name = parent_name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let student_name = student_name.clone();
        let grade = grade.clone();
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
                warn!("admissions form: endpoint missing or invalid, submission blocked");
                outcome.set(SubmissionOutcome::Error(SEND_FAILED_MESSAGE.to_string()));
                return;
            }

            sending.set(true);
            outcome.set(SubmissionOutcome::Idle);

            let payload = LeadPayload::admissions(
                (*parent_name).clone(),
                (*phone).clone(),
                (*email).clone(),
                (*student_name).clone(),
                &grade,
                (*message).clone(),
                forms::iso_timestamp(),
                forms::user_agent(),
            );

            let parent_name = parent_name.clone();
            let phone = phone.clone();
            let email = email.clone();
            let student_name = student_name.clone();
            let grade = grade.clone();
            let message = message.clone();
            let sending = sending.clone();
            let outcome = outcome.clone();

            spawn_local(async move {
                match forms::submit(config::contact_form_endpoint(), &payload).await {
                    Ok(()) => {
                        parent_name.set(String::new());
                        phone.set(String::new());
                        email.set(String::new());
                        student_name.set(String::new());
                        grade.set(String::new());
                        message.set(String::new());
                        outcome.set(SubmissionOutcome::Success);
                    }
                    Err(err) => {
                        error!("admissions form submission failed: {err}");
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
                    <span class="hero-badge">{"📅 Matrículas Abiertas 2026"}</span>
                    <h1>
                        {"Inicia el camino hacia el "}
                        <span class="accent">{"éxito"}</span>
                        {" de tu hijo"}
                    </h1>
                    <p>{"El proceso de admisión es sencillo. Estamos aquí para acompañarte en cada paso."}</p>
                    <div class="cta-row">
                        <a class="btn btn-cta btn-xl" href="#formulario">{"Solicitar Información"}</a>
                        <a class="btn btn-outline btn-lg" href={config::LANDLINE_TEL}>
                            {format!("📞 {}", config::LANDLINE_DISPLAY)}
                        </a>
                        <a
                            class="btn btn-secondary btn-lg"
                            href={config::CALENDAR_BOOKING_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"📅 Agendar Cita"}
                        </a>
                    </div>
                </div>
            </section>

            <Section>
                <SectionHeader
                    badge="Proceso de Admisión"
                    title="4 pasos simples para inscribir a tu hijo"
                    subtitle="Hemos diseñado un proceso ágil para que puedas completar la matrícula sin complicaciones."
                />
                <div class="card-grid cols-4">
                    {
                        STEPS.iter().map(|(number, title, description)| html! {
                            <div key={*number} class="step-card">
                                <span class="step-number">{*number}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section class={classes!("section-muted")}>
                <div class="card-grid cols-2">
                    <div>
                        <SectionHeader badge="Documentos" title="Requisitos para la matrícula" centered={false} />
                        <ul class="check-list">
                            {
                                REQUIREMENTS.iter().map(|req| html! {
                                    <li key={*req}>{*req}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                        <a
                            class="btn btn-outline"
                            href={config::DOCUMENTS_FOLDER_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"📄 Enlace a documentos"}
                        </a>
                        <p class="fine-print">
                            {"(Formulario de admisión, lista de requisitos y documentos informativos.)"}
                        </p>
                    </div>
                    <div>
                        <SectionHeader badge="Inversión" title="Costos de matrícula" centered={false} />
                        <div class="price-list">
                            {
                                PRICES.iter().map(|(level, enrollment, monthly, color)| html! {
                                    <div key={*level} class={classes!("price-card", format!("pastel-{color}"))}>
                                        <h4>{*level}</h4>
                                        <div class="price-card-grid">
                                            <div>
                                                <p class="price-label">{"Matrícula"}</p>
                                                <p class="price-value">{*enrollment}</p>
                                            </div>
                                            <div>
                                                <p class="price-label">{"Mensualidad"}</p>
                                                <p class="price-value">{*monthly}</p>
                                            </div>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="fine-print">
                            {"* Los precios están sujetos a cambios. Contáctenos para información actualizada."}
                        </p>
                        <p class="fine-print">{"* Aplica cargo de plataforma de B/. 10.00."}</p>
                    </div>
                </div>
            </Section>

            <Section id="formulario">
                <div class="narrow">
                    <SectionHeader
                        badge="Contáctanos"
                        title="Solicita información o agenda una cita"
                        subtitle="Completa el formulario y la solicitud llegará directamente al correo de la escuela."
                    />

                    {
                        if *outcome == SubmissionOutcome::Success {
                            html! {
                                <div class="form-success pastel-green">
                                    <span class="form-success-icon" aria-hidden="true">{"✓"}</span>
                                    <h3>{"¡Solicitud enviada!"}</h3>
                                    <p>{"Gracias. Hemos recibido tu solicitud y te responderemos a la brevedad."}</p>
                                    <button class="btn btn-outline" onclick={on_send_another}>
                                        {"Enviar otra solicitud"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <form class="lead-form" onsubmit={onsubmit}>
                                    <div class="form-row">
                                        <div class="form-field">
                                            <label for="parentName">{"Nombre del padre/madre"}</label>
                                            <input
                                                id="parentName"
                                                placeholder="Nombre completo"
                                                required=true
                                                disabled={*sending}
                                                value={(*parent_name).clone()}
                                                oninput={let parent_name = parent_name.clone(); move |e: InputEvent| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    parent_name.set(input.value());
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

                                    <div class="form-row">
                                        <div class="form-field">
                                            <label for="studentName">{"Nombre del estudiante"}</label>
                                            <input
                                                id="studentName"
                                                placeholder="Nombre del niño/a"
                                                required=true
                                                disabled={*sending}
                                                value={(*student_name).clone()}
                                                oninput={let student_name = student_name.clone(); move |e: InputEvent| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    student_name.set(input.value());
                                                }}
                                            />
                                        </div>
                                        <div class="form-field">
                                            <label for="grade">{"Grado de interés"}</label>
                                            <select
                                                id="grade"
                                                required=true
                                                disabled={*sending}
                                                value={(*grade).clone()}
                                                onchange={let grade = grade.clone(); move |e: Event| {
                                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                                    grade.set(select.value());
                                                }}
                                            >
                                                <option value="" selected={grade.is_empty()}>{"Seleccionar..."}</option>
                                                {
                                                    GRADE_OPTIONS.iter().map(|(code, label)| html! {
                                                        <option
                                                            key={*code}
                                                            value={*code}
                                                            selected={*grade == *code}
                                                        >
                                                            {*label}
                                                        </option>
                                                    }).collect::<Html>()
                                                }
                                            </select>
                                        </div>
                                    </div>

                                    <div class="form-field">
                                        <label for="message">{"Mensaje o consulta (opcional)"}</label>
                                        <textarea
                                            id="message"
                                            placeholder="¿Tienes alguna pregunta específica?"
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
                                        { if *sending { "Enviando..." } else { "Enviar Solicitud" } }
                                    </button>
                                </form>
                            }
                        }
                    }

                    <div class="direct-contact">
                        <p>{"¿Prefieres contactarnos directamente?"}</p>
                        <div class="cta-row">
                            <a class="btn btn-outline" href={config::LANDLINE_TEL}>{"📞 Llamar Ahora"}</a>
                            <a
                                class="btn btn-whatsapp"
                                href={WHATSAPP_ENROLLMENT_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"WhatsApp"}
                            </a>
                            <a
                                class="btn btn-secondary"
                                href={config::CALENDAR_BOOKING_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"📅 Reservar Cita"}
                            </a>
                        </div>
                    </div>
                </div>
            </Section>

            <section class="cta-band section-primary">
                <div class="container">
                    <h2>{"Agenda una cita con nuestro equipo"}</h2>
                    <p>
                        {"Reserva tu espacio en el horario disponible. Podemos atenderte de forma \
                          presencial o por Google Meet, según coordinación previa."}
                    </p>
                    <a
                        class="btn btn-secondary btn-lg"
                        href={config::CALENDAR_BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"📅 Agendar Cita"}
                    </a>
                </div>
            </section>

            <Footer />
            <WhatsAppButton />

            <style>
                {r#"
                .step-card {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }
                .price-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .price-card {
                    border-radius: 12px;
                    padding: 1.25rem;
                }
                .price-card h4 {
                    margin-bottom: 0.75rem;
                }
                .price-card-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .price-label {
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin: 0;
                }
                .price-value {
                    font-weight: 700;
                    margin: 0;
                }
                .fine-print {
                    font-size: 0.8rem;
                    color: var(--muted);
                    margin-top: 0.75rem;
                }
                .direct-contact {
                    margin-top: 2rem;
                    text-align: center;
                }
                .direct-contact > p {
                    color: var(--muted);
                    margin-bottom: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}

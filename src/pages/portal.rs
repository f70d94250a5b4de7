use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const COMING_SOON_MESSAGE: &str =
    "El Portal de Padres estará disponible próximamente. ¡Gracias por tu paciencia!";

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "📖",
        "Notas en línea",
        "Consulta las calificaciones de tu hijo en tiempo real.",
    ),
    (
        "📈",
        "Seguimiento de progreso",
        "Observaciones de docentes sobre el desarrollo de tu hijo.",
    ),
    (
        "🔔",
        "Comunicados",
        "Recibe avisos importantes directamente del colegio.",
    ),
    (
        "💳",
        "Estado de cuenta",
        "Revisa pagos pendientes y realiza transacciones.",
    ),
];

/// Placeholder login: no credentials are checked anywhere, submitting only
/// spins briefly and announces that the portal is not live yet.
#[function_component(Portal)]
pub fn portal() -> Html {
    let is_loading = use_state(|| false);

    let onsubmit = {
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            is_loading.set(true);
            let is_loading = is_loading.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1_500).await;
                is_loading.set(false);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(COMING_SOON_MESSAGE);
                }
            });
        })
    };

    html! {
        <div class="page portal-page hero-gradient">
            <div class="container portal-back">
                <Link<Route> to={Route::Home} classes="btn btn-ghost">
                    {"← Volver al inicio"}
                </Link<Route>>
            </div>

            <div class="container portal-grid">
                <div class="portal-intro">
                    <div class="portal-brand">
                        <img src="/assets/logo.png" alt="Logo" />
                        <div>
                            <h2>{"Portal para Padres"}</h2>
                            <p>{"Centro Educativo El Buen Pastor"}</p>
                        </div>
                    </div>
                    <p class="portal-lead">
                        {"Accede al portal exclusivo para padres y mantente informado sobre el \
                          progreso académico de tus hijos, comunicados importantes y el estado de \
                          cuenta."}
                    </p>
                    <div class="card-grid cols-2">
                        {
                            FEATURES.iter().map(|(icon, title, description)| html! {
                                <div key={*title} class="portal-feature">
                                    <span aria-hidden="true">{*icon}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="portal-login">
                    <div class="portal-login-header">
                        <h1>{"Iniciar Sesión"}</h1>
                        <p>{"Ingresa tus credenciales para acceder"}</p>
                    </div>

                    <form onsubmit={onsubmit} class="lead-form">
                        <div class="form-field">
                            <label for="username">{"Usuario o Correo"}</label>
                            <input
                                id="username"
                                placeholder="Tu usuario o correo"
                                required=true
                                disabled={*is_loading}
                            />
                        </div>
                        <div class="form-field">
                            <label for="password">{"Contraseña"}</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Tu contraseña"
                                required=true
                                disabled={*is_loading}
                            />
                        </div>
                        <button type="submit" class="btn btn-cta btn-lg full-width" disabled={*is_loading}>
                            { if *is_loading { "Ingresando..." } else { "Ingresar al Portal" } }
                        </button>
                    </form>

                    <div class="portal-login-footer">
                        <p>{"¿No tienes acceso al portal?"}</p>
                        <Link<Route> to={Route::Contacto} classes="btn btn-outline">
                            {"Contactar Administración"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .portal-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    padding-bottom: 3rem;
                }
                .portal-back {
                    padding: 1rem 1.5rem;
                }
                .portal-grid {
                    flex: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    padding: 3rem 1.5rem;
                }
                .portal-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .portal-brand img {
                    width: 64px;
                    height: 64px;
                }
                .portal-brand p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    margin: 0;
                }
                .portal-lead {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                .portal-feature {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1rem;
                }
                .portal-feature span {
                    font-size: 1.4rem;
                }
                .portal-feature h3 {
                    font-size: 0.95rem;
                    margin: 0.5rem 0 0.25rem;
                }
                .portal-feature p {
                    font-size: 0.8rem;
                    color: var(--muted);
                    margin: 0;
                }
                .portal-login {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 420px;
                    width: 100%;
                    margin: 0 auto;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                }
                .portal-login-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .portal-login-header p {
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .portal-login-footer {
                    margin-top: 1.5rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    text-align: center;
                }
                .portal-login-footer p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }
                @media (max-width: 900px) {
                    .portal-grid {
                        grid-template-columns: 1fr;
                    }
                    .portal-intro {
                        order: 2;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::section::{Section, SectionHeader};
use crate::components::whatsapp::WhatsAppButton;
use crate::Route;

const VALUES: &[(&str, &str, &str, &str)] = &[
    (
        "❤",
        "Amor",
        "El amor es la base de nuestra enseñanza. Cada niño es tratado con cariño y respeto.",
        "pink",
    ),
    (
        "📖",
        "Excelencia",
        "Buscamos la excelencia en todo lo que hacemos, inspirando a nuestros estudiantes a dar lo mejor.",
        "blue",
    ),
    (
        "👨‍👩‍👧",
        "Comunidad",
        "Fomentamos un sentido de familia y pertenencia entre estudiantes, padres y docentes.",
        "green",
    ),
    (
        "🛡",
        "Integridad",
        "Enseñamos con el ejemplo, promoviendo la honestidad y la responsabilidad.",
        "yellow",
    ),
];

const TIMELINE: &[(&str, &str)] = &[
    ("2013", "Fundación del centro educativo como un preescolar Golden Heaven"),
    ("2015", "Apertura del programa de primaria"),
    ("2018", "Ampliación de instalaciones"),
    ("2024", "Una gran comunidad tiene confianza en nosotros"),
];

#[function_component(Nosotros)]
pub fn nosotros() -> Html {
    html! {
        <div class="page">
            <section class="page-hero hero-gradient">
                <div class="container">
                    <img src="/assets/logo.png" alt="Logo" class="page-hero-logo" />
                    <h1>
                        {"Centro Educativo El Buen Pastor "}
                        <span class="golden">{"Golden Heaven"}</span>
                    </h1>
                    <p>
                        {"Somos una institución educativa panameña comprometida con la formación \
                          integral de niños desde preescolar hasta primaria, combinando excelencia \
                          académica con valores cristianos en un ambiente de amor y seguridad."}
                    </p>
                </div>
            </section>

            <Section class={classes!("section-muted")}>
                <div class="card-grid cols-2">
                    <div class="panel-card">
                        <h2>{"🎯 Nuestra Misión"}</h2>
                        <p>
                            {"Brindar una educación de calidad fundamentada en valores cristianos, \
                              desarrollando las capacidades intelectuales, emocionales y sociales \
                              de cada estudiante, preparándolos para enfrentar los retos del futuro \
                              con éxito y responsabilidad."}
                        </p>
                    </div>
                    <div class="panel-card">
                        <h2>{"👁 Nuestra Visión"}</h2>
                        <p>
                            {"Ser reconocidos como una institución educativa líder en Panamá, \
                              formando líderes íntegros con sólidas bases académicas y valores que \
                              contribuyan positivamente a la sociedad."}
                        </p>
                    </div>
                </div>
            </Section>

            <Section>
                <SectionHeader
                    badge="Nuestros Valores"
                    title="Los pilares que nos guían"
                    subtitle="Cada día trabajamos para inculcar estos valores en nuestros estudiantes."
                />
                <div class="card-grid cols-4">
                    {
                        VALUES.iter().map(|(icon, title, description, color)| html! {
                            <div key={*title} class="feature-card centered">
                                <div class={classes!("feature-card-icon", format!("pastel-{color}"))}>
                                    <span aria-hidden="true">{*icon}</span>
                                </div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section class={classes!("section-primary")}>
                <div class="section-header centered">
                    <span class="section-badge">{"Nuestra Historia"}</span>
                    <h2>{"Un camino de crecimiento y dedicación"}</h2>
                </div>
                <ul class="timeline">
                    {
                        TIMELINE.iter().map(|(year, event)| html! {
                            <li key={*year}>
                                <p class="timeline-year">{*year}</p>
                                <p>{*event}</p>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </Section>

            <Section>
                <SectionHeader badge="¿Por qué elegirnos?" title="Lo que nos hace diferentes" />
                <div class="card-grid cols-3">
                    <div class="method-card">
                        <div class="feature-card-icon pastel-yellow"><span aria-hidden="true">{"🏅"}</span></div>
                        <h3>{"Trayectoria"}</h3>
                        <p>{"Años de experiencia formando generaciones de estudiantes exitosos."}</p>
                    </div>
                    <div class="method-card">
                        <div class="feature-card-icon pastel-blue"><span aria-hidden="true">{"👨‍👩‍👧"}</span></div>
                        <h3>{"Comunidad"}</h3>
                        <p>{"Más de 500 familias forman parte de nuestra comunidad educativa."}</p>
                    </div>
                    <div class="method-card">
                        <div class="feature-card-icon pastel-pink"><span aria-hidden="true">{"⭐"}</span></div>
                        <h3>{"Excelencia"}</h3>
                        <p>{"Compromiso constante con la mejora continua y la calidad educativa."}</p>
                    </div>
                </div>
            </Section>

            <section class="cta-band hero-gradient">
                <div class="container">
                    <h2>{"Sé parte de nuestra familia"}</h2>
                    <p>
                        {"Te invitamos a conocernos y descubrir por qué somos la mejor opción para \
                          la educación de tu hijo."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Admisiones} classes="btn btn-cta btn-lg">
                            {"Comenzar Inscripción"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contacto} classes="btn btn-outline btn-lg">
                            {"Agendar Visita"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <Footer />
            <WhatsAppButton />

            <style>
                {r#"
                .timeline {
                    list-style: none;
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 0;
                    border-left: 2px solid rgba(255, 255, 255, 0.25);
                }
                .timeline li {
                    position: relative;
                    padding: 0 0 1.5rem 1.75rem;
                }
                .timeline li::before {
                    content: '';
                    position: absolute;
                    left: -9px;
                    top: 6px;
                    width: 14px;
                    height: 14px;
                    border-radius: 50%;
                    background: var(--golden);
                }
                .timeline-year {
                    font-weight: 700;
                    color: var(--golden-light);
                    margin-bottom: 0.25rem;
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::section::{Section, SectionHeader};
use crate::components::whatsapp::WhatsAppButton;
use crate::Route;

struct ProgramSection {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    image: &'static str,
    color: &'static str,
    features: &'static [&'static str],
}

const PROGRAMS: &[ProgramSection] = &[
    ProgramSection {
        id: "kinder",
        title: "Pre-kínder",
        subtitle: "4 años",
        description: "Primera experiencia escolar donde el aprendizaje se da a través del juego, \
                      la exploración y el descubrimiento.",
        image: "/assets/pre-kinder.jpg",
        color: "pink",
        features: &[
            "Desarrollo de motricidad fina y gruesa",
            "Estimulación del lenguaje",
            "Iniciación a la lectoescritura",
            "Socialización y valores",
            "Arte y expresión creativa",
            "Inglés básico",
        ],
    },
    ProgramSection {
        id: "kinder-plus",
        title: "Kínder",
        subtitle: "5 años",
        description: "Programa de transición que prepara a los niños para el éxito en la \
                      educación primaria con bases sólidas.",
        image: "/assets/kinder-hero.jpg",
        color: "blue",
        features: &[
            "Lectoescritura avanzada",
            "Matemáticas básicas",
            "Preparación para primer grado",
            "Desarrollo de hábitos de estudio",
            "Inglés interactivo",
            "Valores y convivencia",
        ],
    },
    ProgramSection {
        id: "primaria",
        title: "Primaria",
        subtitle: "1° a 6° Grado",
        description: "Formación integral con énfasis en el desarrollo académico, valores \
                      cristianos y habilidades para la vida.",
        image: "/assets/primaria-hero.jpg",
        color: "green",
        features: &[
            "Currículo MEDUCA actualizado",
            "Inglés intensivo",
            "Matemáticas y ciencias",
            "Español y literatura",
            "Formación en valores",
            "Arte, música y educación física",
        ],
    },
];

const SUBJECTS: &[(&str, &str)] = &[
    ("📖", "Español"),
    ("🔢", "Matemáticas"),
    ("🌿", "Ciencias Naturales"),
    ("🌎", "Ciencias Sociales"),
    ("🗣", "Inglés"),
    ("🎨", "Arte"),
    ("💻", "Tecnología"),
    ("🤖", "Robótica"),
    ("💡", "Emprendurismo"),
    ("❤", "Valores"),
];

#[function_component(Academico)]
pub fn academico() -> Html {
    html! {
        <div class="page">
            <section class="page-hero hero-gradient">
                <div class="container">
                    <span class="hero-badge">{"Oferta Académica"}</span>
                    <h1>{"Educación de calidad para cada etapa"}</h1>
                    <p>
                        {"Desde preescolar hasta primaria, ofrecemos programas diseñados para \
                          desarrollar el potencial único de cada niño en un ambiente de amor y \
                          excelencia."}
                    </p>
                </div>
            </section>

            {
                PROGRAMS.iter().enumerate().map(|(index, program)| {
                    let alternate = index % 2 == 1;
                    html! {
                        <Section
                            key={program.id}
                            id={program.id.to_string()}
                            class={classes!(alternate.then_some("section-muted"))}
                        >
                            <div class={classes!("program-split", alternate.then_some("reversed"))}>
                                <div class="program-split-image">
                                    <div class={classes!("program-split-backdrop", format!("pastel-{}", program.color))}></div>
                                    <img src={program.image} alt={program.title} loading="lazy" />
                                </div>
                                <div>
                                    <span class={classes!("section-badge", format!("pastel-{}", program.color))}>
                                        {program.subtitle}
                                    </span>
                                    <h2>{program.title}</h2>
                                    <p class="program-split-description">{program.description}</p>
                                    <ul class="check-list">
                                        {
                                            program.features.iter().map(|feature| html! {
                                                <li key={*feature}>{*feature}</li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                    <Link<Route> to={Route::Admisiones} classes="btn btn-cta btn-lg">
                                        {format!("Inscribir en {}", program.title)}
                                    </Link<Route>>
                                </div>
                            </div>
                        </Section>
                    }
                }).collect::<Html>()
            }

            <Section class={classes!("section-primary")}>
                <div class="section-header centered">
                    <h2>{"Áreas de aprendizaje"}</h2>
                    <p class="section-subtitle">
                        {"Currículo integral que desarrolla todas las dimensiones del estudiante."}
                    </p>
                </div>
                <p class="subjects-intro">
                    {"Nuestro currículo está alineado con los estándares del MEDUCA y enriquecido \
                      con programas complementarios de inglés, arte y formación en valores."}
                </p>
                <div class="subject-grid">
                    {
                        SUBJECTS.iter().map(|(icon, name)| html! {
                            <div key={*name} class="subject-tile">
                                <span class="subject-icon" aria-hidden="true">{*icon}</span>
                                <p>{*name}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section>
                <SectionHeader
                    badge="Nuestra Metodología"
                    title="Aprendizaje significativo y personalizado"
                    subtitle="Cada niño aprende de manera diferente. Nuestro enfoque pedagógico se adapta a las necesidades individuales."
                />
                <div class="card-grid cols-3">
                    <div class="method-card">
                        <div class="feature-card-icon pastel-pink"><span aria-hidden="true">{"❤"}</span></div>
                        <h3>{"Ambiente de Amor"}</h3>
                        <p>{"Creamos un espacio seguro donde cada niño se siente valorado y motivado a aprender."}</p>
                    </div>
                    <div class="method-card">
                        <div class="feature-card-icon pastel-blue"><span aria-hidden="true">{"👨‍👩‍👧"}</span></div>
                        <h3>{"Grupos Reducidos"}</h3>
                        <p>{"Atención personalizada con grupos pequeños que permiten seguir el progreso de cada estudiante."}</p>
                    </div>
                    <div class="method-card">
                        <div class="feature-card-icon pastel-green"><span aria-hidden="true">{"🎓"}</span></div>
                        <h3>{"Docentes Capacitados"}</h3>
                        <p>{"Equipo de profesionales comprometidos con la excelencia educativa y el desarrollo integral."}</p>
                    </div>
                </div>
            </Section>

            <section class="cta-band section-muted">
                <div class="container">
                    <h2>{"¿Listo para dar el siguiente paso?"}</h2>
                    <p>{"Agenda una visita a nuestras instalaciones y conoce de cerca cómo trabajamos."}</p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Admisiones} classes="btn btn-cta btn-lg">
                            {"Iniciar Inscripción"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contacto} classes="btn btn-outline btn-lg">
                            {"Contáctanos"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <Footer />
            <WhatsAppButton />

            <style>
                {r#"
                .program-split {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .program-split.reversed .program-split-image {
                    order: 2;
                }
                .program-split-image {
                    position: relative;
                }
                .program-split-backdrop {
                    position: absolute;
                    inset: -1rem;
                    border-radius: 24px;
                    transform: rotate(3deg);
                    z-index: -1;
                }
                .program-split-image img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 16px;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                }
                .program-split-description {
                    font-size: 1.1rem;
                    color: var(--muted);
                    margin: 1rem 0 1.5rem;
                }
                .subjects-intro {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .subject-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
                    gap: 1rem;
                }
                .subject-tile {
                    background: rgba(255, 255, 255, 0.12);
                    border-radius: 12px;
                    padding: 1.5rem 0.75rem;
                    text-align: center;
                }
                .subject-icon {
                    font-size: 1.8rem;
                    display: block;
                    margin-bottom: 0.6rem;
                }
                .method-card {
                    text-align: center;
                }
                .method-card .feature-card-icon {
                    margin: 0 auto 1rem;
                }
                @media (max-width: 900px) {
                    .program-split {
                        grid-template-columns: 1fr;
                    }
                    .program-split.reversed .program-split-image {
                        order: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

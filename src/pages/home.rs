use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{FeatureCard, ProgramCard, TestimonialCard};
use crate::components::footer::Footer;
use crate::components::section::{Section, SectionHeader};
use crate::components::whatsapp::WhatsAppButton;
use crate::config;
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "❤",
        title: "Valores Cristianos",
        description: "Formamos niños con amor, respeto y principios que guiarán su vida.",
        color: "pink",
    },
    Feature {
        icon: "📖",
        title: "Excelencia Académica",
        description: "Currículo actualizado y metodologías innovadoras para un aprendizaje significativo.",
        color: "blue",
    },
    Feature {
        icon: "👨‍👩‍👧",
        title: "Atención Personalizada",
        description: "Grupos reducidos que permiten acompañar el desarrollo único de cada estudiante.",
        color: "green",
    },
    Feature {
        icon: "🛡",
        title: "Ambiente Seguro",
        description: "Instalaciones protegidas y supervisión constante para tu tranquilidad.",
        color: "yellow",
    },
];

struct Program {
    image: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    href: &'static str,
    color: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        image: "/assets/pre-kinder.jpg",
        title: "Pre-kínder 4 años",
        subtitle: "Pre-kínder",
        description: "Desarrollo integral para los más pequeños a través del juego y el descubrimiento.",
        href: "/academico#kinder",
        color: "pink",
    },
    Program {
        image: "/assets/kinder-hero.jpg",
        title: "Kínder 5 años",
        subtitle: "Kínder",
        description: "Preparación sólida para el ingreso exitoso a la educación primaria.",
        href: "/academico#kinder-plus",
        color: "blue",
    },
    Program {
        image: "/assets/primaria-hero.jpg",
        title: "Primaria",
        subtitle: "1° a 6° Grado",
        description: "Educación de calidad con énfasis en lectura, matemáticas y valores.",
        href: "/academico#primaria",
        color: "green",
    },
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Mi hijo ha crecido tanto académica como personalmente. Los maestros son dedicados y realmente se preocupan por cada estudiante.",
        "María González",
        "Madre de estudiante de 3° grado",
    ),
    (
        "El ambiente familiar y los valores que enseñan hacen la diferencia. Estamos muy agradecidos de ser parte de esta comunidad.",
        "Carlos Pérez",
        "Padre de estudiante de Kínder",
    ),
    (
        "Excelente institución. La comunicación con los padres es constante y el portal nos permite seguir el progreso de nuestros hijos.",
        "Ana Rodríguez",
        "Madre de estudiantes de 2° y 5° grado",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("15+", "Años de experiencia"),
    ("Muchas", "Familias confían en nosotros"),
    ("98%", "Satisfacción de padres"),
    ("100%", "Compromiso con tu hijo"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <section class="home-hero">
                <div class="home-hero-background">
                    <img src="/assets/hero-classroom.jpg" alt="Ambiente educativo" />
                </div>
                <div class="container home-hero-content">
                    <div class="home-hero-brand">
                        <img src="/assets/logo.png" alt="Logo" />
                        <div>
                            <p>{"Centro Educativo El Buen Pastor"}</p>
                            <p class="golden">{"Golden Heaven"}</p>
                        </div>
                    </div>

                    <h1>
                        {"Formando niños con "}
                        <span class="accent">{"valores"}</span>
                        {", amor y "}
                        <span class="golden">{"excelencia"}</span>
                        {"."}
                    </h1>

                    <p class="home-hero-lead">
                        {"En el Centro Educativo El Buen Pastor Golden Heaven, cada niño es único. \
                          Ofrecemos educación de calidad desde preescolar hasta primaria, en un \
                          ambiente seguro y lleno de amor."}
                    </p>

                    <div class="cta-row">
                        <Link<Route> to={Route::Admisiones} classes="btn btn-cta btn-xl">
                            {"¡Inscríbete Ahora!"}
                        </Link<Route>>
                        <a class="btn btn-outline btn-xl" href={config::LANDLINE_TEL}>
                            {"Llámanos"}
                        </a>
                    </div>

                    <div class="home-hero-trust">
                        <span>{"Muchas familias confían en nosotros"}</span>
                        <span class="stars" aria-hidden="true">{"★★★★★"}</span>
                        <span>{"Recomendado por padres"}</span>
                    </div>
                </div>
            </section>

            <Section class={classes!("section-gradient")}>
                <SectionHeader
                    badge="¿Por qué elegirnos?"
                    title="Una educación que marca la diferencia"
                    subtitle="Combinamos excelencia académica con formación en valores para preparar a los líderes del mañana."
                />
                <div class="card-grid cols-4">
                    {
                        FEATURES.iter().map(|f| html! {
                            <FeatureCard
                                key={f.title}
                                icon={f.icon}
                                title={f.title}
                                description={f.description}
                                color={f.color}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section>
                <SectionHeader
                    badge="Oferta Académica"
                    title="Programas diseñados para cada etapa"
                    subtitle="Desde los primeros pasos en preescolar hasta la culminación de primaria, acompañamos el crecimiento de tu hijo."
                />
                <div class="card-grid cols-3">
                    {
                        PROGRAMS.iter().map(|p| html! {
                            <ProgramCard
                                key={p.title}
                                image={p.image}
                                title={p.title}
                                subtitle={p.subtitle}
                                description={p.description}
                                href={p.href}
                                color={p.color}
                            />
                        }).collect::<Html>()
                    }
                </div>
                <div class="center-row">
                    <Link<Route> to={Route::Academico} classes="btn btn-outline btn-lg">
                        {"Ver todos los programas"}
                    </Link<Route>>
                </div>
            </Section>

            <section class="stats-band">
                <div class="container card-grid cols-4">
                    {
                        STATS.iter().map(|(value, label)| html! {
                            <div key={*label} class="stat">
                                <p class="stat-value">{*value}</p>
                                <p class="stat-label">{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <Section class={classes!("section-gradient")}>
                <SectionHeader
                    badge="Testimonios"
                    title="Lo que dicen nuestras familias"
                    subtitle="La satisfacción de nuestras familias es nuestra mayor recompensa."
                />
                <div class="card-grid cols-3">
                    {
                        TESTIMONIALS.iter().map(|(quote, author, role)| html! {
                            <TestimonialCard key={*author} quote={*quote} author={*author} role={*role} />
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <section class="cta-band hero-gradient">
                <div class="container">
                    <img src="/assets/logo.png" alt="Logo" class="cta-band-logo" />
                    <h2>{"¿Listo para ser parte de nuestra familia?"}</h2>
                    <p>
                        {"Las matrículas para el año escolar 2026 están abiertas. No pierdas la \
                          oportunidad de brindarle a tu hijo la mejor educación."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Admisiones} classes="btn btn-cta btn-xl">
                            {"Iniciar Proceso de Matrícula"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contacto} classes="btn btn-outline btn-xl">
                            {"Solicitar Información"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <Footer />
            <WhatsAppButton />

            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 80px;
                }
                .home-hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .home-hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .home-hero-background::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right,
                        rgba(255, 252, 245, 0.75),
                        rgba(255, 252, 245, 0.35));
                }
                .home-hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 720px;
                    margin-left: 0;
                }
                .home-hero-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .home-hero-brand img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #fff;
                    padding: 2px;
                }
                .home-hero-brand p {
                    margin: 0;
                    font-weight: 600;
                    line-height: 1.3;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1.25rem;
                }
                .home-hero-lead {
                    font-size: 1.15rem;
                    font-weight: 600;
                    margin-bottom: 2rem;
                }
                .home-hero-trust {
                    margin-top: 2.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                    font-weight: 600;
                }
                .home-hero-trust .stars {
                    color: var(--golden);
                    font-size: 1.3rem;
                    letter-spacing: 2px;
                }
                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

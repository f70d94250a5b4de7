use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::section::Section;
use crate::components::whatsapp::WhatsAppButton;
use crate::config;
use crate::gallery::{self, GalleryItem};
use crate::Route;

struct NewsItem {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    date: Option<&'static str>,
    category: &'static str,
    color: &'static str,
    image_src: &'static str,
    image_alt: &'static str,
    article_title: &'static str,
    article_body: &'static [&'static str],
    primary_cta: Option<(&'static str, Route)>,
}

const NEWS: &[NewsItem] = &[
    NewsItem {
        id: 1,
        title: "Matrículas 2026 Abiertas",
        excerpt: "Inicia el proceso de inscripción para el año escolar 2026. Te acompañamos en cada paso.",
        date: None,
        category: "Admisiones",
        color: "pink",
        image_src: "/assets/matriculas-2026.png",
        image_alt: "Matrículas 2026",
        article_title: "Matrículas 2026",
        article_body: &[
            "Estamos iniciando el proceso de inscripción para el año escolar 2026.",
            "Para comenzar:",
            "• Revisa la información de admisiones en nuestra web.",
            "• Solicita o completa los formularios necesarios.",
            "• Si tienes dudas, contáctanos desde la página de Contacto.",
            "• También puedes comunicarte por nuestro teléfono fijo o por WhatsApp (botón disponible en la página) y con gusto te orientamos.",
            "Atención: la coordinación y seguimiento se realizan según disponibilidad y con cita previa cuando aplique.",
        ],
        primary_cta: Some(("Ir a Admisiones", Route::Admisiones)),
    },
    NewsItem {
        id: 2,
        title: "Summer Fun",
        excerpt: "Actividades y diversión para nuestros estudiantes durante la temporada de verano.",
        date: None,
        category: "Eventos",
        color: "blue",
        image_src: "/assets/summer-fun.png",
        image_alt: "Summer Fun",
        article_title: "Summer Fun",
        article_body: &[
            "Una experiencia especial con actividades recreativas y dinámicas para fortalecer habilidades, convivencia y disfrute en un ambiente seguro.",
            "Summer Fun ya se está realizando y hemos completado la primera semana, la cual ha tenido excelente acogida por parte de acudientes y estudiantes.",
            "Todavía estás a tiempo para la segunda semana del lunes 9 al jueves 12 de febrero.",
            "Para más información sobre cupos, horarios y requisitos, contáctanos por WhatsApp o desde la página de Contacto.",
        ],
        primary_cta: Some(("Ir a Contacto", Route::Contacto)),
    },
    NewsItem {
        id: 3,
        title: "Feria de Ciencias",
        excerpt: "Nuestros estudiantes presentan proyectos creativos y experimentos que despiertan su curiosidad.",
        date: None,
        category: "Académico",
        color: "green",
        image_src: "/assets/feria-ciencias.jpg",
        image_alt: "Feria de Ciencias",
        article_title: "Feria de Ciencias",
        article_body: &[
            "Nuestra Feria de Ciencias se convierte en un espacio especial para descubrir, experimentar y compartir aprendizajes. Los estudiantes presentan proyectos que reflejan su curiosidad y creatividad, explicando ideas, procesos y resultados con entusiasmo.",
            "A través de experimentos y demostraciones, se refuerzan habilidades como la observación, el pensamiento crítico y la comunicación. Es una jornada donde el aprendizaje se vive de forma práctica y significativa para toda la comunidad escolar.",
            "Esta feria se realizará en el mes de octubre, próximamente.",
        ],
        primary_cta: Some(("Ir a Contacto", Route::Contacto)),
    },
];

struct EventItem {
    id: u32,
    title: &'static str,
    date: Option<&'static str>,
    time: Option<&'static str>,
    details_title: &'static str,
    details_body: &'static [&'static str],
}

const EVENTS: &[EventItem] = &[
    EventItem {
        id: 1,
        title: "Reunión de Padres de Familia",
        date: None,
        time: None,
        details_title: "Reunión de Padres de Familia",
        details_body: &[
            "En esta sección compartiremos la información de la próxima reunión de padres de familia: fecha, hora, temas a tratar y recomendaciones.",
            "Por el momento, los detalles están por confirmarse.",
            "Te sugerimos estar pendiente del Boletín Informativo y de nuestras noticias para conocer la actualización.",
        ],
    },
    EventItem {
        id: 2,
        title: "Summer Fun",
        date: Some("Del 2 al 12 de febrero"),
        time: Some("8:00 a.m. a 12:00 m."),
        details_title: "Summer Fun",
        details_body: &[
            "Una experiencia especial con actividades recreativas y dinámicas para fortalecer habilidades, convivencia y disfrute en un ambiente seguro.",
            "Summer Fun ya se está realizando y hemos completado la primera semana, la cual ha tenido excelente acogida por parte de acudientes y estudiantes.",
            "Todavía estás a tiempo para la segunda semana del lunes 9 al jueves 12 de febrero.",
            "Para más información sobre cupos, horarios y requisitos, contáctanos por WhatsApp o desde la página de Contacto.",
        ],
    },
    EventItem {
        id: 3,
        title: "Boletín Informativo",
        date: None,
        time: None,
        details_title: "Boletín Informativo",
        details_body: &[
            "Este espacio está destinado a compartir información importante para padres de familia: avisos, recordatorios, comunicados y actualizaciones del centro educativo.",
            "Publicaremos aquí novedades relacionadas con actividades, fechas relevantes y orientaciones generales para acompañar el proceso escolar.",
            "Mantente pendiente de esta sección para futuras publicaciones.",
        ],
    },
];

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Noticias,
    Eventos,
    Galeria,
}

/// The single overlay slot for this page. One tagged value instead of three
/// independent optionals, so two modals can never be open at once.
#[derive(Clone, Debug, PartialEq)]
pub enum Overlay {
    None,
    News(u32),
    Event(u32),
    Photo(usize),
}

/// Resulting overlay state for a key press, or `None` when the key is not
/// handled. Escape closes whatever is open; the arrow keys page through the
/// photos only while the lightbox is open with more than one item.
fn overlay_after_key(current: &Overlay, key: &str, photo_count: usize) -> Option<Overlay> {
    match key {
        "Escape" if *current != Overlay::None => Some(Overlay::None),
        "ArrowLeft" => match current {
            Overlay::Photo(i) if photo_count > 1 => {
                Some(Overlay::Photo(gallery::prev_index(*i, photo_count)))
            }
            _ => None,
        },
        "ArrowRight" => match current {
            Overlay::Photo(i) if photo_count > 1 => {
                Some(Overlay::Photo(gallery::next_index(*i, photo_count)))
            }
            _ => None,
        },
        _ => None,
    }
}

#[function_component(Comunidad)]
pub fn comunidad() -> Html {
    let active_tab = use_state(|| Tab::Noticias);
    let overlay = use_state(|| Overlay::None);

    let gallery_items = use_memo(|_| gallery::load_items(), ());
    let photo_count = gallery_items.len();

    // Global keydown listener, alive only while an overlay is open.
    {
        let overlay_setter = overlay.clone();
        use_effect_with_deps(
            move |current: &Overlay| {
                let mut keydown: Option<Closure<dyn FnMut(KeyboardEvent)>> = None;
                if *current != Overlay::None {
                    let current = current.clone();
                    let cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if let Some(next) = overlay_after_key(&current, &e.key(), photo_count) {
                            overlay_setter.set(next);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    if let Some(window) = web_sys::window() {
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                    keydown = Some(cb);
                }
                move || {
                    if let (Some(cb), Some(window)) = (keydown, web_sys::window()) {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (*overlay).clone(),
        );
    }

    let set_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active_tab.set(tab);
        })
    };

    let open_overlay = |next: Overlay| {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            overlay.set(next.clone());
        })
    };

    let close_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            overlay.set(Overlay::None);
        })
    };

    let go_prev = {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Overlay::Photo(i) = *overlay {
                overlay.set(Overlay::Photo(gallery::prev_index(i, photo_count)));
            }
        })
    };

    let go_next = {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Overlay::Photo(i) = *overlay {
                overlay.set(Overlay::Photo(gallery::next_index(i, photo_count)));
            }
        })
    };

    let open_news = match *overlay {
        Overlay::News(id) => NEWS.iter().find(|n| n.id == id),
        _ => None,
    };
    let open_event = match *overlay {
        Overlay::Event(id) => EVENTS.iter().find(|ev| ev.id == id),
        _ => None,
    };
    let open_photo: Option<(usize, &GalleryItem)> = match *overlay {
        Overlay::Photo(i) => gallery_items.get(i).map(|item| (i, item)),
        _ => None,
    };

    html! {
        <div class="page">
            <section class="page-hero hero-gradient">
                <div class="container">
                    <h1>{"Nuestra Comunidad"}</h1>
                    <p>
                        {"Mantente al día con las últimas noticias, eventos y momentos especiales \
                          de nuestra familia Golden Heaven."}
                    </p>
                </div>
            </section>

            <Section>
                <div class="tab-row">
                    {
                        [
                            (Tab::Noticias, "📰 Noticias"),
                            (Tab::Eventos, "📅 Eventos"),
                            (Tab::Galeria, "🖼 Galería"),
                        ].into_iter().map(|(tab, label)| html! {
                            <button
                                key={label}
                                class={classes!(
                                    "btn",
                                    "btn-lg",
                                    if *active_tab == tab { "btn-primary" } else { "btn-outline" },
                                )}
                                onclick={set_tab(tab)}
                            >
                                {label}
                            </button>
                        }).collect::<Html>()
                    }
                </div>

                {
                    match *active_tab {
                        Tab::Noticias => html! {
                            <>
                                <div class="card-grid cols-3">
                                    {
                                        NEWS.iter().map(|item| html! {
                                            <article key={item.id} class="news-card">
                                                <img src={item.image_src} alt={item.image_alt} loading="lazy" />
                                                <div class="news-card-body">
                                                    <div class="news-card-meta">
                                                        <span class={classes!("news-card-category", format!("pastel-{}", item.color))}>
                                                            {item.category}
                                                        </span>
                                                        <span class="news-card-date">
                                                            {item.date.unwrap_or("Próximamente")}
                                                        </span>
                                                    </div>
                                                    <h3>{item.title}</h3>
                                                    <p>{item.excerpt}</p>
                                                    <button
                                                        class="link-button"
                                                        onclick={open_overlay(Overlay::News(item.id))}
                                                        aria-label={format!("Leer más sobre {}", item.title)}
                                                    >
                                                        {"Leer más →"}
                                                    </button>
                                                </div>
                                            </article>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <p class="tab-footnote">{"Próximamente más noticias y actualizaciones..."}</p>
                            </>
                        },
                        Tab::Eventos => html! {
                            <div class="narrow">
                                <div class="event-list">
                                    {
                                        EVENTS.iter().map(|event| html! {
                                            <button
                                                key={event.id}
                                                class="event-row"
                                                onclick={open_overlay(Overlay::Event(event.id))}
                                                aria-label={format!("Abrir detalle: {}", event.title)}
                                            >
                                                <span class="event-row-icon" aria-hidden="true">{"📅"}</span>
                                                <span class="event-row-body">
                                                    <h3>{event.title}</h3>
                                                    <span class="event-row-meta">
                                                        <span>{format!("📅 {}", event.date.unwrap_or("Próximamente"))}</span>
                                                        <span>{format!("🕑 {}", event.time.unwrap_or("Por confirmar"))}</span>
                                                    </span>
                                                    <span class="link-button">{"Ver detalle →"}</span>
                                                </span>
                                            </button>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="tab-footnote">
                                    <p>{"Mantente informado sobre próximos eventos"}</p>
                                    <Link<Route> to={Route::Contacto} classes="btn btn-outline">
                                        {"Contáctanos para más información"}
                                    </Link<Route>>
                                </div>
                            </div>
                        },
                        Tab::Galeria => html! {
                            <>
                                {
                                    if gallery_items.is_empty() {
                                        html! {
                                            <div class="gallery-empty">
                                                <p>{"Aún no hay fotos en la galería."}</p>
                                                <p class="fine-print">
                                                    {"Agrega imágenes en assets/galeria/ con nombres como \
                                                      galeria-01.jpg a galeria-06.jpg."}
                                                </p>
                                            </div>
                                        }
                                    } else {
                                        html! {
                                            <div class="gallery-grid">
                                                {
                                                    gallery_items.iter().enumerate().map(|(index, image)| html! {
                                                        <button
                                                            key={image.id.clone()}
                                                            class="gallery-tile"
                                                            onclick={open_overlay(Overlay::Photo(index))}
                                                            aria-label={format!("Abrir foto: {}", image.alt)}
                                                        >
                                                            <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                                                        </button>
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        }
                                    }
                                }
                                <div class="tab-footnote">
                                    <p>{"Visita nuestras páginas de Facebook e Instagram para ver más fotos"}</p>
                                    <div class="cta-row">
                                        <a class="btn btn-outline" href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">
                                            {"Facebook"}
                                        </a>
                                        <a class="btn btn-outline" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                            {"Instagram"}
                                        </a>
                                    </div>
                                </div>
                            </>
                        },
                    }
                }
            </Section>

            <section class="cta-band section-primary">
                <div class="container">
                    <h2>{"¿Quieres ser parte de nuestra comunidad?"}</h2>
                    <p>{"Inscribe a tu hijo y únete a las familias que confían en nosotros."}</p>
                    <Link<Route> to={Route::Admisiones} classes="btn btn-secondary btn-lg">
                        {"Comenzar Inscripción"}
                    </Link<Route>>
                </div>
            </section>

            <Footer />
            <WhatsAppButton />

            {
                if let Some(news) = open_news {
                    html! {
                        <div class="modal-backdrop" role="dialog" aria-modal="true" aria-label={news.article_title}>
                            <button class="modal-scrim" onclick={close_overlay.clone()} aria-label="Cerrar"></button>
                            <div class="modal-card">
                                <div class="modal-header">
                                    <div>
                                        <p class="modal-kicker">{news.category}</p>
                                        <h3>{news.article_title}</h3>
                                    </div>
                                    <button class="icon-button" onclick={close_overlay.clone()} aria-label="Cerrar">
                                        {"✕"}
                                    </button>
                                </div>
                                <div class="modal-body">
                                    <img src={news.image_src} alt={news.image_alt} loading="lazy" />
                                    { news.article_body.iter().map(|line| html! { <p>{*line}</p> }).collect::<Html>() }
                                    <div class="cta-row">
                                        {
                                            if let Some((label, route)) = &news.primary_cta {
                                                html! {
                                                    <Link<Route> to={route.clone()} classes="btn btn-primary">
                                                        {*label}
                                                    </Link<Route>>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <Link<Route> to={Route::Contacto} classes="btn btn-outline">{"Contacto"}</Link<Route>>
                                        <button class="btn btn-ghost" onclick={close_overlay.clone()}>{"Cerrar"}</button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(event) = open_event {
                    html! {
                        <div class="modal-backdrop" role="dialog" aria-modal="true" aria-label={event.details_title}>
                            <button class="modal-scrim" onclick={close_overlay.clone()} aria-label="Cerrar"></button>
                            <div class="modal-card">
                                <div class="modal-header">
                                    <div>
                                        <p class="modal-kicker">{"Eventos"}</p>
                                        <h3>{event.details_title}</h3>
                                        <div class="event-row-meta">
                                            <span>{format!("📅 {}", event.date.unwrap_or("Próximamente"))}</span>
                                            <span>{format!("🕑 {}", event.time.unwrap_or("Por confirmar"))}</span>
                                        </div>
                                    </div>
                                    <button class="icon-button" onclick={close_overlay.clone()} aria-label="Cerrar">
                                        {"✕"}
                                    </button>
                                </div>
                                <div class="modal-body">
                                    { event.details_body.iter().map(|line| html! { <p>{*line}</p> }).collect::<Html>() }
                                    <div class="cta-row">
                                        <Link<Route> to={Route::Contacto} classes="btn btn-outline">{"Contacto"}</Link<Route>>
                                        <button class="btn btn-ghost" onclick={close_overlay.clone()}>{"Cerrar"}</button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some((_, item)) = open_photo {
                    html! {
                        <div class="modal-backdrop lightbox" role="dialog" aria-modal="true" aria-label="Vista previa de foto">
                            <button class="modal-scrim" onclick={close_overlay.clone()} aria-label="Cerrar"></button>
                            <div class="modal-card wide">
                                <div class="modal-header">
                                    <div class="lightbox-caption">
                                        <p class="modal-kicker">{&item.filename}</p>
                                        <p class="lightbox-alt">{&item.alt}</p>
                                    </div>
                                    <div class="lightbox-controls">
                                        {
                                            if photo_count > 1 {
                                                html! {
                                                    <>
                                                        <button class="icon-button" onclick={go_prev.clone()} aria-label="Foto anterior">
                                                            {"‹"}
                                                        </button>
                                                        <button class="icon-button" onclick={go_next.clone()} aria-label="Foto siguiente">
                                                            {"›"}
                                                        </button>
                                                    </>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <button class="icon-button" onclick={close_overlay.clone()} aria-label="Cerrar">
                                            {"✕"}
                                        </button>
                                    </div>
                                </div>
                                <div class="lightbox-stage">
                                    <img src={item.src.clone()} alt={item.alt.clone()} />
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .tab-row {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .tab-footnote {
                    text-align: center;
                    margin-top: 2rem;
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .tab-footnote p {
                    margin-bottom: 1rem;
                }
                .news-card {
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    overflow: hidden;
                }
                .news-card > img {
                    width: 100%;
                    height: 128px;
                    object-fit: cover;
                    display: block;
                }
                .news-card-body {
                    padding: 1.5rem;
                }
                .news-card-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .news-card-category {
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .news-card-date {
                    font-size: 0.75rem;
                    color: var(--muted);
                }
                .event-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .event-row {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    width: 100%;
                    text-align: left;
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.5rem;
                    cursor: pointer;
                    font: inherit;
                }
                .event-row-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 64px;
                    height: 64px;
                    border-radius: 12px;
                    background: var(--primary);
                    font-size: 1.8rem;
                    flex-shrink: 0;
                }
                .event-row-body {
                    display: block;
                }
                .event-row-meta {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.85rem;
                    color: var(--muted);
                    margin: 0.25rem 0 0.5rem;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .gallery-tile {
                    aspect-ratio: 1 / 1;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                    padding: 0;
                    cursor: pointer;
                    background: var(--secondary);
                }
                .gallery-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }
                .gallery-empty {
                    text-align: center;
                    padding: 3rem 0;
                    color: var(--muted);
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-scrim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    border: none;
                    cursor: pointer;
                }
                .lightbox .modal-scrim {
                    background: rgba(0, 0, 0, 0.7);
                }
                .modal-card {
                    position: relative;
                    width: 100%;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--card);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                }
                .modal-card.wide {
                    max-width: 920px;
                }
                .modal-header {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border-bottom: 1px solid var(--border);
                }
                .modal-kicker {
                    font-size: 0.75rem;
                    color: var(--muted);
                    margin: 0 0 0.25rem;
                }
                .modal-body {
                    padding: 1.5rem;
                }
                .modal-body > img {
                    width: 100%;
                    height: 192px;
                    object-fit: cover;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                }
                .modal-body p {
                    font-size: 0.9rem;
                    color: var(--muted);
                    margin-bottom: 0.75rem;
                }
                .modal-body .cta-row {
                    margin-top: 1.5rem;
                }
                .lightbox-caption {
                    min-width: 0;
                }
                .lightbox-alt {
                    font-weight: 500;
                    margin: 0;
                }
                .lightbox-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .lightbox-stage {
                    padding: 1rem;
                }
                .lightbox-stage img {
                    width: 100%;
                    max-height: 75vh;
                    object-fit: contain;
                    border-radius: 12px;
                    background: #000;
                }
                .icon-button {
                    border: none;
                    background: transparent;
                    font-size: 1.3rem;
                    line-height: 1;
                    padding: 0.4rem 0.6rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .icon-button:hover {
                    background: var(--secondary);
                }
                .link-button {
                    border: none;
                    background: transparent;
                    color: var(--primary);
                    font-size: 0.9rem;
                    font-weight: 500;
                    padding: 0;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .gallery-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .tab-row {
                        flex-wrap: wrap;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_any_open_overlay() {
        for open in [Overlay::News(1), Overlay::Event(2), Overlay::Photo(3)] {
            assert_eq!(overlay_after_key(&open, "Escape", 6), Some(Overlay::None));
        }
    }

    #[test]
    fn escape_is_ignored_while_everything_is_closed() {
        assert_eq!(overlay_after_key(&Overlay::None, "Escape", 6), None);
    }

    #[test]
    fn arrows_page_through_photos_with_wrapping() {
        assert_eq!(
            overlay_after_key(&Overlay::Photo(5), "ArrowRight", 6),
            Some(Overlay::Photo(0))
        );
        assert_eq!(
            overlay_after_key(&Overlay::Photo(0), "ArrowLeft", 6),
            Some(Overlay::Photo(5))
        );
    }

    #[test]
    fn arrows_are_ignored_outside_the_lightbox() {
        assert_eq!(overlay_after_key(&Overlay::News(1), "ArrowRight", 6), None);
        assert_eq!(overlay_after_key(&Overlay::Event(1), "ArrowLeft", 6), None);
        assert_eq!(overlay_after_key(&Overlay::None, "ArrowRight", 6), None);
    }

    #[test]
    fn arrows_are_ignored_for_a_single_photo() {
        assert_eq!(overlay_after_key(&Overlay::Photo(0), "ArrowRight", 1), None);
        assert_eq!(overlay_after_key(&Overlay::Photo(0), "ArrowLeft", 1), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(overlay_after_key(&Overlay::Photo(2), "Enter", 6), None);
    }

    #[test]
    fn news_and_events_carry_unique_ids() {
        let mut news_ids: Vec<u32> = NEWS.iter().map(|n| n.id).collect();
        news_ids.dedup();
        assert_eq!(news_ids.len(), NEWS.len());

        let mut event_ids: Vec<u32> = EVENTS.iter().map(|e| e.id).collect();
        event_ids.dedup();
        assert_eq!(event_ids.len(), EVENTS.len());
    }
}

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod gallery;

mod components {
    pub mod cards;
    pub mod footer;
    pub mod section;
    pub mod whatsapp;
}

mod pages {
    pub mod academico;
    pub mod admisiones;
    pub mod comunidad;
    pub mod contacto;
    pub mod home;
    pub mod nosotros;
    pub mod not_found;
    pub mod portal;
}

use pages::{
    academico::Academico, admisiones::Admisiones, comunidad::Comunidad, contacto::Contacto,
    home::Home, nosotros::Nosotros, not_found::NotFound, portal::Portal,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admisiones")]
    Admisiones,
    #[at("/academico")]
    Academico,
    #[at("/nosotros")]
    Nosotros,
    #[at("/contacto")]
    Contacto,
    #[at("/comunidad")]
    Comunidad,
    #[at("/portal")]
    Portal,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Admisiones => {
            info!("Rendering Admisiones page");
            html! { <Admisiones /> }
        }
        Route::Academico => {
            info!("Rendering Academico page");
            html! { <Academico /> }
        }
        Route::Nosotros => {
            info!("Rendering Nosotros page");
            html! { <Nosotros /> }
        }
        Route::Contacto => {
            info!("Rendering Contacto page");
            html! { <Contacto /> }
        }
        Route::Comunidad => {
            info!("Rendering Comunidad page");
            html! { <Comunidad /> }
        }
        Route::Portal => {
            info!("Rendering Portal page");
            html! { <Portal /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const NAV_LINKS: &[(&str, Route)] = &[
    ("Inicio", Route::Home),
    ("Admisiones", Route::Admisiones),
    ("Académico", Route::Academico),
    ("Comunidad", Route::Comunidad),
    ("Nosotros", Route::Nosotros),
    ("Contacto", Route::Contacto),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 20);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.png" alt="Centro Educativo El Buen Pastor Golden Heaven" />
                    <span class="nav-logo-text">
                        {"Centro Educativo"}<br/>
                        {"El Buen Pastor "}<span class="golden">{"Golden Heaven"}</span>
                    </span>
                </Link<Route>>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Cerrar menú" } else { "Abrir menú" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(name, route)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <div key={*name} onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then_some("active"))}
                                    >
                                        {*name}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portal} classes="nav-link nav-portal">
                            {"Portal Padres"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Admisiones} classes="btn btn-cta nav-enroll">
                            {"¡Inscríbete Ahora!"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics and console logging before the first render.
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const QUICK_LINKS: &[(&str, Route)] = &[
    ("Admisiones", Route::Admisiones),
    ("Académico", Route::Academico),
    ("Comunidad", Route::Comunidad),
    ("Nosotros", Route::Nosotros),
    ("Contacto", Route::Contacto),
];

const ACADEMIC_LINKS: &[(&str, &str)] = &[
    ("Pre-kínder", "/academico#kinder"),
    ("Kínder", "/academico#kinder-plus"),
    ("Primaria (1°-6°)", "/academico#primaria"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img src="/assets/logo.png" alt="Logo" class="footer-logo" />
                    <h3>
                        {"Centro Educativo El Buen Pastor "}
                        <span class="golden">{"Golden Heaven"}</span>
                    </h3>
                    <p>
                        {"Formando niños con valores, amor y excelencia académica \
                          desde preescolar hasta primaria."}
                    </p>
                    <div class="footer-social">
                        <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" aria-label="Facebook">
                            {"Facebook"}
                        </a>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            {"Instagram"}
                        </a>
                    </div>
                </div>

                <div>
                    <h4>{"Enlaces Rápidos"}</h4>
                    <ul>
                        {
                            QUICK_LINKS.iter().map(|(name, route)| html! {
                                <li key={*name}>
                                    <Link<Route> to={route.clone()}>{*name}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                        <li>
                            <Link<Route> to={Route::Portal} classes="footer-portal-link">
                                {"Portal para Padres"}
                            </Link<Route>>
                        </li>
                    </ul>
                </div>

                <div>
                    <h4>{"Programas"}</h4>
                    <ul>
                        {
                            ACADEMIC_LINKS.iter().map(|(name, href)| html! {
                                <li key={*name}><a href={*href}>{*name}</a></li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h4>{"Contacto"}</h4>
                    <ul class="footer-contact">
                        <li>
                            <a href={config::LANDLINE_TEL} title="Llamar al teléfono fijo">
                                {config::LANDLINE_DISPLAY}
                            </a>
                        </li>
                        <li>
                            <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" title="Abrir WhatsApp">
                                {format!("WhatsApp: {}", config::WHATSAPP_DISPLAY)}
                            </a>
                        </li>
                        <li>
                            <a href={format!("mailto:{}", config::SCHOOL_EMAIL)} title="Enviar correo">
                                {config::SCHOOL_EMAIL}
                            </a>
                        </li>
                        <li>
                            <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer" title="Abrir ubicación en Google Maps">
                                {config::ADDRESS_LINE_1}<br/>{config::ADDRESS_LINE_2}
                            </a>
                        </li>
                        <li>
                            <span>
                                {"Atención únicamente con cita previa."}<br/>
                                {"No se recibe a nadie sin previa coordinación."}
                            </span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container">
                    <p>
                        {format!("© {year} Centro Educativo El Buen Pastor Golden Heaven. Todos los derechos reservados.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}

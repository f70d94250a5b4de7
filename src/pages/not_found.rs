use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page">
            <section class="page-hero hero-gradient">
                <div class="container">
                    <h1>{"404"}</h1>
                    <p>{"La página que buscas no existe o fue movida."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary btn-lg">
                        {"Volver al inicio"}
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}

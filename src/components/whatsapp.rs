use yew::prelude::*;

use crate::config;

const PREFILLED_MESSAGE: &str = "Hola, me gustaría obtener más información sobre las matrículas \
                                 del Centro Educativo El Buen Pastor Golden Heaven.";

/// Floating action button that opens a WhatsApp chat with a prefilled
/// enrollment question.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let url = format!(
        "{}?text={}",
        config::WHATSAPP_URL,
        urlencoding::encode(PREFILLED_MESSAGE)
    );
    html! {
        <a
            class="whatsapp-fab"
            href={url}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Escribir por WhatsApp"
        >
            <span class="whatsapp-fab-label">{"¿Necesitas ayuda?"}</span>
            <span class="whatsapp-fab-icon" aria-hidden="true">{"💬"}</span>
        </a>
    }
}

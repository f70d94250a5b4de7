/// Apps Script endpoint the lead forms post to, baked in at build time.
/// Returns `None` when the variable is unset or blank so the forms can
/// degrade to a visible error instead of firing a request at nothing.
pub fn contact_form_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_FORM_ENDPOINT")
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub const SCHOOL_EMAIL: &str = "cebuenpastor.goldenheaven@gmail.com";

pub const LANDLINE_DISPLAY: &str = "397-2426";
pub const LANDLINE_TEL: &str = "tel:+5073972426";

pub const WHATSAPP_DISPLAY: &str = "+507 6461-6826";
pub const WHATSAPP_URL: &str = "https://wa.me/50764616826";

pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=100063931126975";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/buenpastorgoldenheaven/";

pub const MAPS_URL: &str = "https://maps.app.goo.gl/rRsSd5mWLKbWiVRx8";
pub const ADDRESS_LINE_1: &str = "Rio Abajo calle 9, Edif. 26-27D";
pub const ADDRESS_LINE_2: &str = "Panamá";

pub const CALENDAR_BOOKING_URL: &str = "https://calendar.app.google/Z52GaZcJ2DUa4VrD7";
pub const DOCUMENTS_FOLDER_URL: &str =
    "https://drive.google.com/drive/folders/1KJ9XMQTPSqF5263hMnG3f0bE3QtW6_gl?usp=drive_link";

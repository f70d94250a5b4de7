use std::fmt;

use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use url::Url;
use web_sys::AbortController;

use crate::config;

/// Client-side cap on how long a submission may stay in flight before the
/// request is aborted and surfaced as a transport failure.
const SUBMIT_TIMEOUT_MS: u32 = 12_000;

/// Outcome of the last submission attempt, driving the form UI.
/// `Success` only returns to `Idle` through the explicit
/// "send another" action.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Idle,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    /// Endpoint missing or wrong shape; no request was issued.
    Endpoint,
    /// Network-level failure or client-side abort.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Rejected(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Endpoint => write!(f, "submission endpoint missing or invalid"),
            SubmitError::Transport(msg) => write!(f, "request failed: {msg}"),
            SubmitError::Rejected(status) => write!(f, "endpoint answered with status {status}"),
        }
    }
}

/// True only for an absolute HTTPS URL on the Apps Script host whose path
/// goes through `/macros/s/` and ends in `/exec`.
pub fn is_valid_apps_script_url(url: Option<&str>) -> bool {
    let Some(v) = url.map(str::trim).filter(|v| !v.is_empty()) else {
        return false;
    };
    match Url::parse(v) {
        Ok(u) => {
            u.scheme() == "https"
                && u.host_str() == Some("script.google.com")
                && u.path().contains("/macros/s/")
                && u.path().ends_with("/exec")
        }
        Err(_) => false,
    }
}

/// Grade codes offered by the admissions form, paired with the label the
/// school actually reads in the spreadsheet.
pub const GRADE_OPTIONS: &[(&str, &str)] = &[
    ("kinder", "Preescolar (4 años)"),
    ("kinder-plus", "Kínder+ (5 años)"),
    ("1", "1° Primaria"),
    ("2", "2° Primaria"),
    ("3", "3° Primaria"),
    ("4", "4° Primaria"),
    ("5", "5° Primaria"),
    ("6", "6° Primaria"),
];

/// Human-readable label for a grade code; unknown codes fall back to the
/// raw code so the submission is never lost to a lookup miss.
pub fn grade_label(code: &str) -> String {
    GRADE_OPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Everything one lead submission carries, serialized as
/// `application/x-www-form-urlencoded` key/value pairs.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeadPayload {
    pub name: String,
    #[serde(rename = "parentName", skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(rename = "studentName", skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub subject: String,
    pub message: String,
    pub page: &'static str,
    pub source: &'static str,
    pub timestamp: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub to: &'static str,
}

impl LeadPayload {
    pub fn contact(
        name: String,
        phone: String,
        email: String,
        subject: String,
        message: String,
        timestamp: String,
        user_agent: String,
    ) -> Self {
        Self {
            name,
            parent_name: None,
            phone,
            email,
            student_name: None,
            grade: None,
            subject,
            message,
            page: "/contacto",
            source: "web-contacto",
            timestamp,
            user_agent,
            to: config::SCHOOL_EMAIL,
        }
    }

    pub fn admissions(
        parent_name: String,
        phone: String,
        email: String,
        student_name: String,
        grade_code: &str,
        message: String,
        timestamp: String,
        user_agent: String,
    ) -> Self {
        let grade_human = grade_label(grade_code);
        Self {
            name: parent_name.clone(),
            parent_name: Some(parent_name),
            phone,
            email,
            student_name: Some(student_name),
            subject: format!("Solicitud de admisiones — {grade_human}"),
            grade: Some(grade_human),
            message: message.trim().to_string(),
            page: "/admisiones",
            source: "web-admisiones",
            timestamp,
            user_agent,
            to: config::SCHOOL_EMAIL,
        }
    }
}

pub fn form_body(payload: &LeadPayload) -> Result<String, SubmitError> {
    serde_urlencoded::to_string(payload).map_err(|e| SubmitError::Transport(e.to_string()))
}

/// ISO-8601 timestamp with millisecond precision, matching what the
/// spreadsheet script expects in its `timestamp` column.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Posts one lead to the configured endpoint. Validates the endpoint shape
/// before touching the network, bounds the request with an abort timer, and
/// treats any non-success status as a failure.
pub async fn submit(endpoint: Option<&str>, payload: &LeadPayload) -> Result<(), SubmitError> {
    let Some(endpoint) = endpoint.map(str::trim) else {
        return Err(SubmitError::Endpoint);
    };
    if !is_valid_apps_script_url(Some(endpoint)) {
        return Err(SubmitError::Endpoint);
    }
    let body = form_body(payload)?;

    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let abort_timer = controller.map(|c| Timeout::new(SUBMIT_TIMEOUT_MS, move || c.abort()));

    let result = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .abort_signal(signal.as_ref())
        .body(body)
        .send()
        .await;

    // Dropping the timer cancels the pending abort once the exchange settled.
    drop(abort_timer);

    match result {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(SubmitError::Rejected(response.status())),
        Err(e) => Err(SubmitError::Transport(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(payload: &LeadPayload) -> Vec<(String, String)> {
        let body = form_body(payload).expect("payload serializes");
        serde_urlencoded::from_str(&body).expect("body parses back")
    }

    fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn accepts_well_formed_apps_script_url() {
        assert!(is_valid_apps_script_url(Some(
            "https://script.google.com/macros/s/ABC123/exec"
        )));
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(!is_valid_apps_script_url(Some(
            "http://script.google.com/macros/s/ABC123/exec"
        )));
    }

    #[test]
    fn rejects_wrong_suffix() {
        assert!(!is_valid_apps_script_url(Some(
            "https://script.google.com/macros/s/ABC123/execute"
        )));
    }

    #[test]
    fn rejects_wrong_host() {
        assert!(!is_valid_apps_script_url(Some(
            "https://evil.com/macros/s/ABC123/exec"
        )));
    }

    #[test]
    fn rejects_missing_path_marker() {
        assert!(!is_valid_apps_script_url(Some(
            "https://script.google.com/other/ABC123/exec"
        )));
    }

    #[test]
    fn rejects_missing_or_blank_endpoint() {
        assert!(!is_valid_apps_script_url(None));
        assert!(!is_valid_apps_script_url(Some("")));
        assert!(!is_valid_apps_script_url(Some("   ")));
        assert!(!is_valid_apps_script_url(Some("not a url")));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(is_valid_apps_script_url(Some(
            "  https://script.google.com/macros/s/ABC123/exec\n"
        )));
    }

    #[test]
    fn grade_label_maps_known_codes() {
        assert_eq!(grade_label("kinder"), "Preescolar (4 años)");
        assert_eq!(grade_label("kinder-plus"), "Kínder+ (5 años)");
        assert_eq!(grade_label("3"), "3° Primaria");
    }

    #[test]
    fn grade_label_falls_back_to_raw_code() {
        assert_eq!(grade_label("secundaria"), "secundaria");
    }

    #[test]
    fn admissions_payload_carries_human_grade_label() {
        let payload = LeadPayload::admissions(
            "Ana Ruiz".into(),
            "+507 6000-0000".into(),
            "ana@example.com".into(),
            "Leo Ruiz".into(),
            "kinder",
            "".into(),
            "2026-02-01T12:00:00.000Z".into(),
            "test-agent".into(),
        );
        let pairs = pairs(&payload);
        assert_eq!(value(&pairs, "grade"), Some("Preescolar (4 años)"));
        assert_eq!(
            value(&pairs, "subject"),
            Some("Solicitud de admisiones — Preescolar (4 años)")
        );
        assert_eq!(value(&pairs, "name"), Some("Ana Ruiz"));
        assert_eq!(value(&pairs, "parentName"), Some("Ana Ruiz"));
        assert_eq!(value(&pairs, "studentName"), Some("Leo Ruiz"));
        assert_eq!(value(&pairs, "source"), Some("web-admisiones"));
        assert_eq!(value(&pairs, "page"), Some("/admisiones"));
        assert_eq!(value(&pairs, "userAgent"), Some("test-agent"));
        assert_eq!(value(&pairs, "to"), Some(config::SCHOOL_EMAIL));
    }

    #[test]
    fn contact_payload_omits_student_fields() {
        let payload = LeadPayload::contact(
            "Carlos Pérez".into(),
            "397-2426".into(),
            "carlos@example.com".into(),
            "visita".into(),
            "Quisiera agendar una visita.".into(),
            "2026-02-01T12:00:00.000Z".into(),
            "test-agent".into(),
        );
        let pairs = pairs(&payload);
        assert_eq!(value(&pairs, "studentName"), None);
        assert_eq!(value(&pairs, "grade"), None);
        assert_eq!(value(&pairs, "parentName"), None);
        assert_eq!(value(&pairs, "source"), Some("web-contacto"));
        assert_eq!(value(&pairs, "page"), Some("/contacto"));
    }
}

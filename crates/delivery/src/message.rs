//! Outbound e-mail construction.

use chrono::NaiveDate;
use intake_core::Submission;

use crate::config::DeliveryConfig;

const UNKNOWN_PATIENT: &str = "Unknown";

/// One e-mail ready to hand to a [`crate::NarrativeSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundMessage {
    /// Builds the office notification for one compiled submission.
    ///
    /// `date` is the submission date shown in the subject line.
    pub fn compose(
        config: &DeliveryConfig,
        submission: &Submission,
        narrative: &str,
        date: NaiveDate,
    ) -> Self {
        Self {
            from: config.sender(),
            to: vec![config.office_email().to_string()],
            subject: subject_line(submission, date),
            text: narrative.to_owned(),
            html: html_body(narrative),
        }
    }
}

/// Preferred name, then full name, then `Unknown`.
pub fn display_name(submission: &Submission) -> String {
    submission
        .text("preferredName")
        .or_else(|| submission.text("fullName"))
        .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
}

/// `New Patient Form: {name} - {M/D/YYYY}`
pub fn subject_line(submission: &Submission, date: NaiveDate) -> String {
    format!(
        "New Patient Form: {} - {}",
        display_name(submission),
        date.format("%-m/%-d/%Y")
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps the escaped narrative in a preformatted block that keeps its line breaks.
pub fn html_body(narrative: &str) -> String {
    format!(
        "<pre style=\"font-family:sans-serif;white-space:pre-wrap;\">{}</pre>",
        escape_html(narrative)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FROM_EMAIL, MAILGUN_API_KEY, MAILGUN_DOMAIN, OFFICE_EMAIL};
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn submission(value: serde_json::Value) -> Submission {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_subject_prefers_preferred_name() {
        let form = submission(json!({ "fullName": "Jane Doe", "preferredName": "Jay" }));
        assert_eq!(subject_line(&form, date()), "New Patient Form: Jay - 3/7/2024");
    }

    #[test]
    fn test_subject_name_fallbacks() {
        let full = submission(json!({ "fullName": "Jane Doe", "preferredName": "  " }));
        assert_eq!(
            subject_line(&full, date()),
            "New Patient Form: Jane Doe - 3/7/2024"
        );
        assert_eq!(
            subject_line(&Submission::new(), date()),
            "New Patient Form: Unknown - 3/7/2024"
        );
    }

    #[test]
    fn test_subject_date_has_no_padding() {
        let form = submission(json!({ "fullName": "A" }));
        let december = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(subject_line(&form, december), "New Patient Form: A - 12/25/2025");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(escape_html("plain\ntext"), "plain\ntext");
    }

    #[test]
    fn test_html_body_wraps_escaped_text() {
        assert_eq!(
            html_body("CONTACT\nFull name: <Jane>"),
            "<pre style=\"font-family:sans-serif;white-space:pre-wrap;\">CONTACT\nFull name: &lt;Jane&gt;</pre>"
        );
    }

    #[test]
    fn test_compose_uses_config_addresses() {
        let config = DeliveryConfig::from_lookup(|name| {
            let value = match name {
                MAILGUN_API_KEY => Some("key"),
                MAILGUN_DOMAIN => Some("mg.clinic.example"),
                OFFICE_EMAIL => Some("office@clinic.example"),
                FROM_EMAIL => Some("forms@clinic.example"),
                _ => None,
            };
            value.map(str::to_string)
        })
        .unwrap();
        let form = submission(json!({ "fullName": "Jane Doe" }));

        let message = OutboundMessage::compose(&config, &form, "CONTACT\nFull name: Jane Doe", date());

        assert_eq!(message.from, "Office Form <forms@clinic.example>");
        assert_eq!(message.to, vec!["office@clinic.example".to_string()]);
        assert_eq!(message.subject, "New Patient Form: Jane Doe - 3/7/2024");
        assert_eq!(message.text, "CONTACT\nFull name: Jane Doe");
        assert!(message.html.contains("Full name: Jane Doe"));
    }
}

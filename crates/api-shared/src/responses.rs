use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Outcome of a form submission, shown to the patient by the form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitRes {
    pub success: bool,
    pub message: String,
}

impl SubmitRes {
    pub const SUBMITTED: &'static str = "Form submitted successfully.";
    pub const NOT_CONFIGURED: &'static str =
        "Server is not configured for email. Please contact the administrator.";
    pub const SEND_FAILED: &'static str =
        "Failed to send form. Please try again or contact the office.";
    pub const UNREADABLE: &'static str = "Could not read the submitted form.";

    pub fn submitted() -> Self {
        Self::ok(Self::SUBMITTED)
    }

    pub fn not_configured() -> Self {
        Self::failure(Self::NOT_CONFIGURED)
    }

    pub fn send_failed() -> Self {
        Self::failure(Self::SEND_FAILED)
    }

    pub fn unreadable() -> Self {
        Self::failure(Self::UNREADABLE)
    }

    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_res_wire_shape() {
        let body = serde_json::to_value(SubmitRes::not_configured()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Server is not configured for email. Please contact the administrator."
            })
        );
        assert!(SubmitRes::submitted().success);
        assert!(!SubmitRes::send_failed().success);
    }
}

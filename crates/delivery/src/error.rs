use intake_types::TextError;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("missing required setting {0}")]
    MissingSetting(&'static str),
    #[error("invalid setting {name}: {source}")]
    InvalidSetting {
        name: &'static str,
        #[source]
        source: TextError,
    },
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("mail provider returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("mail delivery unavailable: {0}")]
    Unavailable(String),
}

pub type DeliveryResult<T> = std::result::Result<T, DeliveryError>;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("submission must be a JSON object of form fields: {0}")]
    InvalidSubmission(serde_json::Error),
    #[error("failed to read submission file: {0}")]
    FileRead(std::io::Error),
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

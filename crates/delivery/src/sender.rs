use async_trait::async_trait;

use crate::error::{DeliveryError, DeliveryResult};
use crate::message::OutboundMessage;

/// Delivers compiled narratives to the office.
///
/// Implementations are shared across request handlers, so they must be `Send + Sync`.
#[async_trait]
pub trait NarrativeSender: Send + Sync {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] on transport failure or when the provider rejects the
    /// message.
    async fn send(&self, message: &OutboundMessage) -> DeliveryResult<()>;
}

const MAX_ERROR_BODY_CHARS: usize = 256;

/// Returns the response body, or `DeliveryError::HttpStatus` for a non-2xx status.
///
/// # Errors
///
/// Returns `DeliveryError::Request` if the body cannot be read.
pub async fn check_http_response(response: reqwest::Response) -> DeliveryResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(DeliveryError::HttpStatus {
            status: status.as_u16(),
            body: shorten(&body),
        });
    }
    Ok(body)
}

fn shorten(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let head: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{head}...[truncated]");
    }
    collapsed
}

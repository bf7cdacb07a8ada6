//! Mailgun HTTP transport.

use async_trait::async_trait;

use crate::config::DeliveryConfig;
use crate::error::DeliveryResult;
use crate::message::OutboundMessage;
use crate::sender::{check_http_response, NarrativeSender};

/// Sends messages through the Mailgun `messages` endpoint.
#[derive(Debug, Clone)]
pub struct MailgunSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl MailgunSender {
    /// Targets the regional Mailgun host chosen in `config`.
    pub fn new(config: &DeliveryConfig) -> Self {
        Self::with_base_url(config, config.region().base_url())
    }

    /// Targets an arbitrary host, e.g. a local stand-in server.
    pub fn with_base_url(config: &DeliveryConfig, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/v3/{}/messages",
                base_url.trim_end_matches('/'),
                config.domain()
            ),
            api_key: config.api_key().to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NarrativeSender for MailgunSender {
    async fn send(&self, message: &OutboundMessage) -> DeliveryResult<()> {
        let mut form: Vec<(&str, &str)> = vec![("from", message.from.as_str())];
        form.extend(message.to.iter().map(|to| ("to", to.as_str())));
        form.push(("subject", message.subject.as_str()));
        form.push(("text", message.text.as_str()));
        form.push(("html", message.html.as_str()));

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await?;
        check_http_response(response).await?;

        tracing::debug!(endpoint = %self.endpoint, "mailgun accepted message");
        Ok(())
    }
}

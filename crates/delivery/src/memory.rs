//! In-memory sender for tests and local runs without a mail account.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{DeliveryError, DeliveryResult};
use crate::message::OutboundMessage;
use crate::sender::NarrativeSender;

/// Records every message it is asked to send.
///
/// Clones share the same record, so a test can keep one handle and give another to the
/// code under test.
#[derive(Debug, Clone, Default)]
pub struct MemorySender {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    fail_with: Option<String>,
}

impl MemorySender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every `send` fails with `DeliveryError::Unavailable(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    /// Messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl NarrativeSender for MemorySender {
    async fn send(&self, message: &OutboundMessage) -> DeliveryResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(DeliveryError::Unavailable(reason.clone()));
        }
        self.sent
            .lock()
            .map_err(|_| DeliveryError::Unavailable("message store lock poisoned".into()))?
            .push(message.clone());
        Ok(())
    }
}

//! # Intake Delivery
//!
//! Sends compiled intake narratives to the office by e-mail.
//!
//! - [`DeliveryConfig`]: Mailgun credentials and addresses, resolved once at startup
//! - [`OutboundMessage`]: subject, sender, recipients, plain text and HTML bodies
//! - [`NarrativeSender`]: the sending capability, injected into the HTTP layer
//! - [`MailgunSender`] and [`MemorySender`]: the two implementations

pub mod config;
pub mod error;
pub mod mailgun;
pub mod memory;
pub mod message;
pub mod sender;

pub use config::{DeliveryConfig, MailgunRegion};
pub use error::{DeliveryError, DeliveryResult};
pub use mailgun::MailgunSender;
pub use memory::MemorySender;
pub use message::{escape_html, html_body, subject_line, OutboundMessage};
pub use sender::NarrativeSender;

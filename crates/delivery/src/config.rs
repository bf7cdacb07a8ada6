//! Delivery configuration.
//!
//! Resolved once at process startup and then passed to the sender and the API. Settings are
//! read through a lookup function rather than straight from the process environment so the
//! parsing can be tested without mutating global state.

use intake_types::{EmailAddress, NonEmptyText};

use crate::error::{DeliveryError, DeliveryResult};

pub const MAILGUN_API_KEY: &str = "MAILGUN_API_KEY";
pub const MAILGUN_DOMAIN: &str = "MAILGUN_DOMAIN";
pub const MAILGUN_EU: &str = "MAILGUN_EU";
pub const OFFICE_EMAIL: &str = "OFFICE_EMAIL";
pub const FROM_EMAIL: &str = "FROM_EMAIL";
pub const FROM_NAME: &str = "FROM_NAME";

/// Sender display name when `FROM_NAME` is unset.
pub const DEFAULT_FROM_NAME: &str = "Office Form";

/// Mailgun hosts accounts in separate US and EU regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailgunRegion {
    Us,
    Eu,
}

impl MailgunRegion {
    pub fn base_url(&self) -> &'static str {
        match self {
            MailgunRegion::Us => "https://api.mailgun.net",
            MailgunRegion::Eu => "https://api.eu.mailgun.net",
        }
    }
}

/// Mail settings resolved at startup.
#[derive(Clone, Debug)]
pub struct DeliveryConfig {
    api_key: NonEmptyText,
    domain: NonEmptyText,
    office_email: EmailAddress,
    from_email: EmailAddress,
    from_name: NonEmptyText,
    region: MailgunRegion,
}

impl DeliveryConfig {
    /// Resolves the configuration from `lookup`, which maps a variable name to its value.
    ///
    /// `MAILGUN_API_KEY`, `MAILGUN_DOMAIN`, `OFFICE_EMAIL`, and `FROM_EMAIL` are required.
    /// Any non-empty `MAILGUN_EU` selects the EU region.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::MissingSetting` naming the first required variable that is
    /// unset or blank, or `DeliveryError::InvalidSetting` for a malformed address.
    pub fn from_lookup<F>(lookup: F) -> DeliveryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| -> DeliveryResult<NonEmptyText> {
            let raw = value(name).ok_or(DeliveryError::MissingSetting(name))?;
            NonEmptyText::new(raw).map_err(|source| DeliveryError::InvalidSetting { name, source })
        };
        let address = |name: &'static str| -> DeliveryResult<EmailAddress> {
            EmailAddress::new(required(name)?)
                .map_err(|source| DeliveryError::InvalidSetting { name, source })
        };

        let api_key = required(MAILGUN_API_KEY)?;
        let domain = required(MAILGUN_DOMAIN)?;
        let office_email = address(OFFICE_EMAIL)?;
        let from_email = address(FROM_EMAIL)?;
        let from_name =
            NonEmptyText::new(value(FROM_NAME).unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()))
                .map_err(|source| DeliveryError::InvalidSetting {
                    name: FROM_NAME,
                    source,
                })?;
        let region = if value(MAILGUN_EU).is_some() {
            MailgunRegion::Eu
        } else {
            MailgunRegion::Us
        };

        Ok(Self {
            api_key,
            domain,
            office_email,
            from_email,
            from_name,
            region,
        })
    }

    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`DeliveryConfig::from_lookup`].
    pub fn from_env() -> DeliveryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    pub fn domain(&self) -> &str {
        self.domain.as_str()
    }

    pub fn office_email(&self) -> &EmailAddress {
        &self.office_email
    }

    pub fn region(&self) -> MailgunRegion {
        self.region
    }

    /// `"{FROM_NAME} <{FROM_EMAIL}>"`.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

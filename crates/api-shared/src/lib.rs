//! # API Shared
//!
//! Wire types shared by the intake HTTP surface and its clients.
//!
//! Contains:
//! - Response bodies (`HealthRes`, `SubmitRes`) with OpenAPI schemas
//! - `HealthService`

pub mod health;
pub mod responses;

pub use health::HealthService;
pub use responses::{HealthRes, SubmitRes};

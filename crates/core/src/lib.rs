//! # Intake Core
//!
//! Narrative compiler for the new-patient intake form.
//!
//! This crate turns one decoded form submission into the plain-text clinical summary the
//! office receives:
//! - field normalisation and pluralisation
//! - repeating record groups (allergies, relatives, surgeries, extra conditions)
//! - past medical history from the condition catalog
//! - social history sentences
//! - fixed-order section assembly
//!
//! **No delivery or HTTP concerns**: sending the summary belongs in `intake-delivery`, and
//! receiving submissions belongs in `api-rest`. Compilation is pure and never fails.

pub mod allergies;
pub mod conditions;
pub mod constants;
pub mod error;
pub mod family;
pub mod groups;
pub mod narrative;
pub mod plural;
pub mod section;
pub mod social;
pub mod submission;

pub use conditions::{Condition, Modifier, CONDITION_CATALOG};
pub use error::{IntakeError, IntakeResult};
pub use groups::{collect_group, GroupRecord, RecordGroup};
pub use narrative::{compile, Narrative};
pub use plural::plural;
pub use section::{render_section, Section, SectionTitle};
pub use submission::{normalize, FieldValue, Submission};

use std::path::Path;

/// Reads and decodes a JSON submission document from disk.
///
/// # Errors
///
/// Returns `IntakeError::FileRead` if the file cannot be read, or
/// `IntakeError::InvalidSubmission` if it is not a JSON object.
pub fn read_submission(path: &Path) -> IntakeResult<Submission> {
    let contents = std::fs::read_to_string(path).map_err(IntakeError::FileRead)?;
    Submission::from_json_str(&contents)
}

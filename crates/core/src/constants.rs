//! Constants used throughout the intake core crate.
//!
//! Repeating-group layouts and fixed phrases live here so the section builders and their
//! tests agree on them.

use crate::groups::RecordGroup;

/// `allergy_N_allergen`, `allergy_N_reaction`.
pub const ALLERGY_GROUP: RecordGroup = RecordGroup::new("allergy", &["allergen", "reaction"]);

/// `family_N_relation`, `family_N_status`, `family_N_age`, `family_N_conditions`.
pub const FAMILY_GROUP: RecordGroup =
    RecordGroup::new("family", &["relation", "status", "age", "conditions"]);

/// `surgery_N_details`, `surgery_N_year`.
pub const SURGERY_GROUP: RecordGroup = RecordGroup::new("surgery", &["details", "year"]);

/// `other_condition_N_details`.
pub const OTHER_CONDITION_GROUP: RecordGroup = RecordGroup::new("other_condition", &["details"]);

/// Stand-in for a missing value inside a sentence.
pub const PLACEHOLDER: &str = "—";

/// Sole allergy line when the patient reports no known allergies.
pub const NO_KNOWN_ALLERGIES: &str = "No Adverse Reactions known";

/// Leading family-history line for adopted patients.
pub const ADOPTED_NOTE: &str = "Adopted (biological relatives only).";

/// Smoke type used when a current smoker leaves the type list empty.
pub const DEFAULT_SMOKE_TYPE: &str = "nicotine";

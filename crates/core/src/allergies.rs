//! Allergy section.

use crate::constants::{ALLERGY_GROUP, NO_KNOWN_ALLERGIES, PLACEHOLDER};
use crate::section::{Section, SectionTitle};
use crate::submission::Submission;

/// The ALLERGIES section.
///
/// A ticked `noAllergies` box wins over any allergy rows the form still carries.
pub fn allergies(submission: &Submission) -> Option<Section> {
    let lines = if submission.is_affirmative("noAllergies") {
        vec![NO_KNOWN_ALLERGIES.to_string()]
    } else {
        ALLERGY_GROUP
            .collect(submission)
            .iter()
            .map(|record| {
                format!(
                    "{} - {}",
                    record.get("allergen").unwrap_or(PLACEHOLDER),
                    record.get("reaction").unwrap_or(PLACEHOLDER)
                )
            })
            .collect()
    };
    Section::from_lines(SectionTitle::Allergies, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lines(value: serde_json::Value) -> Option<Vec<String>> {
        let submission: Submission = serde_json::from_value(value).unwrap();
        allergies(&submission).map(|section| section.lines().to_vec())
    }

    #[test]
    fn test_no_allergies_flag_wins() {
        assert_eq!(
            lines(json!({
                "noAllergies": "yes",
                "allergy_0_allergen": "Penicillin",
                "allergy_0_reaction": "Rash"
            })),
            Some(vec!["No Adverse Reactions known".to_string()])
        );
    }

    #[test]
    fn test_allergy_rows_with_placeholders() {
        assert_eq!(
            lines(json!({
                "allergy_1_reaction": "Hives",
                "allergy_0_allergen": "Penicillin",
                "allergy_0_reaction": "Rash",
                "allergy_2_allergen": "Latex"
            })),
            Some(vec![
                "Penicillin - Rash".to_string(),
                "— - Hives".to_string(),
                "Latex - —".to_string(),
            ])
        );
    }

    #[test]
    fn test_absent_without_flag_or_rows() {
        assert_eq!(lines(json!({ "noAllergies": "no" })), None);
        assert_eq!(
            lines(json!({ "allergy_0_allergen": " ", "allergy_0_reaction": "" })),
            None
        );
    }
}

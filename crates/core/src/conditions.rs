//! Condition catalog and past medical history.
//!
//! The catalog is the ordered list of checkbox conditions on the intake form. Its order is
//! the order the conditions appear in the narrative. A handful of entries carry follow-up
//! questions whose answers are folded into the condition's line.

use crate::constants::{OTHER_CONDITION_GROUP, SURGERY_GROUP};
use crate::section::{Section, SectionTitle};
use crate::submission::Submission;

/// Follow-up detail attached to a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    None,
    /// `diabetesType`, `diabetesInsulin`, `diabetesAge`.
    Diabetes,
    /// `sleepApneaCpap`, `sleepApneaNoTolerate`.
    SleepApnea,
    /// `hepCTreated`; always annotated.
    HepatitisC,
    /// `menopausalAge`.
    Menopause,
}

/// One checkbox condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub key: &'static str,
    pub label: &'static str,
    pub modifier: Modifier,
}

const fn plain(key: &'static str, label: &'static str) -> Condition {
    Condition {
        key,
        label,
        modifier: Modifier::None,
    }
}

const fn modified(key: &'static str, label: &'static str, modifier: Modifier) -> Condition {
    Condition {
        key,
        label,
        modifier,
    }
}

/// Every checkbox condition, in narrative order.
pub static CONDITION_CATALOG: [Condition; 48] = [
    plain("cond_high_bp", "Hypertension"),
    plain("cond_cholesterol", "Cholesterol problems"),
    modified("cond_diabetes", "Diabetes", Modifier::Diabetes),
    plain("cond_erectile_dysfunction", "Erectile dysfunction"),
    modified("cond_menopausal", "Post-menopausal", Modifier::Menopause),
    plain("cond_stroke", "Stroke"),
    modified("cond_sleep_apnea", "Sleep apnea", Modifier::SleepApnea),
    plain("cond_kidney_disease", "Kidney disease"),
    plain("cond_heart_attack", "Myocardial infarction"),
    plain("cond_angina", "Angina"),
    plain("cond_angioplasty", "Coronary angioplasty"),
    plain("cond_cabg", "CABG"),
    plain("cond_valve_surgery", "Valve surgery"),
    plain("cond_defib", "ICD"),
    plain("cond_pacemaker", "Permanent pacemaker"),
    plain("cond_atrial_fib", "Atrial fibrillation"),
    plain("cond_heart_failure", "Heart failure"),
    plain("cond_asthma", "Asthma"),
    plain("cond_copd", "COPD"),
    plain("cond_emphysema", "Emphysema"),
    plain("cond_pulmonary_embolism", "Pulmonary embolism"),
    plain("cond_heart_burn", "Gastroesophageal reflux"),
    plain("cond_ibs", "IBS"),
    plain("cond_ulcerative_colitis", "Ulcerative colitis"),
    plain("cond_crohns", "Crohn's disease"),
    plain("cond_celiac", "Celiac disease"),
    plain("cond_fatty_liver", "Fatty liver"),
    plain("cond_cirrhosis", "Cirrhosis"),
    modified("cond_hep_c", "Hepatitis C", Modifier::HepatitisC),
    plain("cond_anxiety", "Anxiety"),
    plain("cond_depression", "Depression"),
    plain("cond_panic_attacks", "Panic attacks"),
    plain("cond_ptsd", "PTSD"),
    plain("cond_schizophrenia", "Schizophrenia"),
    plain("cond_bipolar", "Bipolar disorder"),
    plain("cond_osteoarthritis", "Osteoarthritis"),
    plain("cond_rheumatoid_arthritis", "Rheumatoid arthritis"),
    plain("cond_gout", "Gout"),
    plain("cond_osteoporosis", "Osteoporosis"),
    plain("cond_lupus", "Systemic lupus"),
    plain("cond_chronic_pain", "Chronic pain"),
    plain("cond_chronic_fatigue", "Chronic fatigue syndrome"),
    plain("cond_hypothyroidism", "Hypothyroidism"),
    plain("cond_hyperthyroidism", "Hyperthyroidism"),
    plain("cond_breast_cancer", "Breast cancer"),
    plain("cond_prostate_cancer", "Prostate cancer"),
    plain("cond_bowel_cancer", "Colorectal cancer"),
    plain("cond_lung_cancer", "Lung cancer"),
];

/// Free-text "other" boxes under the heart, GI, and cancer groups, in that order.
const FREE_TEXT_OTHERS: [&str; 3] = ["cond_heart_other", "cond_gi_other", "cond_cancer_other"];

impl Condition {
    /// The narrative text for this condition, or `None` if it is not ticked.
    pub fn describe(&self, submission: &Submission) -> Option<String> {
        if !submission.is_affirmative(self.key) {
            return None;
        }

        let details: Vec<String> = match self.modifier {
            Modifier::None => Vec::new(),
            Modifier::Diabetes => [
                submission.text("diabetesType"),
                submission
                    .is_affirmative("diabetesInsulin")
                    .then(|| "on insulin".to_string()),
                submission
                    .text("diabetesAge")
                    .map(|age| format!("dx age {age}")),
            ]
            .into_iter()
            .flatten()
            .collect(),
            Modifier::SleepApnea => [
                submission
                    .is_affirmative("sleepApneaCpap")
                    .then(|| "on CPAP".to_string()),
                submission
                    .is_affirmative("sleepApneaNoTolerate")
                    .then(|| "didn't tolerate CPAP".to_string()),
            ]
            .into_iter()
            .flatten()
            .collect(),
            Modifier::HepatitisC => {
                let status = if submission.is_affirmative("hepCTreated") {
                    "treated"
                } else {
                    "untreated"
                };
                vec![status.to_string()]
            }
            Modifier::Menopause => submission
                .text("menopausalAge")
                .map(|age| format!("age {age}"))
                .into_iter()
                .collect(),
        };

        Some(if details.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, details.join(", "))
        })
    }
}

/// Looks up a catalog entry by its form key.
pub fn find_condition(key: &str) -> Option<&'static Condition> {
    CONDITION_CATALOG.iter().find(|condition| condition.key == key)
}

/// Every past-medical-history item, in narrative order, without trailing periods.
///
/// Ticked catalog conditions come first, then the free-text "other" boxes, then extra
/// condition records, then surgeries.
pub fn history_items(submission: &Submission) -> Vec<String> {
    let conditions = CONDITION_CATALOG
        .iter()
        .filter_map(|condition| condition.describe(submission));

    let free_text = FREE_TEXT_OTHERS
        .iter()
        .filter_map(|key| submission.text(key));

    let other_conditions = OTHER_CONDITION_GROUP
        .collect(submission)
        .into_iter()
        .filter_map(|record| record.get("details").map(str::to_owned));

    let surgeries = SURGERY_GROUP
        .collect(submission)
        .into_iter()
        .filter_map(|record| match (record.get("details"), record.get("year")) {
            (Some(details), Some(year)) => Some(format!("{details} ({year})")),
            (Some(details), None) => Some(details.to_string()),
            (None, Some(year)) => Some(year.to_string()),
            (None, None) => None,
        });

    conditions
        .chain(free_text)
        .chain(other_conditions)
        .chain(surgeries)
        .collect()
}

/// The PAST MEDICAL HISTORY section: one item per line, each ending in a period.
pub fn past_medical_history(submission: &Submission) -> Option<Section> {
    let lines = history_items(submission)
        .into_iter()
        .map(|item| format!("{item}."))
        .collect();
    Section::from_lines(SectionTitle::PastMedicalHistory, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn submission(value: serde_json::Value) -> Submission {
        serde_json::from_value(value).unwrap()
    }

    fn lines(value: serde_json::Value) -> Vec<String> {
        past_medical_history(&submission(value))
            .map(|section| section.lines().to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<_> = CONDITION_CATALOG.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), CONDITION_CATALOG.len());
        assert!(CONDITION_CATALOG.iter().all(|c| c.key.starts_with("cond_")));
    }

    #[test]
    fn test_find_condition() {
        assert_eq!(find_condition("cond_copd").map(|c| c.label), Some("COPD"));
        assert!(find_condition("cond_unknown").is_none());
    }

    #[test]
    fn test_diabetes_with_type_and_age() {
        assert_eq!(
            lines(json!({
                "cond_diabetes": "yes",
                "diabetesType": "Type 2",
                "diabetesAge": "45"
            })),
            vec!["Diabetes (Type 2, dx age 45)."]
        );
    }

    #[test]
    fn test_diabetes_all_modifiers_and_bare() {
        assert_eq!(
            lines(json!({
                "cond_diabetes": true,
                "diabetesType": "Type 1",
                "diabetesInsulin": "yes",
                "diabetesAge": 12
            })),
            vec!["Diabetes (Type 1, on insulin, dx age 12)."]
        );
        assert_eq!(lines(json!({ "cond_diabetes": "yes" })), vec!["Diabetes."]);
    }

    #[test]
    fn test_modifiers_ignored_when_condition_not_ticked() {
        assert!(lines(json!({
            "cond_diabetes": "no",
            "diabetesType": "Type 2",
            "menopausalAge": "50"
        }))
        .is_empty());
    }

    #[test]
    fn test_sleep_apnea_modifiers() {
        assert_eq!(
            lines(json!({
                "cond_sleep_apnea": "yes",
                "sleepApneaCpap": "yes",
                "sleepApneaNoTolerate": "yes"
            })),
            vec!["Sleep apnea (on CPAP, didn't tolerate CPAP)."]
        );
    }

    #[test]
    fn test_hepatitis_c_always_annotated() {
        assert_eq!(
            lines(json!({ "cond_hep_c": "yes" })),
            vec!["Hepatitis C (untreated)."]
        );
        assert_eq!(
            lines(json!({ "cond_hep_c": "yes", "hepCTreated": "yes" })),
            vec!["Hepatitis C (treated)."]
        );
    }

    #[test]
    fn test_menopause_age() {
        assert_eq!(
            lines(json!({ "cond_menopausal": "yes", "menopausalAge": "51" })),
            vec!["Post-menopausal (age 51)."]
        );
        assert_eq!(
            lines(json!({ "cond_menopausal": "yes" })),
            vec!["Post-menopausal."]
        );
    }

    #[test]
    fn test_items_follow_catalog_then_free_text_then_groups() {
        let result = lines(json!({
            "surgery_1_details": "Appendectomy",
            "surgery_1_year": "2001",
            "surgery_0_year": "1990",
            "other_condition_0_details": "Migraine",
            "cond_cancer_other": "Melanoma",
            "cond_heart_other": "  Murmur ",
            "cond_lung_cancer": "yes",
            "cond_high_bp": "yes",
            "cond_asthma": "no"
        }));
        assert_eq!(
            result,
            vec![
                "Hypertension.",
                "Lung cancer.",
                "Murmur.",
                "Melanoma.",
                "Migraine.",
                "1990.",
                "Appendectomy (2001).",
            ]
        );
    }

    #[test]
    fn test_section_absent_when_nothing_ticked() {
        assert!(past_medical_history(&submission(json!({ "cond_gout": "" }))).is_none());
        assert!(past_medical_history(&Submission::new()).is_none());
    }
}

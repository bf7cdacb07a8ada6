//! Social history sentences.
//!
//! Each facet of the social history (work, home, habits, insurance) is evaluated on its own
//! and yields at most one sentence. Multiple-choice answers are parsed into small enums first
//! so every recognised answer has exactly one phrasing, and anything unrecognised falls into
//! an explicit catch-all variant.

use crate::constants::{DEFAULT_SMOKE_TYPE, PLACEHOLDER};
use crate::plural::plural;
use crate::section::{Section, SectionTitle};
use crate::submission::Submission;

/// `tobacco` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TobaccoUse {
    NeverSmoked,
    Former,
    Current,
    Other(String),
}

impl TobaccoUse {
    pub fn parse(value: &str) -> Self {
        match value {
            "Never smoked" => TobaccoUse::NeverSmoked,
            "Former" => TobaccoUse::Former,
            "Current" => TobaccoUse::Current,
            other => TobaccoUse::Other(other.to_string()),
        }
    }
}

/// `alcohol` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlcoholUse {
    None,
    /// The patient reports struggling with alcohol.
    Struggle,
    Other(String),
}

impl AlcoholUse {
    pub fn parse(value: &str) -> Self {
        match value {
            "None" => AlcoholUse::None,
            "Struggle" => AlcoholUse::Struggle,
            other => AlcoholUse::Other(other.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            AlcoholUse::None => "None",
            AlcoholUse::Struggle => "Struggle",
            AlcoholUse::Other(value) => value,
        }
    }
}

/// `alcoholPer` answer. Anything other than `"day"` counts per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkingPeriod {
    Day,
    Week,
}

impl DrinkingPeriod {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("day") => DrinkingPeriod::Day,
            _ => DrinkingPeriod::Week,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DrinkingPeriod::Day => "day",
            DrinkingPeriod::Week => "week",
        }
    }
}

/// `marijuana` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarijuanaUse {
    None,
    Medical,
    Recreational,
}

impl MarijuanaUse {
    pub fn parse(value: &str) -> Self {
        match value {
            "None" => MarijuanaUse::None,
            "Medical" => MarijuanaUse::Medical,
            _ => MarijuanaUse::Recreational,
        }
    }
}

/// `otherDrugs` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherDrugUse {
    No,
    Yes,
}

impl OtherDrugUse {
    pub fn parse(value: &str) -> Self {
        match value {
            "No" => OtherDrugUse::No,
            _ => OtherDrugUse::Yes,
        }
    }
}

/// `exercise` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseHabit {
    NotMuch,
    Yes,
    Other(String),
}

impl ExerciseHabit {
    pub fn parse(value: &str) -> Self {
        match value {
            "Not much" => ExerciseHabit::NotMuch,
            "Yes" => ExerciseHabit::Yes,
            other => ExerciseHabit::Other(other.to_string()),
        }
    }
}

/// `maritalStatus` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaritalStatus {
    Partner,
    Other(String),
}

impl MaritalStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "Partner" => MaritalStatus::Partner,
            other => MaritalStatus::Other(other.to_string()),
        }
    }
}

/// `rxInsurance` answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RxInsurance {
    /// Private insurance; the only type that shows the plan name.
    Private,
    Other(String),
}

impl RxInsurance {
    pub fn parse(value: &str) -> Self {
        match value {
            "Private" => RxInsurance::Private,
            other => RxInsurance::Other(other.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            RxInsurance::Private => "Private",
            RxInsurance::Other(value) => value,
        }
    }
}

type Facet = fn(&Submission) -> Option<String>;

/// Facets in narrative order.
const FACETS: [Facet; 11] = [
    occupation,
    residence,
    marital_status,
    education,
    tobacco,
    alcohol,
    marijuana,
    other_drugs,
    caffeine,
    exercise,
    prescription_insurance,
];

/// Every social history sentence, in facet order.
pub fn social_history_lines(submission: &Submission) -> Vec<String> {
    FACETS
        .iter()
        .filter_map(|facet| facet(submission))
        .collect()
}

/// The SOCIAL HISTORY section, or `None` when no facet applies.
pub fn social_history(submission: &Submission) -> Option<Section> {
    Section::from_lines(SectionTitle::SocialHistory, social_history_lines(submission))
}

fn occupation(submission: &Submission) -> Option<String> {
    let occupation = submission.text("occupation")?;
    Some(match submission.text("occupationStatus") {
        Some(status) => format!("{occupation} ({status})."),
        None => format!("{occupation}."),
    })
}

fn residence(submission: &Submission) -> Option<String> {
    let residence = submission.text("residence").map(|r| r.to_lowercase());
    match (residence, submission.text("livesWith")) {
        (None, None) => None,
        (residence, Some(with)) => Some(format!(
            "Lives in {} with {with}.",
            residence.as_deref().unwrap_or(PLACEHOLDER)
        )),
        (Some(residence), None) => Some(format!("Lives in {residence}.")),
    }
}

fn marital_status(submission: &Submission) -> Option<String> {
    let status = submission.text("maritalStatus")?;
    Some(match MaritalStatus::parse(&status) {
        MaritalStatus::Partner => "Has a partner.".to_string(),
        MaritalStatus::Other(status) => format!("{status}."),
    })
}

fn education(submission: &Submission) -> Option<String> {
    let mut education = submission.text("education");
    if submission.is_affirmative("student") {
        education = Some(match education {
            Some(base) => format!("{base} (student)"),
            None => "Student".to_string(),
        });
    }
    if submission.is_affirmative("readingDifficulties") {
        education = Some(match education {
            Some(base) => format!("{base} (reading difficulties)"),
            None => "Reading difficulties".to_string(),
        });
    }
    education.map(|text| format!("Education: {text}."))
}

fn tobacco(submission: &Submission) -> Option<String> {
    let answer = submission.text("tobacco")?;
    match TobaccoUse::parse(&answer) {
        TobaccoUse::NeverSmoked => None,
        TobaccoUse::Former => Some(former_smoker(submission)),
        TobaccoUse::Current => Some(current_smoker(submission)),
        TobaccoUse::Other(value) => Some(format!("Nicotine use: {value}.")),
    }
}

fn former_smoker(submission: &Submission) -> String {
    let quit = submission.text("quitDate");
    let packs = submission.text("packsPerDay");
    let years = submission.text("yearsSmoked");

    if let (Some(quit), Some(packs), Some(years)) = (&quit, &packs, &years) {
        return format!(
            "Former smoker: quit {quit} after {packs} {} a day for {years} {}.",
            plural(packs, "pack", "packs"),
            plural(years, "year", "years"),
        );
    }

    let present: Vec<String> = [quit, packs, years].into_iter().flatten().collect();
    if present.is_empty() {
        "Former smoker.".to_string()
    } else {
        format!("Former smoker: quit {}.", present.join(", "))
    }
}

fn current_smoker(submission: &Submission) -> String {
    let smoke_type = submission
        .text("smokeType")
        .unwrap_or_else(|| DEFAULT_SMOKE_TYPE.to_string());
    let packs = submission.text("currentPacksPerDay");
    let years = submission.text("currentYears");

    match (packs, years) {
        (Some(packs), Some(years)) => format!(
            "Uses {smoke_type}: {packs} {} a day for {years} {}.",
            plural(&packs, "pack", "packs"),
            plural(&years, "year", "years"),
        ),
        (Some(only), None) | (None, Some(only)) => format!("Uses {smoke_type}: {only}."),
        (None, None) => format!("Uses {smoke_type}."),
    }
}

fn alcohol(submission: &Submission) -> Option<String> {
    let answer = AlcoholUse::parse(&submission.text("alcohol")?);
    if answer == AlcoholUse::None {
        return None;
    }

    let sentence = match submission.text("alcoholDrinks") {
        Some(drinks) => {
            let period = DrinkingPeriod::parse(submission.text("alcoholPer").as_deref());
            format!(
                "{drinks} alcoholic {} per {}.",
                plural(&drinks, "drink", "drinks"),
                period.as_str()
            )
        }
        None => format!("Alcohol use: {}.", answer.as_str()),
    };

    Some(match answer {
        AlcoholUse::Struggle => format!("{sentence} (struggling)"),
        _ => sentence,
    })
}

fn marijuana(submission: &Submission) -> Option<String> {
    match MarijuanaUse::parse(&submission.text("marijuana")?) {
        MarijuanaUse::None => None,
        MarijuanaUse::Medical => Some("Uses marijuana medicinally.".to_string()),
        MarijuanaUse::Recreational => Some("Uses marijuana recreationally.".to_string()),
    }
}

fn other_drugs(submission: &Submission) -> Option<String> {
    if OtherDrugUse::parse(&submission.text("otherDrugs")?) == OtherDrugUse::No {
        return None;
    }

    let free_text = submission.text("otherDrugsOther");
    let named: Vec<String> = submission
        .list("otherDrugsType")
        .into_iter()
        .filter_map(|kind| {
            if kind == "Other" {
                free_text.clone()
            } else {
                Some(kind)
            }
        })
        .collect();

    let drugs = if named.is_empty() {
        free_text
    } else {
        Some(named.join(", "))
    };

    Some(match drugs {
        Some(drugs) => format!("Uses {}.", drugs.to_lowercase()),
        None => "Uses other drugs.".to_string(),
    })
}

fn caffeine(submission: &Submission) -> Option<String> {
    let count = submission.text("caffeinePerDay")?;
    Some(format!(
        "{count} {} per day.",
        plural(&count, "caffeinated drink", "caffeinated drinks")
    ))
}

fn exercise(submission: &Submission) -> Option<String> {
    Some(match ExerciseHabit::parse(&submission.text("exercise")?) {
        ExerciseHabit::NotMuch => "Does not exercise.".to_string(),
        ExerciseHabit::Yes => match submission.text("exerciseDetails") {
            Some(details) => format!("Exercise: {details}."),
            None => "Exercises.".to_string(),
        },
        ExerciseHabit::Other(value) => format!("Exercise: {value}."),
    })
}

fn prescription_insurance(submission: &Submission) -> Option<String> {
    let plan = submission.text("rxInsurancePlan");
    let insurance = submission
        .text("rxInsurance")
        .map(|value| RxInsurance::parse(&value));

    match (insurance, plan) {
        (Some(RxInsurance::Private), Some(plan)) => {
            Some(format!("Prescription insurance: Private ({plan})."))
        }
        (Some(insurance), _) => Some(format!("Prescription insurance: {}.", insurance.as_str())),
        (None, Some(plan)) => Some(format!("Prescription insurance: {plan}.")),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lines(value: serde_json::Value) -> Vec<String> {
        let submission: Submission = serde_json::from_value(value).unwrap();
        social_history_lines(&submission)
    }

    #[test]
    fn test_occupation() {
        assert_eq!(
            lines(json!({ "occupation": "Teacher", "occupationStatus": "Retired" })),
            vec!["Teacher (Retired)."]
        );
        assert_eq!(lines(json!({ "occupation": "Nurse" })), vec!["Nurse."]);
        assert!(lines(json!({ "occupationStatus": "Retired" })).is_empty());
    }

    #[test]
    fn test_residence_variants() {
        assert_eq!(
            lines(json!({ "residence": "House", "livesWith": "spouse" })),
            vec!["Lives in house with spouse."]
        );
        assert_eq!(
            lines(json!({ "residence": "Apartment" })),
            vec!["Lives in apartment."]
        );
        assert_eq!(
            lines(json!({ "livesWith": "parents" })),
            vec!["Lives in — with parents."]
        );
    }

    #[test]
    fn test_marital_status() {
        assert_eq!(
            lines(json!({ "maritalStatus": "Partner" })),
            vec!["Has a partner."]
        );
        assert_eq!(lines(json!({ "maritalStatus": "Married" })), vec!["Married."]);
    }

    #[test]
    fn test_education_flags_stack() {
        assert_eq!(
            lines(json!({
                "education": "High school",
                "student": "yes",
                "readingDifficulties": "yes"
            })),
            vec!["Education: High school (student) (reading difficulties)."]
        );
        assert_eq!(
            lines(json!({ "student": "yes" })),
            vec!["Education: Student."]
        );
        assert_eq!(
            lines(json!({ "readingDifficulties": "yes" })),
            vec!["Education: Reading difficulties."]
        );
        assert_eq!(
            lines(json!({ "student": "yes", "readingDifficulties": "yes" })),
            vec!["Education: Student (reading difficulties)."]
        );
    }

    #[test]
    fn test_former_smoker_full_sentence() {
        assert_eq!(
            lines(json!({
                "tobacco": "Former",
                "quitDate": "2010",
                "packsPerDay": "1",
                "yearsSmoked": "20"
            })),
            vec!["Former smoker: quit 2010 after 1 pack a day for 20 years."]
        );
    }

    #[test]
    fn test_former_smoker_partial_and_bare() {
        assert_eq!(
            lines(json!({ "tobacco": "Former", "quitDate": "2010", "yearsSmoked": "1" })),
            vec!["Former smoker: quit 2010, 1."]
        );
        assert_eq!(lines(json!({ "tobacco": "Former" })), vec!["Former smoker."]);
    }

    #[test]
    fn test_current_smoker() {
        assert_eq!(
            lines(json!({
                "tobacco": "Current",
                "smokeType": ["Cigarettes", "", "Vape"],
                "currentPacksPerDay": "2",
                "currentYears": "1"
            })),
            vec!["Uses Cigarettes, Vape: 2 packs a day for 1 year."]
        );
        assert_eq!(
            lines(json!({ "tobacco": "Current", "currentYears": "5" })),
            vec!["Uses nicotine: 5."]
        );
        assert_eq!(
            lines(json!({ "tobacco": "Current", "smokeType": [] })),
            vec!["Uses nicotine."]
        );
    }

    #[test]
    fn test_tobacco_never_and_other() {
        assert!(lines(json!({ "tobacco": "Never smoked", "packsPerDay": "3" })).is_empty());
        assert_eq!(
            lines(json!({ "tobacco": "Occasional cigar" })),
            vec!["Nicotine use: Occasional cigar."]
        );
    }

    #[test]
    fn test_alcohol() {
        assert!(lines(json!({ "alcohol": "None", "alcoholDrinks": "4" })).is_empty());
        assert_eq!(
            lines(json!({ "alcohol": "Social", "alcoholDrinks": "1", "alcoholPer": "day" })),
            vec!["1 alcoholic drink per day."]
        );
        assert_eq!(
            lines(json!({ "alcohol": "Social", "alcoholDrinks": "6", "alcoholPer": "month" })),
            vec!["6 alcoholic drinks per week."]
        );
        assert_eq!(
            lines(json!({ "alcohol": "Struggle", "alcoholDrinks": "10" })),
            vec!["10 alcoholic drinks per week. (struggling)"]
        );
        assert_eq!(
            lines(json!({ "alcohol": "Struggle" })),
            vec!["Alcohol use: Struggle. (struggling)"]
        );
        assert_eq!(
            lines(json!({ "alcohol": "Occasionally" })),
            vec!["Alcohol use: Occasionally."]
        );
    }

    #[test]
    fn test_marijuana() {
        assert!(lines(json!({ "marijuana": "None" })).is_empty());
        assert_eq!(
            lines(json!({ "marijuana": "Medical" })),
            vec!["Uses marijuana medicinally."]
        );
        assert_eq!(
            lines(json!({ "marijuana": "Weekends" })),
            vec!["Uses marijuana recreationally."]
        );
    }

    #[test]
    fn test_other_drugs() {
        assert!(lines(json!({ "otherDrugs": "No", "otherDrugsOther": "X" })).is_empty());
        assert_eq!(
            lines(json!({
                "otherDrugs": "Yes",
                "otherDrugsType": ["Cocaine", "Other"],
                "otherDrugsOther": "Ketamine"
            })),
            vec!["Uses cocaine, ketamine."]
        );
        assert_eq!(
            lines(json!({ "otherDrugs": "Yes", "otherDrugsOther": "LSD" })),
            vec!["Uses lsd."]
        );
        assert_eq!(
            lines(json!({ "otherDrugs": "Yes", "otherDrugsType": ["Other"] })),
            vec!["Uses other drugs."]
        );
        assert_eq!(lines(json!({ "otherDrugs": "Yes" })), vec!["Uses other drugs."]);
    }

    #[test]
    fn test_caffeine() {
        assert_eq!(
            lines(json!({ "caffeinePerDay": "1" })),
            vec!["1 caffeinated drink per day."]
        );
        assert_eq!(
            lines(json!({ "caffeinePerDay": 3 })),
            vec!["3 caffeinated drinks per day."]
        );
    }

    #[test]
    fn test_exercise() {
        assert_eq!(
            lines(json!({ "exercise": "Not much", "exerciseDetails": "walks" })),
            vec!["Does not exercise."]
        );
        assert_eq!(
            lines(json!({ "exercise": "Yes", "exerciseDetails": "Swims twice a week" })),
            vec!["Exercise: Swims twice a week."]
        );
        assert_eq!(lines(json!({ "exercise": "Yes" })), vec!["Exercises."]);
        assert_eq!(
            lines(json!({ "exercise": "Sometimes" })),
            vec!["Exercise: Sometimes."]
        );
    }

    #[test]
    fn test_prescription_insurance() {
        assert_eq!(
            lines(json!({ "rxInsurance": "Private", "rxInsurancePlan": "Blue Cross" })),
            vec!["Prescription insurance: Private (Blue Cross)."]
        );
        assert_eq!(
            lines(json!({ "rxInsurance": "Public", "rxInsurancePlan": "Blue Cross" })),
            vec!["Prescription insurance: Public."]
        );
        assert_eq!(
            lines(json!({ "rxInsurance": "Private" })),
            vec!["Prescription insurance: Private."]
        );
        assert_eq!(
            lines(json!({ "rxInsurancePlan": "Blue Cross" })),
            vec!["Prescription insurance: Blue Cross."]
        );
    }

    #[test]
    fn test_facets_keep_fixed_order() {
        assert_eq!(
            lines(json!({
                "rxInsurance": "Public",
                "exercise": "Yes",
                "caffeinePerDay": "2",
                "marijuana": "Medical",
                "alcohol": "Social",
                "tobacco": "Former",
                "maritalStatus": "Single",
                "occupation": "Chef"
            })),
            vec![
                "Chef.",
                "Single.",
                "Former smoker.",
                "Alcohol use: Social.",
                "Uses marijuana medicinally.",
                "2 caffeinated drinks per day.",
                "Exercises.",
                "Prescription insurance: Public.",
            ]
        );
    }

    #[test]
    fn test_section_absent_without_facets() {
        let submission: Submission =
            serde_json::from_value(json!({ "tobacco": "Never smoked" })).unwrap();
        assert!(social_history(&submission).is_none());
    }
}

//! Narrative assembly.
//!
//! [`Narrative::compile`] runs every section builder in document order and keeps the
//! sections that produced lines. [`Narrative::to_text`] renders the plain-text summary that
//! is mailed to the office.

use std::fmt;

use crate::allergies::allergies;
use crate::conditions::past_medical_history;
use crate::family::family_history;
use crate::section::{Section, SectionTitle};
use crate::social::social_history;
use crate::submission::Submission;

/// A compiled intake summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Narrative {
    sections: Vec<Section>,
}

impl Narrative {
    /// Compiles `submission` into its non-empty sections, in document order.
    pub fn compile(submission: &Submission) -> Self {
        let sections = [
            contact(submission),
            medical_team(submission),
            height_weight_hobbies(submission),
            past_medical_history(submission),
            social_history(submission),
            allergies(submission),
            family_history(submission),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: SectionTitle) -> Option<&Section> {
        self.sections.iter().find(|section| section.title() == title)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The plain-text summary, trimmed. Empty when no section rendered.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(Section::render)
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Compiles `submission` straight to its plain-text summary.
pub fn compile(submission: &Submission) -> String {
    Narrative::compile(submission).to_text()
}

fn contact(submission: &Submission) -> Option<Section> {
    let text = |key: &str| submission.text(key);
    Section::from_pairs(
        SectionTitle::Contact,
        &[
            ("Full name", text("fullName")),
            ("Preferred name", text("preferredName")),
            ("Age", text("age")),
            ("Phone Home", text("phoneHome")),
            ("Phone Work", text("phoneWork")),
            ("Phone Cell", text("phoneCell")),
            ("Preferred number", text("preferredNumber")),
            ("May we leave a message?", text("leaveMessage")),
            ("Email", text("email")),
            ("Emergency contact", text("emergencyContact")),
            ("Emergency relationship", text("emergencyRelation")),
            ("Emergency phone", text("emergencyPhone")),
        ],
    )
}

fn medical_team(submission: &Submission) -> Option<Section> {
    let text = |key: &str| submission.text(key);
    let family_doctor = if submission.is_affirmative("familyDoctorNone") {
        Some("None".to_string())
    } else {
        text("familyDoctor")
    };
    Section::from_pairs(
        SectionTitle::MedicalTeam,
        &[
            ("Family doctor / NP", family_doctor),
            ("Met Dr. Moore before", text("metDrMoore")),
            ("Main medical question", text("mainMedicalQuestion")),
            ("Other specialists", text("otherSpecialists")),
            ("Upcoming surgery", text("upcomingSurgery")),
            ("Preferred pharmacy", text("preferredPharmacy")),
        ],
    )
}

fn height_weight_hobbies(submission: &Submission) -> Option<Section> {
    let text = |key: &str| submission.text(key);
    Section::from_pairs(
        SectionTitle::HeightWeightHobbies,
        &[
            ("Height", text("height")),
            ("Weight", text("weight")),
            (
                "Weight not sure",
                submission
                    .is_affirmative("weightNotSure")
                    .then(|| "Yes".to_string()),
            ),
            ("Hobbies", text("hobbies")),
        ],
    )
}

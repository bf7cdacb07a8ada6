//! Titled narrative sections.
//!
//! A section is a heading plus zero or more lines. Empty sections never render, so callers
//! can build every section unconditionally and let absence fall out of the data.

use std::fmt;

/// The fixed sections of a narrative, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionTitle {
    Contact,
    MedicalTeam,
    HeightWeightHobbies,
    PastMedicalHistory,
    SocialHistory,
    Allergies,
    FamilyHistory,
}

impl SectionTitle {
    pub const ALL: [SectionTitle; 7] = [
        SectionTitle::Contact,
        SectionTitle::MedicalTeam,
        SectionTitle::HeightWeightHobbies,
        SectionTitle::PastMedicalHistory,
        SectionTitle::SocialHistory,
        SectionTitle::Allergies,
        SectionTitle::FamilyHistory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Contact => "CONTACT",
            SectionTitle::MedicalTeam => "MEDICAL TEAM",
            SectionTitle::HeightWeightHobbies => "HEIGHT / WEIGHT / HOBBIES",
            SectionTitle::PastMedicalHistory => "PAST MEDICAL HISTORY",
            SectionTitle::SocialHistory => "SOCIAL HISTORY",
            SectionTitle::Allergies => "ALLERGIES",
            SectionTitle::FamilyHistory => "FAMILY HISTORY",
        }
    }
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered-ready section with at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: SectionTitle,
    lines: Vec<String>,
}

impl Section {
    /// Builds a section from finished lines. Returns `None` when there are no lines.
    pub fn from_lines(title: SectionTitle, lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { title, lines })
        }
    }

    /// Builds a `label: value` section, skipping pairs without a value.
    pub fn from_pairs(title: SectionTitle, pairs: &[(&str, Option<String>)]) -> Option<Self> {
        Self::from_lines(title, labelled_lines(pairs))
    }

    pub fn title(&self) -> SectionTitle {
        self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `"\n{TITLE}\n{line}\n..."`, trailing newline included.
    pub fn render(&self) -> String {
        render_block(self.title.as_str(), &self.lines)
    }
}

/// Renders `pairs` under `title`, or returns an empty string when no pair has a value.
///
/// Pairs are kept in the order given; values are expected to be normalised already.
pub fn render_section(title: &str, pairs: &[(&str, Option<String>)]) -> String {
    let lines = labelled_lines(pairs);
    if lines.is_empty() {
        String::new()
    } else {
        render_block(title, &lines)
    }
}

fn labelled_lines(pairs: &[(&str, Option<String>)]) -> Vec<String> {
    pairs
        .iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| format!("{label}: {value}"))
        })
        .collect()
}

fn render_block(title: &str, lines: &[String]) -> String {
    let mut block = String::new();
    block.push('\n');
    block.push_str(title);
    block.push('\n');
    for line in lines {
        block.push_str(line);
        block.push('\n');
    }
    block
}

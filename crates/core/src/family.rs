//! Family history section.

use crate::constants::{ADOPTED_NOTE, FAMILY_GROUP, PLACEHOLDER};
use crate::groups::GroupRecord;
use crate::section::{Section, SectionTitle};
use crate::submission::Submission;

/// Whether a free-text family status describes a relative who has died.
pub fn is_deceased(status: &str) -> bool {
    let status = status.to_lowercase();
    status.contains("passed") || status.contains("died")
}

/// `"{relation}, {died at|living at} {age}: {conditions}"` for one relative.
///
/// Without an age the raw status stands in for the phrase.
fn relative_line(record: &GroupRecord) -> String {
    let status = record.get("status");
    let phrase = match record.get("age") {
        Some(age) if status.is_some_and(is_deceased) => format!("died at {age}"),
        Some(age) => format!("living at {age}"),
        None => status.unwrap_or(PLACEHOLDER).to_string(),
    };
    format!(
        "{}, {}: {}",
        record.get("relation").unwrap_or(PLACEHOLDER),
        phrase,
        record.get("conditions").unwrap_or_default()
    )
}

/// The FAMILY HISTORY section.
pub fn family_history(submission: &Submission) -> Option<Section> {
    let mut lines = Vec::new();
    if submission.is_affirmative("adopted") {
        lines.push(ADOPTED_NOTE.to_string());
    }
    lines.extend(FAMILY_GROUP.collect(submission).iter().map(relative_line));
    Section::from_lines(SectionTitle::FamilyHistory, lines)
}

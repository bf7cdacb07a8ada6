//! Count-driven singular/plural wording.

use std::fmt::Display;

/// Picks `singular` when `count` reads as exactly one, `plural` otherwise.
///
/// The count is read the way a form would send it: surrounding whitespace is ignored and
/// only the leading integer counts, so `"1"`, `" 1 "`, and `"1 pack"` are all singular.
/// Anything that does not start with an integer (`"abc"`, `""`, `"half"`) is plural.
pub fn plural<'a>(count: impl Display, singular: &'a str, plural: &'a str) -> &'a str {
    if leading_integer(&count.to_string()) == Some(1) {
        singular
    } else {
        plural
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

//! Field rules shared by construction and reassignment.

use std::ops::RangeInclusive;

/// Allowed magazine name length, in characters.
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;

/// Allowed article title length, in characters.
pub const ARTICLE_TITLE_LEN: RangeInclusive<usize> = 5..=50;

/// Length in Unicode scalar values, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Trim surrounding whitespace; `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Check a length bound, handing back the measured length on failure.
pub fn check_len(value: &str, bounds: &RangeInclusive<usize>) -> Result<(), usize> {
    let len = char_len(value);
    if bounds.contains(&len) {
        Ok(())
    } else {
        Err(len)
    }
}

//! Field rules for movie candidates.
//!
//! Every rule is checked independently and all violations are reported,
//! so a candidate with an empty title and an out-of-range year yields two
//! messages. Whether to reject is up to the caller.

use chrono::{Datelike, Local};

use crate::movie::NewMovie;

pub const MAX_TITLE_CHARS: usize = 100;
pub const EARLIEST_YEAR: i32 = 1888;

/// Validate against the current local calendar year.
pub fn validate(candidate: &NewMovie) -> Vec<String> {
    validate_for_year(candidate, Local::now().year())
}

/// Validate with an explicit `current_year`; the latest accepted year is
/// `current_year + 1`.
pub fn validate_for_year(candidate: &NewMovie, current_year: i32) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.title.trim().is_empty() {
        errors.push("title must not be empty".to_string());
    }

    if candidate.title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!(
            "title must not exceed {} characters",
            MAX_TITLE_CHARS
        ));
    }

    let latest_year = current_year + 1;
    if !(EARLIEST_YEAR..=latest_year).contains(&candidate.year) {
        errors.push(format!(
            "year must be between {} and {}",
            EARLIEST_YEAR, latest_year
        ));
    }

    errors
}

//! Turns a step-3 answer into either a birth date or an approximate age.

use chrono::NaiveDate;
use paw_domain::constants::DATE_FORMAT;
use tracing::debug;

/// Outcome of age resolution. At most one of the two fields is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeResolution {
    pub date_of_birth: Option<NaiveDate>,
    pub approximate_age: Option<u32>,
}

/// `yes`/`no` in any case; anything else counts as not answered.
#[must_use]
pub fn parse_knows_birth_date(raw: Option<&str>) -> Option<bool> {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("yes") => Some(true),
        Some(v) if v.eq_ignore_ascii_case("no") => Some(false),
        _ => None,
    }
}

/// Picks exactly one age representation, or none.
///
/// * Birth date known and parseable: the date.
/// * Birth date known but unparseable: the approximate age if one was sent,
///   otherwise nothing. The bad date is dropped without an error.
/// * Otherwise: the approximate age, if it parses as a whole number.
#[must_use]
pub fn resolve(
    knows_birth_date: Option<bool>,
    date_of_birth: Option<&str>,
    approximate_age: Option<&str>,
) -> AgeResolution {
    if knows_birth_date == Some(true) {
        if let Some(date) = date_of_birth.and_then(parse_date) {
            return AgeResolution { date_of_birth: Some(date), approximate_age: None };
        }
        debug!(date_of_birth, "Dropping missing or malformed birth date");

        if approximate_age.is_none_or(|raw| raw.trim().is_empty()) {
            return AgeResolution::default();
        }
    }

    AgeResolution { date_of_birth: None, approximate_age: approximate_age.and_then(parse_age) }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn parse_age(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

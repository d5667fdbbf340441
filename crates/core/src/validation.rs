//! Field constraints checked before any catalog mutation is attempted.
//!
//! The `is_valid_*` predicates are pure and allocation-free; the `validate_*`
//! wrappers turn a failed check into a [`CoreError::Validation`] with a message
//! suitable for returning to the caller.

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a movie or actor name, in characters.
pub const MAX_NAME_LENGTH: usize = 150;

/// Maximum length of a movie description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Lowest accepted movie rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted movie rating.
pub const MAX_RATING: f64 = 10.0;

/// Wire format for calendar dates (`2010-07-16`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// True iff the name has between 1 and [`MAX_NAME_LENGTH`] characters.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=MAX_NAME_LENGTH).contains(&len)
}

/// True iff the description has at most [`MAX_DESCRIPTION_LENGTH`] characters.
/// An empty description is allowed.
pub fn is_valid_description(description: &str) -> bool {
    description.chars().count() <= MAX_DESCRIPTION_LENGTH
}

/// Parse a rating string, returning the value only if it lies in
/// `[MIN_RATING, MAX_RATING]`.
///
/// NaN and infinities fail the range check and are rejected.
pub fn parse_rating(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    (MIN_RATING..=MAX_RATING).contains(&value).then_some(value)
}

/// True iff `raw` parses as a decimal number in `[0, 10]`.
pub fn is_valid_rating(raw: &str) -> bool {
    parse_rating(raw).is_some()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a movie or actor name.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if !is_valid_name(name) {
        return Err(CoreError::Validation(format!(
            "name must be between 1 and {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a movie description.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if !is_valid_description(description) {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate and parse a movie rating.
pub fn validate_rating(raw: &str) -> Result<f64, CoreError> {
    parse_rating(raw).ok_or_else(|| {
        CoreError::Validation(format!(
            "rating must be a number between {MIN_RATING} and {MAX_RATING}, got '{raw}'"
        ))
    })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, raw: &str) -> Result<Date, CoreError> {
    Date::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!("{field} must be a date in YYYY-MM-DD format"))
    })
}

/// Treat the empty string as "field absent".
///
/// Partial updates use this sentinel, so a field cannot be set to `""`.
pub fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

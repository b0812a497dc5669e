//! Input checks that run before the age calculation.
//!
//! A birth date is accepted when it is a real calendar date between the
//! configured floor (1900-01-01 by default) and today, both inclusive.

use chrono::{DateTime, NaiveDate};

use crate::error::ValidationError;

/// Earliest birth date accepted unless configured otherwise.
pub fn default_min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parses an ISO date (`2000-01-31`) or an RFC 3339 timestamp
/// (`2000-01-31T08:00:00+02:00`, date taken in its own offset).
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }

    let date_err = match trimmed.parse::<NaiveDate>() {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };

    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(timestamp) => Ok(timestamp.date_naive()),
        Err(_) => Err(ValidationError::Unparseable {
            input: trimmed.to_string(),
            reason: date_err.to_string(),
        }),
    }
}

pub fn validate_birth_date(
    date: Option<NaiveDate>,
    today: NaiveDate,
    min: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let date = date.ok_or(ValidationError::Missing)?;

    if date < min {
        return Err(ValidationError::BeforeMinimum { date, min });
    }
    if date > today {
        return Err(ValidationError::InFuture { date, today });
    }

    Ok(date)
}

//! age.rs
//!
//! This module provides a human-readable age calculation in the format:
//!     "You are X years, Y months, Z days old"
//!
//! Chrono does not provide a built-in year/month/day diff, so the breakdown
//! is assembled from the calendar differences in `calendar`:
//!   • whole years, counted once the birthday has been reached
//!   • whole months, wrapped to 0–11
//!   • days since the last monthly anniversary of the birth date
//!
//! The anniversary is built with rollover semantics. A birth day that does not
//! exist in the anniversary month (Jan 31 → "Feb 31") spills into the next
//! month, which can make `days` zero or negative. A Feb 29 birth checked on
//! Feb 28 counts twelve months without a year, so `days` covers the whole year
//! since the previous anniversary. Those rough edges are kept.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{difference_in_days, difference_in_months, difference_in_years, rollover_date};

/// Elapsed time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl AgeBreakdown {
    /// The sentence shown to the user.
    pub fn sentence(&self) -> String {
        format!("You are {self} old")
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

/// Computes the age breakdown of `birthdate` as of `today`.
///
/// No range checks happen here; see `validation` for those. Any pair of dates
/// yields a result, negative when `birthdate` is after `today`.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let years = difference_in_years(today, birthdate);
    let months = difference_in_months(today, birthdate) % 12;

    // Unrepresentable only at the far edges of chrono's year range.
    let last_anniversary = rollover_date(
        birthdate.year() + years,
        birthdate.month0() as i32 + months,
        birthdate.day(),
    )
    .unwrap_or(today);

    let days = difference_in_days(today, last_anniversary);

    AgeBreakdown {
        years,
        months,
        days,
    }
}

/// Returns a human age as a string
pub fn age_string(birthdate: NaiveDate, today: NaiveDate) -> String {
    compute_age(birthdate, today).sentence()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn age(years: i32, months: i32, days: i32) -> AgeBreakdown {
        AgeBreakdown {
            years,
            months,
            days,
        }
    }

    #[test]
    fn same_day_is_zero() {
        let today = date(2024, 6, 15);
        assert_eq!(compute_age(today, today), age(0, 0, 0));
    }

    #[test]
    fn mid_year_example() {
        let result = compute_age(date(2000, 1, 1), date(2024, 6, 15));
        assert_eq!(result, age(24, 5, 14));
        assert_eq!(result.sentence(), "You are 24 years, 5 months, 14 days old");
    }

    #[test]
    fn exact_birthday_has_no_months_or_days() {
        assert_eq!(compute_age(date(1992, 6, 14), date(2025, 6, 14)), age(33, 0, 0));
    }

    #[test]
    fn day_before_birthday_borrows_from_previous_month() {
        // Last monthly anniversary is 2025-05-14.
        assert_eq!(compute_age(date(1992, 6, 14), date(2025, 6, 13)), age(32, 11, 30));
    }

    #[test]
    fn leap_day_birth_on_march_first_rolls_over() {
        // The 2023 anniversary "Feb 29" becomes Mar 1, so no days remain.
        assert_eq!(compute_age(date(2000, 2, 29), date(2023, 3, 1)), age(23, 0, 0));
        assert_eq!(
            age_string(date(2000, 2, 29), date(2023, 3, 1)),
            "You are 23 years, 0 months, 0 days old"
        );
    }

    #[test]
    fn short_month_overflow_gives_negative_days() {
        // Anniversary "Feb 31 2000" rolls to Mar 2, one day after today.
        assert_eq!(compute_age(date(2000, 1, 31), date(2000, 3, 1)), age(0, 1, -1));
    }

    #[test]
    fn leap_day_birth_on_feb_28_counts_days_since_birth() {
        // Feb 28 is read as a full 12 months, which wraps to 0, so the
        // anniversary falls back to the birth date itself.
        assert_eq!(compute_age(date(2000, 2, 29), date(2001, 2, 28)), age(0, 0, 365));
        assert_eq!(compute_age(date(2000, 2, 29), date(2005, 2, 28)), age(4, 0, 365));
    }

    #[test]
    fn future_birthdate_is_negative() {
        let result = compute_age(date(2025, 1, 1), date(2024, 1, 1));
        assert_eq!(result.years, -1);
        assert_eq!(result.months, 0);
    }

    #[test]
    fn display_omits_the_sentence_frame() {
        assert_eq!(age(1, 2, 3).to_string(), "1 years, 2 months, 3 days");
    }
}

//! calendar.rs
//!
//! Calendar-aware date differences in the style of the common JS date
//! libraries: whole years, whole months and whole days between two dates.
//!
//! Every function here is total over chrono's date range. Dates are built
//! with rollover semantics, so a day that does not exist in the target month
//! spills into the following month (Feb 30 becomes Mar 1 or Mar 2).

use chrono::{Datelike, Days, NaiveDate};

/// Builds a date from a year, a zero-based month index and a day of month,
/// normalizing out-of-range months into the year and excess days into the
/// following month(s).
///
/// `month0` may be negative or larger than 11. `day` is expected to be >= 1.
/// Returns `None` only when the result falls outside chrono's range.
pub fn rollover_date(year: i32, month0: i32, day: u32) -> Option<NaiveDate> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = month0.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

/// Signed number of full years from `right` to `left`.
///
/// The final year only counts once the month/day of `right` has been reached.
/// Month/day pairs are compared directly, which is the same as comparing both
/// dates moved into a common leap year, so Feb 29 always has a counterpart.
pub fn difference_in_years(left: NaiveDate, right: NaiveDate) -> i32 {
    let sign = left.cmp(&right) as i32;
    let difference = (left.year() - right.year()).abs();

    let left_md = (left.month(), left.day());
    let right_md = (right.month(), right.day());
    let last_year_not_full = left_md.cmp(&right_md) as i32 == -sign;

    sign * (difference - i32::from(last_year_not_full))
}

/// Signed number of calendar months between the two dates, ignoring days.
pub fn calendar_month_difference(left: NaiveDate, right: NaiveDate) -> i32 {
    (left.year() - right.year()) * 12 + (left.month() as i32 - right.month() as i32)
}

/// Signed number of full months from `right` to `left`.
///
/// `left` is stepped back by the calendar month difference (with rollover)
/// and the last month is dropped if that lands short of `right`. Two quirks
/// are kept on purpose:
///   • a `left` on Feb 28/29 is first pushed to "Feb 30", i.e. early March
///   • a `left` on the last day of its month, one calendar month after and
///     later than `right`, always counts that month as full
pub fn difference_in_months(left: NaiveDate, right: NaiveDate) -> i32 {
    let sign = left.cmp(&right) as i32;
    let difference = calendar_month_difference(left, right).abs();

    if difference < 1 {
        return 0;
    }

    let mut stepped = Some(left);
    if left.month() == 2 && left.day() > 27 {
        stepped = rollover_date(left.year(), 1, 30);
    }
    let stepped = stepped.and_then(|d| {
        rollover_date(d.year(), d.month0() as i32 - sign * difference, d.day())
    });

    let mut last_month_not_full = match stepped {
        Some(d) => d.cmp(&right) as i32 == -sign,
        None => false,
    };

    if is_last_day_of_month(left) && difference == 1 && left > right {
        last_month_not_full = false;
    }

    sign * (difference - i32::from(last_month_not_full))
}

/// Signed number of whole days from `right` to `left`.
pub fn difference_in_days(left: NaiveDate, right: NaiveDate) -> i32 {
    left.signed_duration_since(right).num_days() as i32
}

pub fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rollover_date_normalizes_months_and_days() {
        assert_eq!(rollover_date(2024, 0, 15), Some(date(2024, 1, 15)));
        assert_eq!(rollover_date(2024, 12, 1), Some(date(2025, 1, 1)));
        assert_eq!(rollover_date(2024, -1, 1), Some(date(2023, 12, 1)));
        assert_eq!(rollover_date(2023, -275, 1), Some(date(2000, 2, 1)));
        assert_eq!(rollover_date(2023, 1, 29), Some(date(2023, 3, 1)));
        assert_eq!(rollover_date(2023, 1, 30), Some(date(2023, 3, 2)));
        assert_eq!(rollover_date(2024, 1, 30), Some(date(2024, 3, 1)));
        assert_eq!(rollover_date(2024, 3, 31), Some(date(2024, 5, 1)));
    }

    #[test]
    fn years_wait_for_the_birthday() {
        assert_eq!(difference_in_years(date(2024, 6, 14), date(2000, 6, 15)), 23);
        assert_eq!(difference_in_years(date(2024, 6, 15), date(2000, 6, 15)), 24);
        assert_eq!(difference_in_years(date(2024, 6, 16), date(2000, 6, 15)), 24);
    }

    #[test]
    fn years_treat_leap_day_as_reached_on_march_first() {
        assert_eq!(difference_in_years(date(2023, 2, 28), date(2000, 2, 29)), 22);
        assert_eq!(difference_in_years(date(2023, 3, 1), date(2000, 2, 29)), 23);
    }

    #[test]
    fn years_are_negative_when_reversed() {
        assert_eq!(difference_in_years(date(2000, 6, 15), date(2024, 6, 16)), -24);
        assert_eq!(difference_in_years(date(2000, 1, 1), date(2000, 1, 1)), 0);
    }

    #[test]
    fn months_count_full_months_only() {
        assert_eq!(difference_in_months(date(2024, 6, 15), date(2000, 1, 1)), 293);
        assert_eq!(difference_in_months(date(2024, 6, 15), date(2024, 5, 16)), 0);
        assert_eq!(difference_in_months(date(2024, 6, 16), date(2024, 5, 16)), 1);
        assert_eq!(difference_in_months(date(2000, 3, 1), date(2000, 1, 31)), 1);
    }

    #[test]
    fn months_from_leap_day_to_march_first() {
        assert_eq!(difference_in_months(date(2023, 3, 1), date(2000, 2, 29)), 276);
    }

    #[test]
    fn months_end_of_month_counts_as_full() {
        assert_eq!(difference_in_months(date(2023, 2, 28), date(2023, 1, 31)), 1);
        assert_eq!(difference_in_months(date(2024, 4, 30), date(2024, 3, 31)), 1);
    }

    #[test]
    fn months_are_negative_when_reversed() {
        assert_eq!(difference_in_months(date(2024, 1, 1), date(2024, 3, 15)), -2);
    }

    #[test]
    fn days_are_signed() {
        assert_eq!(difference_in_days(date(2024, 6, 15), date(2024, 6, 1)), 14);
        assert_eq!(difference_in_days(date(2000, 3, 1), date(2000, 3, 2)), -1);
        assert_eq!(difference_in_days(date(2024, 3, 1), date(2023, 3, 1)), 366);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert!(is_last_day_of_month(date(2024, 2, 29)));
        assert!(!is_last_day_of_month(date(2024, 2, 28)));
    }
}

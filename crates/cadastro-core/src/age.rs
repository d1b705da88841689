//! Age-of-majority computation for the birth-date field.
//!
//! The rule is the one the sign-up form enforces: the registrant must be at
//! least 18 years old today.  The cutoff is built as a real calendar date —
//! the birth date shifted forward 18 years — so month lengths and leap years
//! take care of themselves, with one deliberate quirk: a day that does not
//! exist in the target month rolls over into the next month, matching how a
//! browser `Date` normalizes overflow (Feb 29 + 18 years on a non-leap target
//! becomes Mar 1).

use chrono::{Datelike, Local, NaiveDate};

/// Years a registrant must have completed.
pub const MAJORITY_YEARS: i32 = 18;

/// Parses a birth-date field value in ISO `YYYY-MM-DD` form (the wire format
/// of a `date` input).  Returns `None` for anything unparseable; callers
/// treat that as under-age rather than failing.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Returns `true` when `birth` is at least [`MAJORITY_YEARS`] before `today`.
///
/// # Examples
///
/// ```
/// use cadastro_core::age::of_age_on;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
/// let exactly_18 = NaiveDate::from_ymd_opt(2008, 8, 27).unwrap();
/// let one_day_short = NaiveDate::from_ymd_opt(2008, 8, 28).unwrap();
///
/// assert!(of_age_on(exactly_18, today));
/// assert!(!of_age_on(one_day_short, today));
/// ```
pub fn of_age_on(birth: NaiveDate, today: NaiveDate) -> bool {
    add_years_normalized(birth, MAJORITY_YEARS).is_some_and(|cutoff| cutoff <= today)
}

/// Returns `true` when `birth` is at least [`MAJORITY_YEARS`] before the
/// current local date.
pub fn of_age_today(birth: NaiveDate) -> bool {
    of_age_on(birth, Local::now().date_naive())
}

/// Shifts `date` forward by `years`, rolling a nonexistent day into the next
/// month (browser `Date` overflow normalization).
fn add_years_normalized(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year() + years;
    if let Some(shifted) = NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
        return Some(shifted);
    }
    // The day overflows the target month (Feb 29 on a non-leap year).
    let rolled = date.day() - days_in_month(year, date.month());
    let (next_year, next_month) = if date.month() == 12 {
        (year + 1, 1)
    } else {
        (year, date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, rolled)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

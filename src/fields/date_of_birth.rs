//! Date-of-birth validation against the MM/DD/YYYY entry mask.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldResult, ValidationError};

const MIN_AGE_YEARS: u32 = 13;

/// Validates a masked date-of-birth entry against `now`.
///
/// The mask regex bounds the field widths (month 01-12, day 01-31, four
/// digit year); the calendar parse then rejects impossible dates such as
/// `02/30/2020`. A birth date exactly 13 years before `now` is on the
/// boundary and passes; one day younger fails.
pub fn validate_date_of_birth(date: &str, now: NaiveDate) -> FieldResult {
    static MASK_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/(\d{4})$").unwrap());

    if date.is_empty() {
        return Err(ValidationError::Required);
    }

    let Some(caps) = MASK_REGEX.captures(date) else {
        return Err(ValidationError::InvalidFormat);
    };

    // Field widths are pinned by the mask; the numeric parses cannot fail.
    let month: u32 = caps[1].parse().map_err(|_| ValidationError::InvalidFormat)?;
    let day: u32 = caps[2].parse().map_err(|_| ValidationError::InvalidFormat)?;
    let year: i32 = caps[3].parse().map_err(|_| ValidationError::InvalidFormat)?;

    let birth =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidFormat)?;

    if birth > now {
        return Err(ValidationError::FutureDate);
    }

    match now.years_since(birth) {
        Some(age) if age >= MIN_AGE_YEARS => Ok(()),
        _ => Err(ValidationError::Underage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_empty_date_is_required() {
        assert_eq!(
            validate_date_of_birth("", today()),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn test_unmasked_input_rejected() {
        assert_eq!(
            validate_date_of_birth("1990-01-15", today()),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            validate_date_of_birth("1/15/1990", today()),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_month_out_of_range() {
        assert_eq!(
            validate_date_of_birth("13/01/1990", today()),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_impossible_calendar_date_rejected() {
        // Passes the width mask but is not a real date.
        assert_eq!(
            validate_date_of_birth("02/30/2020", today()),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_leap_day_accepted() {
        assert_eq!(validate_date_of_birth("02/29/2000", today()), Ok(()));
    }

    #[test]
    fn test_future_date_rejected() {
        assert_eq!(
            validate_date_of_birth("01/15/2030", today()),
            Err(ValidationError::FutureDate)
        );
    }

    #[test]
    fn test_exactly_thirteen_passes() {
        assert_eq!(validate_date_of_birth("08/07/2013", today()), Ok(()));
    }

    #[test]
    fn test_one_day_younger_fails() {
        assert_eq!(
            validate_date_of_birth("08/08/2013", today()),
            Err(ValidationError::Underage)
        );
    }

    #[test]
    fn test_adult_birth_date_passes() {
        assert_eq!(validate_date_of_birth("12/31/1989", today()), Ok(()));
    }
}

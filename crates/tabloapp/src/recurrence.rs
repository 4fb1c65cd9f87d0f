//! Calendar recurrence for repeating tasks.
//!
//! The next due date is the current one advanced by `value` units on the
//! calendar, not by a fixed number of seconds. Month and year steps clamp
//! to the last day of the target month: Jan 31 + 1 month is Feb 28 (or 29),
//! and Feb 29 + 1 year is Feb 28.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Duration, Months, Utc};

use crate::error::{BoardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatUnit {
    Hours,
    Days,
    Months,
    Years,
}

impl FromStr for RepeatUnit {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hours" => Ok(Self::Hours),
            "day" | "days" => Ok(Self::Days),
            "month" | "months" => Ok(Self::Months),
            "year" | "years" => Ok(Self::Years),
            _ => Err(BoardError::InvalidRepeatUnit(s.to_string())),
        }
    }
}

impl fmt::Display for RepeatUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        };
        write!(f, "{name}")
    }
}

/// Advance `current` by `value` units of `unit`.
///
/// An unrecognized unit is an error, never a silent no-op, and a result
/// outside chrono's representable range reports the offsets that caused it.
pub fn next_due(current: DateTime<Utc>, value: u32, unit: &str) -> Result<DateTime<Utc>> {
    let parsed: RepeatUnit = unit.parse()?;

    let next = match parsed {
        RepeatUnit::Hours => current.checked_add_signed(Duration::hours(i64::from(value))),
        RepeatUnit::Days => current.checked_add_days(Days::new(u64::from(value))),
        RepeatUnit::Months => current.checked_add_months(Months::new(value)),
        RepeatUnit::Years => value
            .checked_mul(12)
            .and_then(|months| current.checked_add_months(Months::new(months))),
    };

    next.ok_or_else(|| BoardError::DueDateOverflow {
        value,
        unit: parsed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_hours_step() {
        let next = next_due(date(2021, 6, 1, 22, 30), 3, "hours").unwrap();
        assert_eq!(next, date(2021, 6, 2, 1, 30));
    }

    #[test]
    fn test_days_step() {
        let next = next_due(date(2021, 6, 1, 9, 0), 10, "days").unwrap();
        assert_eq!(next, date(2021, 6, 11, 9, 0));
    }

    #[test]
    fn test_month_step_clamps_to_month_end() {
        let next = next_due(date(2021, 1, 31, 9, 0), 1, "months").unwrap();
        assert_eq!(next, date(2021, 2, 28, 9, 0));
    }

    #[test]
    fn test_month_step_preserves_time_of_day() {
        let next = next_due(date(2021, 4, 15, 18, 45), 2, "months").unwrap();
        assert_eq!(next, date(2021, 6, 15, 18, 45));
    }

    #[test]
    fn test_year_step_clamps_leap_day() {
        let next = next_due(date(2020, 2, 29, 12, 0), 1, "years").unwrap();
        assert_eq!(next, date(2021, 2, 28, 12, 0));
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let err = next_due(date(2021, 1, 1, 0, 0), 1, "fortnights").unwrap_err();
        assert!(matches!(err, BoardError::InvalidRepeatUnit(unit) if unit == "fortnights"));
    }

    #[test]
    fn test_unit_parse_accepts_singular_and_case() {
        assert_eq!("day".parse::<RepeatUnit>().unwrap(), RepeatUnit::Days);
        assert_eq!("Months".parse::<RepeatUnit>().unwrap(), RepeatUnit::Months);
        assert_eq!(" years ".parse::<RepeatUnit>().unwrap(), RepeatUnit::Years);
    }

    #[test]
    fn test_far_future_overflow_is_reported() {
        let err = next_due(date(2021, 1, 1, 0, 0), u32::MAX, "years").unwrap_err();
        assert!(matches!(err, BoardError::DueDateOverflow { .. }));
    }
}

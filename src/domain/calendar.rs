use crate::error::{LoanError, Result};
use chrono::{Months, NaiveDate};

/// Advances `start` by whole calendar months.
///
/// A day that does not exist in the target month clamps to that month's last
/// day (Jan 31 + 1 month is Feb 28, or Feb 29 in a leap year).
pub fn add_months(start: NaiveDate, months: u32) -> Result<NaiveDate> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| LoanError::Arithmetic(format!("{start} + {months} months is out of range")))
}

//! Time and date calculation utilities.
//!
//! Tenure is derived at read time from the assignment's start date rather than stored, so
//! every read path goes through [`days_worked`] to get the same answer.

use chrono::{NaiveDate, Utc};

/// Current calendar date in UTC, the reference point for start dates and tenure.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Calculates whole days elapsed between an assignment's start date and `today`.
///
/// The day of assignment counts as day 0 and the following calendar day as day 1. A start
/// date in the future (clock skew between writers) is clamped to 0 so tenure is never negative.
///
/// # Arguments
/// - `start_date` - UTC calendar date the employee started at their café
/// - `today` - UTC calendar date to measure against
///
/// # Returns
/// - `i64` - Non-negative number of whole days worked
///
/// # Example
/// ```ignore
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
/// assert_eq!(days_worked(start, today), 3);
/// ```
pub fn days_worked(start_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - start_date).num_days().max(0)
}

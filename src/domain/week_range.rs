//! Sunday-to-Saturday week labels

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

/// Label produced when the input date cannot be resolved to a calendar day.
pub const INVALID_WEEK_LABEL: &str = "Invalid Date - Invalid Date";

/// First (Sunday) and last (Saturday) day of the week containing `date`.
///
/// Returns `None` only when the week would fall outside chrono's supported
/// date range.
pub fn week_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset))?;
    let end = start.checked_add_days(Days::new(6))?;
    Some((start, end))
}

/// Format the week containing `date` as `"Jun 2 - Jun 8"`.
pub fn week_range(date: NaiveDate) -> String {
    match week_bounds(date) {
        Some((start, end)) => format!("{} - {}", short_date(start), short_date(end)),
        None => INVALID_WEEK_LABEL.to_string(),
    }
}

/// Format the week for a `YYYY-MM-DD` string.
///
/// Empty input yields an empty label. Out-of-range components roll over the
/// way calendar arithmetic does (`2024-13-01` is January 2025, day `0` is the
/// last day of the previous month) and an empty component counts as `0`
/// (`2024--05` is 2023-12-05). Anything that cannot be read as three
/// integers yields [`INVALID_WEEK_LABEL`].
pub fn week_range_label(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    match resolve_date(input) {
        Some(date) => week_range(date),
        None => INVALID_WEEK_LABEL.to_string(),
    }
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn resolve_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-').map(|part| match part.trim() {
        "" => Some(0),
        part => part.parse::<i64>().ok(),
    });
    let year = parts.next()??;
    let month = parts.next()??;
    let day = parts.next()??;

    let total_months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(total_months.div_euclid(12)).ok()?,
        u32::try_from(total_months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

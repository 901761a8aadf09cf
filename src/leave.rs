//! # Leave Calendar
//!
//! Membership queries and mutation commands over the caller-owned set of
//! blocked dates. Leave days are canonical `YYYY-MM-DD` strings; membership
//! is exact calendar-date equality after normalization, never substring or
//! prefix matching. The collection itself lives with the caller — every
//! operation here works on the snapshot it is handed.

use chrono::NaiveDate;
use tracing::warn;

use crate::errors::{SlotError, SlotResult};
use crate::models::DATE_FORMAT;

/// Outcome of a leave-day mutation command.
///
/// Commands are idempotent: re-adding a present date or removing an absent
/// one reports a no-op rather than failing. Only a date that does not parse
/// at all is rejected, as `SlotError::InvalidDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveUpdate {
    Added,
    AlreadyPresent,
    InPast,
    Removed,
    NotPresent,
}

/// Whether `date` is a blocked day.
///
/// Fails closed: a query date that does not parse is treated as "not a leave
/// day" so one bad value cannot blank the whole dashboard. Entries in
/// `leave_days` that do not parse can never match anything.
pub fn is_leave_day(date: &str, leave_days: &[String]) -> bool {
    let Some(target) = parse_date(date) else {
        warn!(date, "unparsable date in leave query, treating as not blocked");
        return false;
    };
    leave_days
        .iter()
        .filter_map(|entry| parse_date(entry))
        .any(|entry| entry == target)
}

/// Blocks a future date.
///
/// No-ops when the date is already blocked or lies before `today`; the
/// stored form is always the canonical rendering, whatever spacing or
/// zero-padding the input used.
pub fn add_leave_day(
    leave_days: &mut Vec<String>,
    date: &str,
    today: NaiveDate,
) -> SlotResult<LeaveUpdate> {
    let target = parse_date(date).ok_or_else(|| SlotError::InvalidDate(date.to_string()))?;
    if target < today {
        return Ok(LeaveUpdate::InPast);
    }
    if leave_days
        .iter()
        .filter_map(|entry| parse_date(entry))
        .any(|entry| entry == target)
    {
        return Ok(LeaveUpdate::AlreadyPresent);
    }
    leave_days.push(target.format(DATE_FORMAT).to_string());
    Ok(LeaveUpdate::Added)
}

/// Unblocks a date. Removing a date that is not blocked is a no-op.
pub fn remove_leave_day(leave_days: &mut Vec<String>, date: &str) -> SlotResult<LeaveUpdate> {
    let target = parse_date(date).ok_or_else(|| SlotError::InvalidDate(date.to_string()))?;
    let before = leave_days.len();
    leave_days.retain(|entry| parse_date(entry) != Some(target));
    if leave_days.len() == before {
        Ok(LeaveUpdate::NotPresent)
    } else {
        Ok(LeaveUpdate::Removed)
    }
}

/// Leave days on or after `today`, ascending, in canonical form.
///
/// This is what the dashboard lists: past leave is history, not something to
/// manage.
pub fn upcoming_leave_days(leave_days: &[String], today: NaiveDate) -> Vec<String> {
    let mut upcoming: Vec<NaiveDate> = leave_days
        .iter()
        .filter_map(|entry| parse_date(entry))
        .filter(|entry| *entry >= today)
        .collect();
    upcoming.sort();
    upcoming.dedup();
    upcoming
        .into_iter()
        .map(|entry| entry.format(DATE_FORMAT).to_string())
        .collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

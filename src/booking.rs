//! # Booking Index
//!
//! Date-keyed views over the full appointment snapshot. Both operations are
//! pure filters: they never mutate the collection and they tolerate records
//! with unparsable dates by skipping them, so one corrupt row cannot take
//! down a whole dashboard query.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::DATE_FORMAT;
use crate::models::appointment::Appointment;

/// All appointments booked on `date`, ordered by time-of-day ascending.
///
/// Records whose date field does not parse are skipped. Records that match
/// the date but carry no resolved time still belong in the booked list (the
/// admin should see them); they sort after every timed entry, keeping their
/// input order among themselves. A target date that does not parse matches
/// nothing and yields an empty result.
pub fn booked_slots_for_date(date: &str, appointments: &[Appointment]) -> Vec<Appointment> {
    let Some(target) = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok() else {
        warn!(date, "unparsable target date in booking query");
        return Vec::new();
    };
    appointments_on(target, appointments)
}

/// Appointments booked on the reference date `today`.
///
/// `today` is passed explicitly rather than read from the wall clock, so the
/// result is a pure function of its arguments. The ascending-time ordering
/// is a presentation convenience layered on the filter.
pub fn todays_appointments(appointments: &[Appointment], today: NaiveDate) -> Vec<Appointment> {
    appointments_on(today, appointments)
}

fn appointments_on(target: NaiveDate, appointments: &[Appointment]) -> Vec<Appointment> {
    let mut booked: Vec<Appointment> = appointments
        .iter()
        .filter(|apt| match apt.parsed_date() {
            Some(date) => date == target,
            None => {
                warn!(id = %apt.id, date = %apt.date, "skipping appointment with unparsable date");
                false
            }
        })
        .cloned()
        .collect();

    booked.sort_by(|a, b| match (a.time, b.time) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    booked
}

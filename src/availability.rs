//! # Availability Resolver
//!
//! Composes the slot catalog, the leave calendar and the booking index into
//! the per-date availability answer the dashboard renders.
//!
//! ## Resolution Algorithm
//!
//! For a given date the resolver:
//!
//! 1. Checks the leave calendar. A blocked date short-circuits to zero
//!    availability — leave days offer no slots at all, by business rule.
//! 2. Collects the booked appointments for the date and extracts the
//!    occupied set of time-of-day values. Records with no resolved time
//!    contribute nothing to the occupied set.
//! 3. Subtracts the occupied set from the canonical catalog, preserving the
//!    catalog's ascending order.
//!
//! Every operation is a pure function of its arguments: no interior state,
//! no retained references, no clock reads. Identical inputs always produce
//! identical, order-stable output, which also makes the resolver safe to
//! call from concurrent readers without locking.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::booking;
use crate::catalog::SlotCatalog;
use crate::leave;
use crate::models::appointment::Appointment;
use crate::models::slot::Slot;

/// The per-date availability answer.
///
/// A leave day is `Blocked` — the slot concept does not apply, so there is
/// no available/booked split to report. Any other date is `Open` with the
/// ordered available slots and the ordered booked appointments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Availability {
    Blocked,
    Open {
        available: Vec<Slot>,
        booked: Vec<Appointment>,
    },
}

/// Stateless resolver over a fixed slot catalog.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityResolver {
    catalog: SlotCatalog,
}

impl AvailabilityResolver {
    pub fn new(catalog: SlotCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    /// Whether `date` is blocked. Delegates to the leave calendar, including
    /// its fail-closed handling of unparsable dates.
    pub fn is_leave_day(&self, date: &str, leave_days: &[String]) -> bool {
        leave::is_leave_day(date, leave_days)
    }

    /// The booked appointments for `date`, ascending by time.
    pub fn booked_slots(&self, date: &str, appointments: &[Appointment]) -> Vec<Appointment> {
        booking::booked_slots_for_date(date, appointments)
    }

    /// The free slots for `date`: the canonical catalog minus the occupied
    /// set, in catalog order. Always a subset of the catalog; empty on leave
    /// days regardless of bookings. A slot occupied by more than one
    /// appointment is simply occupied — double-booking detection belongs to
    /// the booking-creation path, not here.
    pub fn available_slots(
        &self,
        date: &str,
        appointments: &[Appointment],
        leave_days: &[String],
    ) -> Vec<Slot> {
        if self.is_leave_day(date, leave_days) {
            debug!(date, "leave day, zero availability");
            return Vec::new();
        }

        let booked = self.booked_slots(date, appointments);
        let occupied: HashSet<NaiveTime> = booked.iter().filter_map(|apt| apt.time).collect();

        self.catalog
            .canonical_slots()
            .iter()
            .filter(|slot| !occupied.contains(&slot.time))
            .cloned()
            .collect()
    }

    /// The combined per-date answer: `Blocked` for leave days, otherwise the
    /// ordered (available, booked) pair.
    pub fn resolve(
        &self,
        date: &str,
        appointments: &[Appointment],
        leave_days: &[String],
    ) -> Availability {
        if self.is_leave_day(date, leave_days) {
            return Availability::Blocked;
        }
        Availability::Open {
            available: self.available_slots(date, appointments, leave_days),
            booked: self.booked_slots(date, appointments),
        }
    }
}

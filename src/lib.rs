//! # Slotwise
//!
//! The slot availability engine behind the consultation booking dashboard.
//! It reconciles three inputs — the fixed daily slot catalog, the full set
//! of booked appointments, and the blocked leave dates — into a queryable
//! availability model.
//!
//! ## Architecture
//!
//! The engine is a composition of three small components:
//!
//! - **Catalog**: the ordered, date-independent template of canonical slots
//! - **Leave**: membership queries and mutation commands over blocked dates
//! - **Booking**: date-keyed, time-ordered views over the appointment snapshot
//!
//! The **Availability** resolver ties them together: a leave day has zero
//! availability by rule; any other day offers the catalog minus the occupied
//! set.
//!
//! The engine is stateless and pure. Collections are owned by the caller and
//! passed as snapshots; dates cross the boundary as canonical `YYYY-MM-DD`
//! strings and times as 24-hour `HH:mm`. Malformed records degrade to
//! "excluded" rather than aborting a query, so the dashboard stays usable
//! even with partially corrupt data.

/// Availability resolution over catalog, leave and bookings
pub mod availability;
/// Date-keyed views over the appointment collection
pub mod booking;
/// The daily slot template
pub mod catalog;
/// Engine error types
pub mod errors;
/// Blocked-date queries and commands
pub mod leave;
/// Domain models
pub mod models;

pub use availability::{Availability, AvailabilityResolver};
pub use booking::{booked_slots_for_date, todays_appointments};
pub use catalog::SlotCatalog;
pub use errors::{SlotError, SlotResult};
pub use leave::{LeaveUpdate, add_leave_day, is_leave_day, remove_leave_day, upcoming_leave_days};
pub use models::appointment::{Appointment, AppointmentMode, ConsultationType, RawAppointment};
pub use models::slot::Slot;

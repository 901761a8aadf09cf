/// Appointment records and their enumerations
pub mod appointment;
/// Canonical daily slots
pub mod slot;

/// Canonical calendar-date format used everywhere across the engine
/// boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

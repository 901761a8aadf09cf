use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A canonical bookable slot from the daily offering template.
///
/// Slots are date-independent: the same template applies to every non-leave
/// day. Equality and ordering follow the time-of-day value; the display
/// label is presentation data carried alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: NaiveTime,
    pub display: String,
}

impl Slot {
    /// Builds a slot with the standard 12-hour display label, e.g. "10:00 AM".
    pub fn new(time: NaiveTime) -> Self {
        Self {
            display: time.format("%-I:%M %p").to_string(),
            time,
        }
    }

    /// Canonical 24-hour `HH:mm` rendering used at the engine boundary.
    pub fn hhmm(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

//! # Slot Catalog
//!
//! The daily offering template: the ordered set of canonical slots available
//! on any non-leave day. The catalog is static configuration — it does not
//! vary by date and it does not know about bookings. Ordering (ascending by
//! time-of-day) and uniqueness are enforced at construction, so every
//! consumer can rely on them without re-sorting.

use chrono::NaiveTime;

use crate::errors::{SlotError, SlotResult};
use crate::models::slot::Slot;

/// Default working-hours template: hourly slots in a morning block and an
/// afternoon block, matching the consultation practice's published hours.
const DEFAULT_HOURS: [(u32, u32); 8] = [
    (10, 0),
    (11, 0),
    (12, 0),
    (14, 0),
    (15, 0),
    (16, 0),
    (17, 0),
    (18, 0),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// Builds a catalog from time-of-day values, sorting ascending and
    /// dropping duplicate times.
    pub fn new(mut times: Vec<NaiveTime>) -> Self {
        times.sort();
        times.dedup();
        Self {
            slots: times.into_iter().map(Slot::new).collect(),
        }
    }

    /// Builds a catalog from 24-hour `HH:mm` strings.
    ///
    /// A malformed entry is a configuration error, not a runtime condition
    /// to degrade around, so this is the one constructor that can fail.
    pub fn from_times(times: &[&str]) -> SlotResult<Self> {
        let parsed = times
            .iter()
            .map(|value| {
                NaiveTime::parse_from_str(value.trim(), "%H:%M")
                    .map_err(|_| SlotError::InvalidTime((*value).to_string()))
            })
            .collect::<SlotResult<Vec<_>>>()?;
        Ok(Self::new(parsed))
    }

    /// The full ordered template, independent of date and bookings.
    pub fn canonical_slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.slots.iter().any(|slot| slot.time == time)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        let times = DEFAULT_HOURS
            .iter()
            .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .collect();
        Self::new(times)
    }
}

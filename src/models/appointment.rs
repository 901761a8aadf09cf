use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DATE_FORMAT;

/// Whether the consultation happens over video or in person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentMode {
    Online,
    Offline,
}

/// The fixed set of consultation offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    General,
    Career,
    Love,
    Health,
    Financial,
    Compatibility,
    BirthChart,
    Remedies,
}

impl ConsultationType {
    /// Human-readable label for tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::General => "General Reading",
            ConsultationType::Career => "Career Guidance",
            ConsultationType::Love => "Love & Relationships",
            ConsultationType::Health => "Health & Wellness",
            ConsultationType::Financial => "Financial Astrology",
            ConsultationType::Compatibility => "Compatibility Reading",
            ConsultationType::BirthChart => "Birth Chart Analysis",
            ConsultationType::Remedies => "Astrological Remedies",
        }
    }
}

/// A booked appointment, normalized at the ingestion boundary.
///
/// The date is kept exactly as the store supplied it and parsed defensively
/// at every query; a record whose date never parses simply drops out of
/// date-filtered results. The slot time, by contrast, is resolved once from
/// the store's fallback fields (see [`RawAppointment`]) into the single
/// `time` field: `None` means the record carries no usable time-of-day and
/// occupies no slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: String,
    pub time: Option<NaiveTime>,
    pub mode: AppointmentMode,
    pub consultation_type: ConsultationType,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub slot_label: Option<String>,
}

impl Appointment {
    /// Normalizes a raw store record.
    ///
    /// The canonical time comes from `slotTime` first, then
    /// `appointmentTime`; both must be 24-hour `HH:mm`. The embedded slot
    /// descriptor's display string is carried for rendering but never
    /// parsed, since its format is a presentation choice.
    pub fn from_raw(raw: RawAppointment) -> Self {
        let time = raw
            .slot_time
            .as_deref()
            .or(raw.appointment_time.as_deref())
            .and_then(parse_hhmm);

        let slot_label = raw
            .slot_time
            .clone()
            .or_else(|| raw.slot.as_ref().map(|s| s.display.clone()))
            .or_else(|| raw.appointment_time.clone());

        Self {
            id: raw.id,
            date: raw.appointment_date,
            time,
            mode: raw.appointment_mode,
            consultation_type: raw.consultation_type,
            name: raw.name,
            email: raw.email,
            phone: raw.phone,
            slot_label,
        }
    }

    /// The appointment's calendar date, if it parses as `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Canonical `HH:mm` form of the resolved slot time.
    pub fn hhmm(&self) -> Option<String> {
        self.time.map(|t| t.format("%H:%M").to_string())
    }
}

/// An appointment as the store serializes it, camelCase fields included.
///
/// The store historically wrote the slot time into any of three places:
/// `slotTime`, an embedded `slot.display`, or `appointmentTime`. Rather than
/// chasing that fallback chain at every read site, it is collapsed once in
/// [`Appointment::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppointment {
    pub id: Uuid,
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub slot_time: Option<String>,
    #[serde(default)]
    pub slot: Option<SlotDescriptor>,
    pub appointment_mode: AppointmentMode,
    pub consultation_type: ConsultationType,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Embedded slot descriptor some store records carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotDescriptor {
    pub display: String,
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

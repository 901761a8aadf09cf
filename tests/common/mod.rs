use chrono::NaiveTime;
use slotwise::{Appointment, AppointmentMode, ConsultationType};
use uuid::Uuid;

/// Builds a normalized appointment for the given date and optional `HH:mm`
/// time, with placeholder contact details.
pub fn appointment(date: &str, time: Option<&str>) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        date: date.to_string(),
        time: time.map(|t| NaiveTime::parse_from_str(t, "%H:%M").expect("valid test time")),
        mode: AppointmentMode::Online,
        consultation_type: ConsultationType::General,
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "555-0101".to_string(),
        slot_label: time.map(str::to_string),
    }
}

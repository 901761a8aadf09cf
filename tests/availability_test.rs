mod common;

use common::appointment;
use pretty_assertions::assert_eq;
use slotwise::{Availability, AvailabilityResolver, Slot, SlotCatalog};

fn resolver() -> AvailabilityResolver {
    AvailabilityResolver::new(SlotCatalog::from_times(&["09:00", "10:00", "11:00"]).unwrap())
}

fn hhmm(slots: &[Slot]) -> Vec<String> {
    slots.iter().map(Slot::hhmm).collect()
}

#[test]
fn test_booked_slot_is_subtracted_from_catalog() {
    let resolver = resolver();
    let appointments = vec![appointment("2024-06-01", Some("10:00"))];

    let booked = resolver.booked_slots("2024-06-01", &appointments);
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].hhmm(), Some("10:00".to_string()));

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);
    assert_eq!(hhmm(&available), vec!["09:00", "11:00"]);
}

#[test]
fn test_leave_day_has_zero_availability_regardless_of_bookings() {
    let resolver = resolver();
    let leave_days = vec!["2024-06-01".to_string()];

    assert!(
        resolver
            .available_slots("2024-06-01", &[], &leave_days)
            .is_empty()
    );

    let appointments = vec![appointment("2024-06-01", Some("10:00"))];
    assert!(
        resolver
            .available_slots("2024-06-01", &appointments, &leave_days)
            .is_empty()
    );
}

#[test]
fn test_availability_is_subset_of_catalog_in_catalog_order() {
    let resolver = AvailabilityResolver::default();
    let appointments = vec![
        appointment("2024-06-01", Some("11:00")),
        appointment("2024-06-01", Some("15:00")),
    ];

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);

    let catalog = resolver.catalog().canonical_slots();
    let mut catalog_iter = catalog.iter();
    for slot in &available {
        // Each available slot appears in the catalog, later than the
        // previous one, so order is preserved.
        assert!(catalog_iter.any(|c| c == slot));
    }
    assert!(available.len() <= catalog.len());
}

#[test]
fn test_availability_equals_catalog_minus_occupied() {
    let resolver = resolver();
    let appointments = vec![
        appointment("2024-06-01", Some("09:00")),
        appointment("2024-06-01", Some("11:00")),
        appointment("2024-06-02", Some("10:00")), // other date, must not occupy
    ];

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);

    assert_eq!(hhmm(&available), vec!["10:00"]);
}

#[test]
fn test_fully_booked_day_has_no_availability() {
    let resolver = resolver();
    let appointments = vec![
        appointment("2024-06-01", Some("09:00")),
        appointment("2024-06-01", Some("10:00")),
        appointment("2024-06-01", Some("11:00")),
    ];

    assert!(
        resolver
            .available_slots("2024-06-01", &appointments, &[])
            .is_empty()
    );
}

#[test]
fn test_missing_time_occupies_no_slot_but_stays_in_booked_list() {
    let resolver = resolver();
    let appointments = vec![appointment("2024-06-01", None)];

    let booked = resolver.booked_slots("2024-06-01", &appointments);
    assert_eq!(booked.len(), 1);

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);
    assert_eq!(hhmm(&available), vec!["09:00", "10:00", "11:00"]);
}

#[test]
fn test_off_catalog_time_occupies_nothing_from_the_catalog() {
    let resolver = resolver();
    let appointments = vec![appointment("2024-06-01", Some("09:30"))];

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);

    assert_eq!(hhmm(&available), vec!["09:00", "10:00", "11:00"]);
}

#[test]
fn test_double_booked_slot_is_reported_occupied_once() {
    let resolver = resolver();
    let appointments = vec![
        appointment("2024-06-01", Some("10:00")),
        appointment("2024-06-01", Some("10:00")),
    ];

    let booked = resolver.booked_slots("2024-06-01", &appointments);
    assert_eq!(booked.len(), 2);

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);
    assert_eq!(hhmm(&available), vec!["09:00", "11:00"]);
}

#[test]
fn test_unparsable_appointment_never_affects_availability() {
    let resolver = resolver();
    let appointments = vec![appointment("not-a-date", Some("10:00"))];

    let available = resolver.available_slots("2024-06-01", &appointments, &[]);

    assert_eq!(hhmm(&available), vec!["09:00", "10:00", "11:00"]);
}

#[test]
fn test_identical_inputs_yield_identical_output() {
    let resolver = resolver();
    let appointments = vec![
        appointment("2024-06-01", Some("11:00")),
        appointment("2024-06-01", Some("09:00")),
    ];
    let leave_days = vec!["2024-07-01".to_string()];

    let first = resolver.resolve("2024-06-01", &appointments, &leave_days);
    let second = resolver.resolve("2024-06-01", &appointments, &leave_days);

    assert_eq!(first, second);
}

#[test]
fn test_resolve_reports_blocked_on_leave_day() {
    let resolver = resolver();
    let leave_days = vec!["2024-06-01".to_string()];

    let result = resolver.resolve("2024-06-01", &[], &leave_days);

    assert_eq!(result, Availability::Blocked);
}

#[test]
fn test_resolve_reports_open_pair_on_working_day() {
    let resolver = resolver();
    let appointments = vec![appointment("2024-06-01", Some("10:00"))];

    let result = resolver.resolve("2024-06-01", &appointments, &[]);

    match result {
        Availability::Open { available, booked } => {
            assert_eq!(hhmm(&available), vec!["09:00", "11:00"]);
            assert_eq!(booked.len(), 1);
        }
        Availability::Blocked => panic!("working day must not be blocked"),
    }
}

#[test]
fn test_is_leave_day_delegation_fails_closed() {
    let resolver = resolver();
    let leave_days = vec!["2024-06-01".to_string()];

    assert!(resolver.is_leave_day("2024-06-01", &leave_days));
    assert!(!resolver.is_leave_day("not-a-date", &leave_days));
}

//! Library-level tests for the booking service

use std::sync::Arc;
use std::thread;

use chrono::{Duration, NaiveDate};
use fbd::core::seed::{build_bookings, SeedBooking};
use fbd::core::{
    BookingChange, BookingClass, BookingError, BookingIdentity, BookingService, BookingStatus,
    BookingStore, FixedClock, PolicyConfig,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
}

fn seed(number: &str, first: &str, last: &str, days_out: i64) -> SeedBooking {
    SeedBooking {
        booking_number: number.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date: today() + Duration::days(days_out),
        departure: "LAX".to_string(),
        arrival: "JFK".to_string(),
        booking_class: BookingClass::Economy,
        status: BookingStatus::Confirmed,
    }
}

fn service(seeds: Vec<SeedBooking>) -> BookingService {
    let store = BookingStore::with_bookings(build_bookings(seeds).unwrap());
    BookingService::with_policy(Arc::new(store), PolicyConfig::default(), FixedClock(today()))
}

fn john() -> BookingIdentity {
    BookingIdentity::new("BK101", "John", "Doe")
}

#[test]
fn test_change_then_cancel_scenario() {
    let svc = service(vec![seed("BK101", "John", "Doe", 5)]);

    let changed = svc
        .change_booking(
            &john(),
            &BookingChange::new(today() + Duration::days(10), "sfo", "bos"),
        )
        .unwrap();
    assert_eq!(changed.date, today() + Duration::days(10));
    assert_eq!(changed.departure, "SFO");
    assert_eq!(changed.arrival, "BOS");
    assert_eq!(changed.status, BookingStatus::Confirmed);

    let cancelled = svc.cancel_booking(&john()).unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.date, today() + Duration::days(10));

    let again = svc.cancel_booking(&john()).unwrap_err();
    assert_eq!(
        again,
        BookingError::PolicyViolation("Booking has already been cancelled.".to_string())
    );
    assert_eq!(again.status_code(), 400);
}

#[test]
fn test_views_are_detached_from_store() {
    let svc = service(vec![seed("BK101", "John", "Doe", 5)]);

    let mut view = svc.get_booking_details(&john()).unwrap();
    view.departure = "XXX".to_string();
    view.status = BookingStatus::Cancelled;

    let fresh = svc.get_booking_details(&john()).unwrap();
    assert_eq!(fresh.departure, "LAX");
    assert_eq!(fresh.status, BookingStatus::Confirmed);
    assert_eq!(svc.get_all_bookings().unwrap(), svc.get_all_bookings().unwrap());
}

#[test]
fn test_concurrent_cancels_exactly_one_wins() {
    let svc = Arc::new(service(vec![seed("BK101", "John", "Doe", 5)]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.cancel_booking(&john()))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(
            err,
            &BookingError::PolicyViolation("Booking has already been cancelled.".to_string())
        );
    }
}

#[test]
fn test_concurrent_changes_do_not_lose_updates() {
    let svc = Arc::new(service(vec![
        seed("BK101", "John", "Doe", 5),
        seed("BK102", "Jane", "Smith", 7),
    ]));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                let (identity, target) = if i % 2 == 0 {
                    (john(), "SFO")
                } else {
                    (BookingIdentity::new("BK102", "Jane", "Smith"), "MAD")
                };
                svc.change_booking(
                    &identity,
                    &BookingChange::new(today() + Duration::days(20 + i), target, "ARN"),
                )
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let all = svc.get_all_bookings().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].departure, "SFO");
    assert_eq!(all[1].departure, "MAD");
    assert!(all.iter().all(|b| b.arrival == "ARN"));
}

#[test]
fn test_change_and_cancel_race_leaves_consistent_state() {
    let svc = Arc::new(service(vec![seed("BK101", "John", "Doe", 5)]));

    let canceller = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || svc.cancel_booking(&john()))
    };
    let changer = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            svc.change_booking(
                &john(),
                &BookingChange::new(today() + Duration::days(30), "HEL", "CDG"),
            )
        })
    };
    let cancel = canceller.join().unwrap();
    let change = changer.join().unwrap();
    assert!(cancel.is_ok());

    let stored = svc.get_booking_details(&john()).unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);
    match change {
        // Change ran first: the cancellation kept its new itinerary
        Ok(_) => assert_eq!(stored.departure, "HEL"),
        Err(e) => {
            assert_eq!(
                e,
                BookingError::PolicyViolation("Booking has already been cancelled.".to_string())
            );
            assert_eq!(stored.departure, "LAX");
        }
    }
}

#[test]
fn test_not_found_status_code() {
    let svc = service(vec![seed("BK101", "John", "Doe", 5)]);
    let err = svc
        .get_booking_details(&BookingIdentity::new("BK101", "John", "Smith"))
        .unwrap_err();
    assert_eq!(
        err,
        BookingError::NotFound {
            booking_number: "BK101".to_string()
        }
    );
    assert_eq!(err.status_code(), 404);
}

//! Booking entity type - a single flight reservation

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::entity::{BookingClass, BookingStatus};
use crate::core::identity::AirportCode;
use crate::entities::customer::Customer;

/// A flight booking
///
/// Two bookings are equal iff their booking numbers are equal. The booking
/// number has no setter and cannot change after construction.
#[derive(Debug, Clone)]
pub struct Booking {
    booking_number: String,
    date: NaiveDate,
    customer: Arc<Customer>,
    status: BookingStatus,
    departure: AirportCode,
    arrival: AirportCode,
    booking_class: BookingClass,
}

impl Booking {
    /// Create a new confirmed booking
    pub fn new(
        booking_number: impl Into<String>,
        date: NaiveDate,
        customer: Arc<Customer>,
        departure: AirportCode,
        arrival: AirportCode,
        booking_class: BookingClass,
    ) -> Self {
        Self {
            booking_number: booking_number.into(),
            date,
            customer,
            status: BookingStatus::Confirmed,
            departure,
            arrival,
            booking_class,
        }
    }

    /// Same booking with a different starting status (seed data)
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn booking_number(&self) -> &str {
        &self.booking_number
    }

    /// Flight date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn customer(&self) -> &Arc<Customer> {
        &self.customer
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn departure(&self) -> &AirportCode {
        &self.departure
    }

    pub fn arrival(&self) -> &AirportCode {
        &self.arrival
    }

    pub fn booking_class(&self) -> BookingClass {
        self.booking_class
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Move the flight to a new date and route
    ///
    /// Eligibility is the caller's concern; see `BookingService::change_booking`.
    pub(crate) fn reschedule(
        &mut self,
        date: NaiveDate,
        departure: AirportCode,
        arrival: AirportCode,
    ) {
        self.date = date;
        self.departure = departure;
        self.arrival = arrival;
    }

    /// Mark the booking cancelled
    pub(crate) fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }
}

impl PartialEq for Booking {
    fn eq(&self, other: &Self) -> bool {
        self.booking_number == other.booking_number
    }
}

impl Eq for Booking {}

impl Hash for Booking {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.booking_number.hash(state);
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}->{} {} [{}] {}",
            self.booking_number,
            self.date,
            self.departure,
            self.arrival,
            self.booking_class,
            self.status,
            self.customer.full_name()
        )
    }
}

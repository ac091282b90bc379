//! Caller-facing booking view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::BookingStatus;
use crate::entities::booking::Booking;

/// Snapshot of a booking as returned to callers
///
/// Detached from the store: mutating a view never touches stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO calendar date (`2024-06-01`)
    pub date: NaiveDate,
    pub status: BookingStatus,
    pub departure: String,
    pub arrival: String,
    pub booking_class: String,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        let customer = booking.customer();
        Self {
            booking_number: booking.booking_number().to_string(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            date: booking.date(),
            status: booking.status(),
            departure: booking.departure().to_string(),
            arrival: booking.arrival().to_string(),
            booking_class: booking.booking_class().name().to_string(),
        }
    }
}

//! Booking policy service
//!
//! The only place where status and lead-time rules are enforced. Every
//! mutation runs inside [`BookingStore::update`], so the lookup, the checks and
//! the save happen under a single store lock.

use std::sync::Arc;

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::clock::{Clock, SystemClock};
use crate::core::identity::{AirportCode, AirportCodeError, BookingIdentity};
use crate::core::policy::PolicyConfig;
use crate::core::store::{BookingStore, StoreError};
use crate::entities::{Booking, BookingView};

/// Errors returned by booking operations
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking not found for booking number: {booking_number}")]
    #[diagnostic(
        code(fbd::booking::not_found),
        help("check the booking number and the passenger's first and last name")
    )]
    NotFound { booking_number: String },

    /// A business rule blocked the request; the message is safe to show as-is
    #[error("{0}")]
    #[diagnostic(code(fbd::booking::policy))]
    PolicyViolation(String),

    #[error("An unexpected error occurred")]
    #[diagnostic(code(fbd::internal))]
    Internal(String),
}

impl BookingError {
    fn policy(reason: impl Into<String>) -> Self {
        BookingError::PolicyViolation(reason.into())
    }

    /// HTTP-equivalent status for adapters (404 / 400 / 500)
    pub fn status_code(&self) -> u16 {
        match self {
            BookingError::NotFound { .. } => 404,
            BookingError::PolicyViolation(_) => 400,
            BookingError::Internal(_) => 500,
        }
    }
}

impl From<StoreError> for BookingError {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "booking store failure");
        BookingError::Internal(e.to_string())
    }
}

/// Requested new itinerary for a booking
///
/// Fields are optional so that missing input is reported as a policy
/// violation rather than rejected before reaching the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingChange {
    pub date: Option<NaiveDate>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
}

impl BookingChange {
    pub fn new(date: NaiveDate, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            departure: Some(departure.into()),
            arrival: Some(arrival.into()),
        }
    }
}

/// Read, change and cancel operations over a [`BookingStore`]
pub struct BookingService {
    store: Arc<BookingStore>,
    policy: PolicyConfig,
    clock: Box<dyn Clock>,
}

impl BookingService {
    /// Create a service with the default policy and the system clock
    pub fn new(store: Arc<BookingStore>) -> Self {
        Self::with_policy(store, PolicyConfig::default(), SystemClock)
    }

    pub fn with_policy(
        store: Arc<BookingStore>,
        policy: PolicyConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            store,
            policy,
            clock: Box::new(clock),
        }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Date the lead-time rules are evaluated against
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// All bookings as views, in store order
    pub fn get_all_bookings(&self) -> Result<Vec<BookingView>, BookingError> {
        Ok(self
            .store
            .find_all()?
            .iter()
            .map(BookingView::from)
            .collect())
    }

    /// Look up a single booking
    pub fn get_booking_details(
        &self,
        identity: &BookingIdentity,
    ) -> Result<BookingView, BookingError> {
        self.store
            .find_by_identity(identity)?
            .map(|b| BookingView::from(&b))
            .ok_or_else(|| not_found(identity))
    }

    /// Move a booking to a new date and route
    pub fn change_booking(
        &self,
        identity: &BookingIdentity,
        change: &BookingChange,
    ) -> Result<BookingView, BookingError> {
        let today = self.clock.today();
        let outcome = self.store.update(identity, |booking| -> Result<BookingView, BookingError> {
            ensure_active(booking)?;
            if self.policy.change_blocked(booking.date(), today) {
                return Err(BookingError::policy(format!(
                    "Booking cannot be changed within {} hours of the flight date.",
                    self.policy.change_window_hours()
                )));
            }
            let new_date = self.validate_new_date(change.date, today)?;
            let departure =
                normalize_airport(change.departure.as_deref(), "New departure airport")?;
            let arrival = normalize_airport(change.arrival.as_deref(), "New arrival airport")?;

            booking.reschedule(new_date, departure, arrival);
            Ok(BookingView::from(&*booking))
        })?;

        let view = settle(identity, "change", outcome)?;
        info!(booking = %view.booking_number, date = %view.date, "Booking changed successfully");
        Ok(view)
    }

    /// Cancel a confirmed booking
    pub fn cancel_booking(&self, identity: &BookingIdentity) -> Result<BookingView, BookingError> {
        let today = self.clock.today();
        let outcome = self.store.update(identity, |booking| -> Result<BookingView, BookingError> {
            ensure_active(booking)?;
            if self.policy.cancel_blocked(booking.date(), today) {
                return Err(BookingError::policy(format!(
                    "Booking cannot be cancelled within {} hours of the flight date.",
                    self.policy.cancel_window_hours()
                )));
            }

            booking.cancel();
            Ok(BookingView::from(&*booking))
        })?;

        let view = settle(identity, "cancel", outcome)?;
        info!(booking = %view.booking_number, "Booking cancelled successfully");
        Ok(view)
    }

    fn validate_new_date(
        &self,
        new_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<NaiveDate, BookingError> {
        let Some(date) = new_date else {
            return Err(BookingError::policy("New flight date is required."));
        };
        if self.policy.change_blocked(date, today) {
            return Err(BookingError::policy(format!(
                "New flight date must be at least {} hours in the future.",
                self.policy.change_window_hours()
            )));
        }
        Ok(date)
    }
}

fn not_found(identity: &BookingIdentity) -> BookingError {
    BookingError::NotFound {
        booking_number: identity.booking_number.clone(),
    }
}

fn ensure_active(booking: &Booking) -> Result<(), BookingError> {
    if booking.status().is_terminal() {
        return Err(BookingError::policy("Booking has already been cancelled."));
    }
    Ok(())
}

fn normalize_airport(raw: Option<&str>, field: &str) -> Result<AirportCode, BookingError> {
    let Some(raw) = raw else {
        return Err(BookingError::policy(format!("{} is required.", field)));
    };
    AirportCode::parse(raw).map_err(|e| match e {
        AirportCodeError::Empty => BookingError::policy(format!("{} is required.", field)),
        AirportCodeError::Malformed(_) => {
            BookingError::policy(format!("{} must be a 3-letter uppercase IATA code.", field))
        }
    })
}

/// Turn the store's update outcome into the caller's result
fn settle(
    identity: &BookingIdentity,
    action: &str,
    outcome: Option<Result<BookingView, BookingError>>,
) -> Result<BookingView, BookingError> {
    match outcome {
        None => Err(not_found(identity)),
        Some(Err(e)) => {
            warn!(booking = %identity.booking_number, action, reason = %e, "booking request rejected");
            Err(e)
        }
        Some(Ok(view)) => Ok(view),
    }
}

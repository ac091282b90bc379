//! In-memory booking store
//!
//! Owns the authoritative set of bookings and customers. Bookings keep their
//! insertion order and are indexed by exact booking number for upserts;
//! identity lookups are a case-insensitive linear scan.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tracing::debug;

use crate::core::identity::BookingIdentity;
use crate::entities::{Booking, Customer};

/// Errors that can occur while accessing the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("booking store lock was poisoned by a panicking writer")]
    Poisoned,
}

#[derive(Debug, Default)]
struct StoreState {
    bookings: Vec<Booking>,
    /// booking number -> position in `bookings`
    index: HashMap<String, usize>,
    customers: Vec<Arc<Customer>>,
}

impl StoreState {
    fn upsert(&mut self, booking: Booking) {
        let customer = booking.customer();
        let known = self.customers.iter().any(|c| {
            Arc::ptr_eq(c, customer) || c.has_name(customer.first_name(), customer.last_name())
        });
        if !known {
            self.customers.push(Arc::clone(customer));
        }

        match self.index.get(booking.booking_number()) {
            Some(&pos) => {
                debug!(booking = booking.booking_number(), "replacing booking");
                self.bookings[pos] = booking;
            }
            None => {
                debug!(booking = booking.booking_number(), "inserting booking");
                self.index
                    .insert(booking.booking_number().to_string(), self.bookings.len());
                self.bookings.push(booking);
            }
        }
    }

    fn position_of(&self, identity: &BookingIdentity) -> Option<usize> {
        self.bookings.iter().position(|b| identity.matches(b))
    }
}

/// Thread-safe booking store
#[derive(Debug, Default)]
pub struct BookingStore {
    state: Mutex<StoreState>,
}

impl BookingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given bookings, upserting in order
    pub fn with_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let mut state = StoreState::default();
        for booking in bookings {
            state.upsert(booking);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Copy of every booking in insertion order
    pub fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.lock()?.bookings.clone())
    }

    /// Find the booking matching number, first name and last name
    pub fn find_by_identity(
        &self,
        identity: &BookingIdentity,
    ) -> Result<Option<Booking>, StoreError> {
        let state = self.lock()?;
        Ok(state
            .position_of(identity)
            .map(|pos| state.bookings[pos].clone()))
    }

    /// Insert or replace a booking by booking number
    pub fn save(&self, booking: Booking) -> Result<Booking, StoreError> {
        let mut state = self.lock()?;
        state.upsert(booking.clone());
        Ok(booking)
    }

    /// Look up a booking and apply `f` to a working copy under one lock
    ///
    /// The copy is saved only when `f` returns `Ok`, so a rejected update
    /// leaves the stored booking untouched. Returns `Ok(None)` when nothing
    /// matches `identity`.
    pub fn update<T, E, F>(
        &self,
        identity: &BookingIdentity,
        f: F,
    ) -> Result<Option<Result<T, E>>, StoreError>
    where
        F: FnOnce(&mut Booking) -> Result<T, E>,
    {
        let mut state = self.lock()?;
        let Some(pos) = state.position_of(identity) else {
            return Ok(None);
        };

        let mut working = state.bookings[pos].clone();
        let outcome = f(&mut working);
        if outcome.is_ok() {
            state.upsert(working);
        }
        Ok(Some(outcome))
    }

    /// Number of stored bookings
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.bookings.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.bookings.is_empty())
    }

    /// Customers known to the store, in first-seen order
    pub fn customers(&self) -> Result<Vec<Arc<Customer>>, StoreError> {
        Ok(self.lock()?.customers.clone())
    }
}

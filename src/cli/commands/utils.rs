//! Shared utilities for CLI commands

use std::sync::Arc;

use miette::Result;
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::seed::{demo_bookings, load_data_file};
use crate::core::{BookingService, BookingStore, Config};

/// Build a booking service from the global options and layered config
///
/// `--data` wins over the config's `data` key; with neither, the store is
/// seeded with demo bookings relative to the effective date.
pub fn open_service(global: &GlobalOpts) -> Result<BookingService> {
    let config = Config::load();
    let today = global.today.unwrap_or_else(|| SystemClock.today());

    let bookings = match global.data.as_ref().or(config.data.as_ref()) {
        Some(path) => load_data_file(path)?,
        None => demo_bookings(today)?,
    };
    debug!(count = bookings.len(), %today, "seeded booking store");

    let store = Arc::new(BookingStore::with_bookings(bookings));
    let service = match global.today {
        Some(date) => BookingService::with_policy(store, config.policy, FixedClock(date)),
        None => BookingService::with_policy(store, config.policy, SystemClock),
    };
    Ok(service)
}

//! Lead-time policy for booking changes and cancellations
//!
//! All comparisons are by calendar date. A flight is "inside the window" when
//! its date is strictly before `today + lead_days`, so a flight exactly
//! `lead_days` away is still eligible. A window that ends past the last
//! representable date blocks every flight.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Minimum days of notice required before a flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Days before the flight after which changes are refused (default: 1)
    pub change_lead_days: u32,

    /// Days before the flight after which cancellations are refused (default: 2)
    pub cancel_lead_days: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            change_lead_days: 1,
            cancel_lead_days: 2,
        }
    }
}

impl PolicyConfig {
    /// Whether `date` is too close to `today` to change
    pub fn change_blocked(&self, date: NaiveDate, today: NaiveDate) -> bool {
        within_lead_time(date, today, self.change_lead_days)
    }

    /// Whether `date` is too close to `today` to cancel
    pub fn cancel_blocked(&self, date: NaiveDate, today: NaiveDate) -> bool {
        within_lead_time(date, today, self.cancel_lead_days)
    }

    /// Change window expressed in hours, for messages
    pub fn change_window_hours(&self) -> u64 {
        u64::from(self.change_lead_days) * 24
    }

    /// Cancellation window expressed in hours, for messages
    pub fn cancel_window_hours(&self) -> u64 {
        u64::from(self.cancel_lead_days) * 24
    }
}

/// `date < today + lead_days`
pub fn within_lead_time(date: NaiveDate, today: NaiveDate, lead_days: u32) -> bool {
    match today.checked_add_days(Days::new(u64::from(lead_days))) {
        Some(window_end) => date < window_end,
        None => true,
    }
}

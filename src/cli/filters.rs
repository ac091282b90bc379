//! Filter enums for list commands

use clap::ValueEnum;

use crate::core::entity::{BookingClass, BookingStatus};

/// Status filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Confirmed bookings only
    Confirmed,
    /// Cancelled bookings only
    Cancelled,
    /// All bookings - default
    #[default]
    All,
}

impl StatusFilter {
    /// Check if a status matches this filter
    pub fn matches(&self, status: &BookingStatus) -> bool {
        match self {
            StatusFilter::Confirmed => *status == BookingStatus::Confirmed,
            StatusFilter::Cancelled => *status == BookingStatus::Cancelled,
            StatusFilter::All => true,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::Confirmed => write!(f, "confirmed"),
            StatusFilter::Cancelled => write!(f, "cancelled"),
            StatusFilter::All => write!(f, "all"),
        }
    }
}

/// Fare class filter for list commands
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ClassFilter {
    Economy,
    PremiumEconomy,
    Business,
    /// All fare classes - default
    #[default]
    All,
}

impl ClassFilter {
    /// Check if a fare class matches this filter
    pub fn matches(&self, class: &BookingClass) -> bool {
        match self {
            ClassFilter::Economy => *class == BookingClass::Economy,
            ClassFilter::PremiumEconomy => *class == BookingClass::PremiumEconomy,
            ClassFilter::Business => *class == BookingClass::Business,
            ClassFilter::All => true,
        }
    }

    /// Check a wire name (`PREMIUM_ECONOMY`) against this filter
    pub fn matches_str(&self, class: &str) -> bool {
        match class.parse::<BookingClass>() {
            Ok(c) => self.matches(&c),
            Err(_) => *self == ClassFilter::All,
        }
    }
}

impl std::fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassFilter::Economy => write!(f, "economy"),
            ClassFilter::PremiumEconomy => write!(f, "premium-economy"),
            ClassFilter::Business => write!(f, "business"),
            ClassFilter::All => write!(f, "all"),
        }
    }
}

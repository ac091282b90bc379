//! Booking status and fare class enums shared across the crate

use std::str::FromStr;

use thiserror::Error;

/// Lifecycle status of a booking
///
/// The only legal transition is `Confirmed -> Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Default)]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Wire name (`CONFIRMED` / `CANCELLED`)
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" | "CANCELED" => Ok(BookingStatus::Cancelled),
            _ => Err(ParseEnumError {
                kind: "booking status",
                value: s.to_string(),
            }),
        }
    }
}

/// Fare class of a booking
///
/// Each class carries a fixed change fee and cancellation fee. The fees are
/// descriptive only: nothing in this crate charges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Default)]
pub enum BookingClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
}

impl BookingClass {
    /// Every fare class, cheapest first
    pub fn all() -> &'static [BookingClass] {
        &[
            BookingClass::Economy,
            BookingClass::PremiumEconomy,
            BookingClass::Business,
        ]
    }

    /// Fee for changing a booking in this class
    pub fn change_fee(&self) -> u32 {
        match self {
            BookingClass::Economy => 50,
            BookingClass::PremiumEconomy => 30,
            BookingClass::Business => 0,
        }
    }

    /// Fee for cancelling a booking in this class
    pub fn cancellation_fee(&self) -> u32 {
        match self {
            BookingClass::Economy => 75,
            BookingClass::PremiumEconomy => 50,
            BookingClass::Business => 25,
        }
    }

    /// Name as rendered in booking views
    pub fn name(&self) -> &'static str {
        match self {
            BookingClass::Economy => "ECONOMY",
            BookingClass::PremiumEconomy => "PREMIUM_ECONOMY",
            BookingClass::Business => "BUSINESS",
        }
    }
}

impl std::fmt::Display for BookingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BookingClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "ECONOMY" => Ok(BookingClass::Economy),
            "PREMIUM_ECONOMY" => Ok(BookingClass::PremiumEconomy),
            "BUSINESS" => Ok(BookingClass::Business),
            _ => Err(ParseEnumError {
                kind: "booking class",
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a status or class name is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

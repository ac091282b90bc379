//! Identity types - the booking lookup key and normalized airport codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Booking;

/// Errors that can occur when normalizing an airport code
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AirportCodeError {
    #[error("airport code is empty")]
    Empty,

    #[error("'{0}' is not a 3-letter IATA code")]
    Malformed(String),
}

/// A 3-letter IATA airport code
///
/// Can only be built through [`AirportCode::parse`], which trims and
/// uppercases the input, so every stored value is already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Normalize and validate a raw airport code
    pub fn parse(raw: &str) -> Result<Self, AirportCodeError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(AirportCodeError::Empty);
        }
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AirportCodeError::Malformed(raw.trim().to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AirportCode {
    type Err = AirportCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AirportCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// The tuple a caller must present to reach a booking
///
/// All three parts are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingIdentity {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl BookingIdentity {
    pub fn new(
        booking_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            booking_number: booking_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Check whether a booking matches on number, first name and last name
    pub fn matches(&self, booking: &Booking) -> bool {
        let customer = booking.customer();
        eq_ignore_case(booking.booking_number(), &self.booking_number)
            && eq_ignore_case(customer.first_name(), &self.first_name)
            && eq_ignore_case(customer.last_name(), &self.last_name)
    }
}

impl fmt::Display for BookingIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.booking_number, self.first_name, self.last_name
        )
    }
}

/// Unicode-aware case-insensitive comparison for personal names
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::BookingClass;
    use crate::entities::Customer;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn booking() -> Booking {
        Booking::new(
            "BK101",
            NaiveDate::from_ymd_opt(2030, 1, 6).unwrap(),
            Arc::new(Customer::new("John", "Doe")),
            AirportCode::parse("LAX").unwrap(),
            AirportCode::parse("JFK").unwrap(),
            BookingClass::Economy,
        )
    }

    #[test]
    fn test_airport_code_is_trimmed_and_uppercased() {
        assert_eq!(AirportCode::parse(" sfo ").unwrap().as_str(), "SFO");
        assert_eq!(AirportCode::parse("Bos").unwrap().to_string(), "BOS");
    }

    #[test]
    fn test_airport_code_rejects_bad_input() {
        assert!(matches!(
            AirportCode::parse("SF"),
            Err(AirportCodeError::Malformed(_))
        ));
        assert!(AirportCode::parse("12A").is_err());
        assert!(AirportCode::parse("LAXX").is_err());
        assert!(AirportCode::parse("ÅRN").is_err());
        assert_eq!(AirportCode::parse("   "), Err(AirportCodeError::Empty));
    }

    #[test]
    fn test_airport_code_deserialize_normalizes() {
        let code: AirportCode = serde_yml::from_str("\" muc\"").unwrap();
        assert_eq!(code.as_str(), "MUC");
        assert!(serde_yml::from_str::<AirportCode>("M1C").is_err());
    }

    #[test]
    fn test_identity_matching_ignores_case() {
        let booking = booking();
        assert!(BookingIdentity::new("bk101", "JOHN", "doe").matches(&booking));
        assert!(!BookingIdentity::new("BK101", "Jane", "Doe").matches(&booking));
        assert!(!BookingIdentity::new("BK102", "John", "Doe").matches(&booking));
    }
}

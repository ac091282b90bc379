//! Customer entity - the passenger a booking belongs to

use crate::core::identity::eq_ignore_case;

/// A customer holding one or more bookings
///
/// `bookings` lists the booking numbers seeded for this customer. It is kept
/// for display only; the store never consults it when enforcing identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    first_name: String,
    last_name: String,
    bookings: Vec<String>,
}

impl Customer {
    /// Create a customer with no bookings
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            bookings: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Booking numbers recorded against this customer
    pub fn bookings(&self) -> &[String] {
        &self.bookings
    }

    /// Record a booking number, ignoring duplicates
    pub fn add_booking(&mut self, booking_number: impl Into<String>) {
        let booking_number = booking_number.into();
        if !self.bookings.contains(&booking_number) {
            self.bookings.push(booking_number);
        }
    }

    /// Get display name ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this customer has the given name (case-insensitive)
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        eq_ignore_case(&self.first_name, first_name) && eq_ignore_case(&self.last_name, last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("Jane", "Smith");
        assert_eq!(customer.first_name(), "Jane");
        assert_eq!(customer.last_name(), "Smith");
        assert_eq!(customer.full_name(), "Jane Smith");
        assert!(customer.bookings().is_empty());
    }

    #[test]
    fn test_add_booking_skips_duplicates() {
        let mut customer = Customer::new("Jane", "Smith");
        customer.add_booking("BK102");
        customer.add_booking("BK102");
        customer.add_booking("BK106");
        assert_eq!(customer.bookings(), ["BK102", "BK106"]);
    }

    #[test]
    fn test_has_name_ignores_case() {
        let customer = Customer::new("Jane", "Smith");
        assert!(customer.has_name("JANE", "smith"));
        assert!(!customer.has_name("Jane", "Smyth"));
    }
}

//! Entity type definitions

pub mod booking;
pub mod customer;
pub mod view;

pub use booking::Booking;
pub use customer::Customer;
pub use view::BookingView;

//! Core module - booking rules, storage and supporting types

pub mod clock;
pub mod config;
pub mod entity;
pub mod identity;
pub mod policy;
pub mod seed;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use entity::{BookingClass, BookingStatus, ParseEnumError};
pub use identity::{AirportCode, AirportCodeError, BookingIdentity};
pub use policy::PolicyConfig;
pub use seed::{build_bookings, demo_bookings, load_data_file, DataFile, SeedBooking, SeedError};
pub use service::{BookingChange, BookingError, BookingService};
pub use store::{BookingStore, StoreError};

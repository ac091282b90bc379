//! FBD: Flight Booking Desk
//!
//! An in-memory flight booking store with a policy service that decides
//! whether a booking may be changed or cancelled, plus a CLI over it.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;

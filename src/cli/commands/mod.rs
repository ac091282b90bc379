//! CLI command implementations

pub mod booking;
pub mod completions;
pub mod fees;
pub mod shell;
pub mod utils;

//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Date every fixture is written against
pub const TODAY: &str = "2030-01-01";

/// Four bookings around `TODAY`:
/// - BK101 five days out, confirmed
/// - BK102 one day out (changeable, inside the cancel window)
/// - BK103 two days out (changeable, cancellable)
/// - BK104 already cancelled
pub const FIXTURE: &str = r#"bookings:
  - booking_number: BK101
    first_name: John
    last_name: Doe
    date: 2030-01-06
    departure: LAX
    arrival: JFK
  - booking_number: BK102
    first_name: Jane
    last_name: Smith
    date: 2030-01-02
    departure: SFO
    arrival: LHR
    booking_class: BUSINESS
  - booking_number: BK103
    first_name: Michael
    last_name: Johnson
    date: 2030-01-03
    departure: cdg
    arrival: hel
    booking_class: PREMIUM_ECONOMY
  - booking_number: BK104
    first_name: Sarah
    last_name: Williams
    date: 2030-01-20
    departure: MUC
    arrival: FRA
    status: CANCELLED
"#;

/// Helper to get an fbd command isolated from the caller's environment
pub fn fbd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("fbd"));
    cmd.env_remove("FBD_DATA")
        .env_remove("FBD_TODAY")
        .env_remove("FBD_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a data file into the temp directory and return its path
pub fn write_data_file(tmp: &TempDir, content: &str) -> PathBuf {
    let path = tmp.path().join("bookings.yaml");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create a temp directory holding the standard fixture
pub fn setup_fixture() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = write_data_file(&tmp, FIXTURE);
    (tmp, path)
}

/// An fbd command pinned to `TODAY` and seeded from `data`
pub fn fbd_with(tmp: &TempDir, data: &PathBuf) -> Command {
    let mut cmd = fbd();
    cmd.current_dir(tmp.path())
        .arg("--today")
        .arg(TODAY)
        .arg("--data")
        .arg(data);
    cmd
}

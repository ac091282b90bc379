//! Store seeding - demo data and YAML data files
//!
//! Seeds are flat records; bookings whose passenger names match
//! case-insensitively share one [`Customer`].

use std::path::Path;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use miette::Diagnostic;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::entity::{BookingClass, BookingStatus};
use crate::core::identity::{AirportCode, AirportCodeError};
use crate::entities::{Booking, Customer};
use crate::yaml::{parse_yaml_file, YamlError};

const DEMO_FIRST_NAMES: [&str; 5] = ["John", "Jane", "Michael", "Sarah", "Robert"];
const DEMO_LAST_NAMES: [&str; 5] = ["Doe", "Smith", "Johnson", "Williams", "Taylor"];
const DEMO_AIRPORTS: [&str; 12] = [
    "LAX", "SFO", "JFK", "LHR", "CDG", "ARN", "HEL", "TXL", "MUC", "FRA", "MAD", "SJC",
];

/// Errors that can occur while building seed bookings
#[derive(Debug, Error, Diagnostic)]
pub enum SeedError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Seed entry #{position} has no booking number")]
    #[diagnostic(code(fbd::data::booking_number))]
    MissingBookingNumber { position: usize },

    #[error("Booking {booking_number}: invalid {field} airport")]
    #[diagnostic(
        code(fbd::data::airport),
        help("airport codes are 3-letter IATA codes such as LAX or JFK")
    )]
    InvalidAirport {
        booking_number: String,
        field: &'static str,
        #[source]
        source: AirportCodeError,
    },

    #[error("Demo booking {booking_number} would fall past the last supported date")]
    #[diagnostic(
        code(fbd::data::date_range),
        help("pass an earlier --today or load bookings with --data")
    )]
    DateOutOfRange { booking_number: String },
}

/// Top-level shape of a data file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataFile {
    #[serde(default)]
    pub bookings: Vec<SeedBooking>,
}

/// One booking as written in a data file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedBooking {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub departure: String,
    pub arrival: String,

    #[serde(default)]
    pub booking_class: BookingClass,

    #[serde(default)]
    pub status: BookingStatus,
}

/// Turn seed records into bookings, sharing customers by name
pub fn build_bookings(seeds: Vec<SeedBooking>) -> Result<Vec<Booking>, SeedError> {
    let mut customers: Vec<Customer> = Vec::new();
    let mut owners: Vec<usize> = Vec::with_capacity(seeds.len());

    for (i, seed) in seeds.iter().enumerate() {
        if seed.booking_number.trim().is_empty() {
            return Err(SeedError::MissingBookingNumber { position: i + 1 });
        }
        let owner = match customers
            .iter()
            .position(|c| c.has_name(&seed.first_name, &seed.last_name))
        {
            Some(pos) => pos,
            None => {
                customers.push(Customer::new(&seed.first_name, &seed.last_name));
                customers.len() - 1
            }
        };
        customers[owner].add_booking(seed.booking_number.trim());
        owners.push(owner);
    }

    let customers: Vec<Arc<Customer>> = customers.into_iter().map(Arc::new).collect();

    seeds
        .into_iter()
        .zip(owners)
        .map(|(seed, owner)| {
            let booking_number = seed.booking_number.trim().to_string();
            let departure = airport(&seed.departure, &booking_number, "departure")?;
            let arrival = airport(&seed.arrival, &booking_number, "arrival")?;
            Ok(Booking::new(
                booking_number,
                seed.date,
                Arc::clone(&customers[owner]),
                departure,
                arrival,
                seed.booking_class,
            )
            .with_status(seed.status))
        })
        .collect()
}

fn airport(raw: &str, booking_number: &str, field: &'static str) -> Result<AirportCode, SeedError> {
    AirportCode::parse(raw).map_err(|source| SeedError::InvalidAirport {
        booking_number: booking_number.to_string(),
        field,
        source,
    })
}

/// Load bookings from a YAML data file
pub fn load_data_file(path: &Path) -> Result<Vec<Booking>, SeedError> {
    let data: DataFile = parse_yaml_file(path)?;
    debug!(path = %path.display(), count = data.bookings.len(), "loaded data file");
    build_bookings(data.bookings)
}

/// Demo seed records: BK101..BK105, one per demo customer
///
/// Booking `i` flies `2i + 1` days after `today` between two distinct
/// randomly chosen airports in a random fare class.
pub fn demo_seeds<R: Rng + ?Sized>(
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<SeedBooking>, SeedError> {
    DEMO_FIRST_NAMES
        .iter()
        .zip(DEMO_LAST_NAMES.iter())
        .enumerate()
        .map(|(i, (first, last))| -> Result<SeedBooking, SeedError> {
            let departure = DEMO_AIRPORTS.choose(rng).copied().unwrap_or("LAX");
            let arrival = loop {
                let candidate = DEMO_AIRPORTS.choose(rng).copied().unwrap_or("JFK");
                if candidate != departure {
                    break candidate;
                }
            };
            let classes = BookingClass::all();
            let booking_class = classes[rng.random_range(0..classes.len())];

            let booking_number = format!("BK10{}", i + 1);
            let date = today
                .checked_add_days(Days::new(2 * i as u64 + 1))
                .ok_or_else(|| SeedError::DateOutOfRange {
                    booking_number: booking_number.clone(),
                })?;

            Ok(SeedBooking {
                booking_number,
                first_name: first.to_string(),
                last_name: last.to_string(),
                date,
                departure: departure.to_string(),
                arrival: arrival.to_string(),
                booking_class,
                status: BookingStatus::Confirmed,
            })
        })
        .collect()
}

/// Demo bookings relative to `today`, using the thread-local RNG
pub fn demo_bookings(today: NaiveDate) -> Result<Vec<Booking>, SeedError> {
    build_bookings(demo_seeds(today, &mut rand::rng())?)
}

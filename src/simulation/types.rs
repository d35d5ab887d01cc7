//! Core types for the mail robot simulation

use std::borrow::Borrow;
use std::fmt;

/// Name of the hub every randomized run starts from
pub const POST_OFFICE: &str = "Post Office";

/// Separator between the two endpoints of a road specification
pub const ROAD_SEPARATOR: char = '-';

/// Number of parcels generated when the caller does not ask for a specific count
pub const DEFAULT_PARCEL_COUNT: usize = 5;

/// Upper bound on redraws when picking a pickup place distinct from the address
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Roads of Meadowfield village
pub const MEADOWFIELD_ROADS: [&str; 14] = [
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// A named place in the road network
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A parcel waiting for pickup or riding along with the robot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parcel {
    /// Where the parcel currently sits
    pub place: Location,
    /// Where the parcel must be dropped off
    pub address: Location,
}

impl Parcel {
    pub fn new(place: impl Into<Location>, address: impl Into<Location>) -> Self {
        Self {
            place: place.into(),
            address: address.into(),
        }
    }

    /// A parcel sitting at its own address has been delivered
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.place, self.address)
    }
}

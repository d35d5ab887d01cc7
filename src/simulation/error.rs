//! Simulation error type.

use thiserror::Error;

use super::types::Location;

/// Configuration errors raised while building a network or an initial state.
///
/// Moving to an unreachable destination is not an error; see
/// [`WorldState::move_to`](super::WorldState::move_to).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("malformed road {road:?}: expected two non-empty places separated by '-'")]
    MalformedRoad { road: String },

    #[error("location {0} not found in road network")]
    UnknownLocation(Location),

    #[error("road network has {count} location(s); at least 2 are needed to place parcels")]
    TooFewLocations { count: usize },

    #[error("gave up placing parcel for {address} after {attempts} attempts")]
    PlacementExhausted { address: Location, attempts: usize },
}

pub type SimResult<T> = Result<T, SimError>;

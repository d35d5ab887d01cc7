//! Randomized initial states for the mail robot simulation
//!
//! The random source is always supplied by the caller, so a seeded
//! `StdRng` reproduces the same parcels on every run.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::error::{SimError, SimResult};
use super::road_network::RoadNetwork;
use super::types::{Location, Parcel, MAX_PLACEMENT_ATTEMPTS, POST_OFFICE};
use super::world::WorldState;

/// Generates a state at `start` carrying `parcel_count` fresh parcels
///
/// Addresses and pickup places are drawn uniformly from every location in the
/// network. The pickup place is redrawn until it differs from the address, up
/// to [`MAX_PLACEMENT_ATTEMPTS`] times.
pub fn random_initial_state<R>(
    parcel_count: usize,
    start: &Location,
    network: &RoadNetwork,
    rng: &mut R,
) -> SimResult<WorldState>
where
    R: Rng + ?Sized,
{
    if !network.contains(start) {
        return Err(SimError::UnknownLocation(start.clone()));
    }

    let locations = network.locations();
    if parcel_count > 0 && locations.len() < 2 {
        return Err(SimError::TooFewLocations {
            count: locations.len(),
        });
    }

    let mut parcels = Vec::with_capacity(parcel_count);
    for _ in 0..parcel_count {
        let address = pick(locations, rng)?;
        let place = pick_distinct(locations, &address, rng)?;
        parcels.push(Parcel { place, address });
    }

    debug!("Generated {} parcel(s) starting from {}", parcels.len(), start);
    Ok(WorldState::new(start.clone(), parcels))
}

fn pick<R: Rng + ?Sized>(locations: &[Location], rng: &mut R) -> SimResult<Location> {
    locations
        .choose(rng)
        .cloned()
        .ok_or(SimError::TooFewLocations { count: 0 })
}

fn pick_distinct<R: Rng + ?Sized>(
    locations: &[Location],
    address: &Location,
    rng: &mut R,
) -> SimResult<Location> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let place = pick(locations, rng)?;
        if place != *address {
            return Ok(place);
        }
    }

    Err(SimError::PlacementExhausted {
        address: address.clone(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

impl WorldState {
    /// A randomized state starting at the post office
    pub fn random<R>(parcel_count: usize, network: &RoadNetwork, rng: &mut R) -> SimResult<Self>
    where
        R: Rng + ?Sized,
    {
        random_initial_state(parcel_count, &Location::from(POST_OFFICE), network, rng)
    }
}

//! Immutable world snapshots and the transition rule between them

use log::debug;

use super::road_network::RoadNetwork;
use super::types::{Location, Parcel};

/// Snapshot of the robot's location and the parcels still to be delivered
///
/// A `WorldState` never changes once built. [`WorldState::move_to`] returns a
/// new snapshot and leaves `self` untouched, so callers can explore several
/// hypothetical moves from the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    place: Location,
    parcels: Vec<Parcel>,
}

impl WorldState {
    pub fn new(place: impl Into<Location>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels,
        }
    }

    /// Where the robot currently is
    pub fn place(&self) -> &Location {
        &self.place
    }

    /// Parcels not yet delivered, both carried and awaiting pickup
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// All parcels have been delivered
    pub fn is_complete(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels currently sitting at `place`
    pub fn parcels_at<'a>(
        &'a self,
        place: &'a Location,
    ) -> impl Iterator<Item = &'a Parcel> + 'a {
        self.parcels.iter().filter(move |parcel| parcel.place == *place)
    }

    /// Whether a single road leads from the current place to `destination`
    pub fn can_move_to(&self, network: &RoadNetwork, destination: &Location) -> bool {
        network.is_adjacent(&self.place, destination)
    }

    /// Moves the robot along a single road to `destination`
    ///
    /// If no road connects the current place to `destination` the move is a
    /// no-op and an identical snapshot is returned. Otherwise every parcel at
    /// the current place travels with the robot, and those that arrive at
    /// their address are dropped off.
    pub fn move_to(&self, network: &RoadNetwork, destination: &Location) -> WorldState {
        if !self.can_move_to(network, destination) {
            debug!("No road from {} to {}, staying put", self.place, destination);
            return self.clone();
        }

        // Relocate first: only parcels that arrive on this move get delivered.
        let parcels: Vec<Parcel> = self
            .parcels
            .iter()
            .map(|parcel| {
                if parcel.place != self.place {
                    return parcel.clone();
                }
                Parcel {
                    place: destination.clone(),
                    address: parcel.address.clone(),
                }
            })
            .filter(|parcel| !parcel.is_delivered())
            .collect();

        let delivered = self.parcels.len() - parcels.len();
        if delivered > 0 {
            debug!("Delivered {} parcel(s) at {}", delivered, destination);
        }

        WorldState {
            place: destination.clone(),
            parcels,
        }
    }
}

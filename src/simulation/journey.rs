//! Running a sequence of caller-chosen moves
//!
//! A `Journey` only applies destinations it is given; picking the next
//! destination is left to whoever drives it.

use log::{debug, info};

use super::road_network::RoadNetwork;
use super::types::Location;
use super::world::WorldState;

/// Progress of a run from some initial state
#[derive(Debug, Clone)]
pub struct Journey {
    state: WorldState,
    /// Places the robot has stood on, starting with the initial one
    visited: Vec<Location>,
    turns: usize,
    illegal_moves: usize,
}

impl Journey {
    pub fn new(initial: WorldState) -> Self {
        Self {
            visited: vec![initial.place().clone()],
            state: initial,
            turns: 0,
            illegal_moves: 0,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn visited(&self) -> &[Location] {
        &self.visited
    }

    /// Number of moves attempted, legal or not
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn illegal_moves(&self) -> usize {
        self.illegal_moves
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Applies one move and returns whether a road led to `destination`
    pub fn step(&mut self, network: &RoadNetwork, destination: &Location) -> bool {
        self.turns += 1;
        let legal = self.state.can_move_to(network, destination);
        self.state = self.state.move_to(network, destination);

        if !legal {
            self.illegal_moves += 1;
            debug!(
                "Turn {}: no road from {} to {}",
                self.turns,
                self.state.place(),
                destination
            );
            return false;
        }

        self.visited.push(destination.clone());
        debug!(
            "Turn {}: moved to {}, {} parcel(s) left",
            self.turns,
            destination,
            self.state.parcels().len()
        );
        true
    }

    /// Applies destinations in order, stopping early once every parcel is delivered
    pub fn follow<'a, I>(&mut self, network: &RoadNetwork, route: I)
    where
        I: IntoIterator<Item = &'a Location>,
    {
        for destination in route {
            if self.is_complete() {
                break;
            }
            self.step(network, destination);
        }

        if self.is_complete() {
            info!("All parcels delivered after {} turns", self.turns);
        }
    }
}

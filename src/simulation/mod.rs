//! Mail robot simulation model
//!
//! A fixed road network, immutable world snapshots with a pure transition
//! rule, and a randomized generator for initial states.

mod error;
mod factory;
mod journey;
mod road_network;
mod types;
mod world;

pub use error::{SimError, SimResult};
pub use factory::random_initial_state;
pub use journey::Journey;
pub use road_network::RoadNetwork;
pub use types::{
    Location, Parcel, DEFAULT_PARCEL_COUNT, MAX_PLACEMENT_ATTEMPTS, MEADOWFIELD_ROADS,
    POST_OFFICE, ROAD_SEPARATOR,
};
pub use world::WorldState;

//! Road network of the village
//!
//! Built once from a list of "From-To" road specifications and read-only
//! afterwards. Every road is usable in both directions.

use log::debug;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::error::{SimError, SimResult};
use super::types::{Location, MEADOWFIELD_ROADS, ROAD_SEPARATOR};

/// Immutable undirected road graph
///
/// Adjacency lists keep insertion order and keep duplicate roads, so the same
/// edge list always yields the same network.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    /// Places reachable in one step from each location
    adjacency: HashMap<Location, Vec<Location>>,

    /// Every location in order of first appearance in the edge list
    locations: Vec<Location>,

    /// Number of roads as given (duplicates included)
    road_count: usize,

    /// Undirected mirror used for connectivity queries
    graph: UnGraph<Location, ()>,
}

impl RoadNetwork {
    /// Builds the network from road specifications such as `"Alice's House-Cabin"`
    ///
    /// Whitespace around each place name is trimmed, so `"Farm - Shop"` and
    /// `"Farm-Shop"` describe the same road. Fails on the first road that does
    /// not split into exactly two non-empty place names.
    pub fn build<I, S>(roads: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut adjacency: HashMap<Location, Vec<Location>> = HashMap::new();
        let mut locations = Vec::new();
        let mut graph = UnGraph::new_undirected();
        let mut location_to_node: HashMap<Location, NodeIndex> = HashMap::new();
        let mut road_count = 0;

        for road in roads {
            let (from, to) = parse_road(road.as_ref())?;

            for place in [&from, &to] {
                if !location_to_node.contains_key(place) {
                    let node = graph.add_node(place.clone());
                    location_to_node.insert(place.clone(), node);
                    locations.push(place.clone());
                }
            }
            graph.add_edge(location_to_node[&from], location_to_node[&to], ());

            adjacency.entry(from.clone()).or_default().push(to.clone());
            adjacency.entry(to).or_default().push(from);
            road_count += 1;
        }

        debug!(
            "Built road network with {} locations and {} roads",
            locations.len(),
            road_count
        );

        Ok(Self {
            adjacency,
            locations,
            road_count,
            graph,
        })
    }

    /// The standard Meadowfield village
    pub fn meadowfield() -> SimResult<Self> {
        Self::build(MEADOWFIELD_ROADS)
    }

    /// Places directly connected to `place`, or `None` if it is not in the network
    pub fn neighbors(&self, place: &Location) -> Option<&[Location]> {
        self.adjacency.get(place).map(Vec::as_slice)
    }

    /// Whether a road leads directly from `from` to `to`
    pub fn is_adjacent(&self, from: &Location, to: &Location) -> bool {
        self.neighbors(from).is_some_and(|next| next.contains(to))
    }

    pub fn contains(&self, place: &Location) -> bool {
        self.adjacency.contains_key(place)
    }

    /// All known locations, in order of first appearance
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Number of separate groups of locations that cannot reach each other
    pub fn component_count(&self) -> usize {
        connected_components(&self.graph)
    }

    /// True when every location can reach every other one
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }
}

fn parse_road(road: &str) -> SimResult<(Location, Location)> {
    let malformed = || SimError::MalformedRoad {
        road: road.to_owned(),
    };

    let mut parts = road.split(ROAD_SEPARATOR);
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }

    Ok((Location::from(from), Location::from(to)))
}

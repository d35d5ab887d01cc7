//! Mail Robot Simulation Library
//!
//! An immutable-snapshot model of a delivery robot moving parcels around a
//! small village road network.

pub mod simulation;

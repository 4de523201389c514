//! Rail network node generator.
//!
//! Converts a declarative YAML description of rail lines and stations
//! into per-station adjacency lists: for every station, the stations
//! directly reachable by one hop along any line. The resulting node
//! document is consumed by a separate route finder.

pub mod adjacency;
pub mod domain;
pub mod network;
pub mod output;

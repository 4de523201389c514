//! Adjacency derivation from line stop sequences.
//!
//! This module implements the core of the generator: walking every
//! line's ordered stops and recording, for each station, the stations
//! one hop away along any line. The derived map is what a downstream
//! route finder searches over.

mod builder;
mod config;

pub use builder::{AdjacencyMap, BuildError, build_adjacency};
pub use config::BuildConfig;

//! The adjacency builder.
//!
//! Walks each line's stop sequence once and emits, per stop, the
//! backward and forward neighbour edges its position and the line's
//! flow allow. `Linear` and `TwoWay` both yield a bidirectional path;
//! only `Loop` closes the cycle between the last stop and the first.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::{Flow, LineId, StationId, StopToken};
use crate::network::{Line, RailNetwork};

use super::config::BuildConfig;

/// Error produced during an adjacency build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A line's stop names a station the network does not define.
    #[error("line {line} stops at unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// A corner marker reached the builder with corner skipping
    /// disabled.
    #[error(
        "line {line} contains corner marker {marker}; enable corner skipping or remove the marker"
    )]
    CornerMarker { line: LineId, marker: i64 },
}

/// Per-station destination lists derived from a network's lines.
///
/// Every station in the source network has an entry, possibly empty.
/// Destination lists are in traversal order (line id, then stop
/// position, backward neighbour before forward) and may contain
/// duplicates when several lines, or a loop's wraparound, connect the
/// same pair; consumers should treat each list as an unordered
/// multiset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMap {
    destinations: BTreeMap<StationId, Vec<StationId>>,
}

impl AdjacencyMap {
    /// Destinations reachable in one hop from `station`.
    ///
    /// Returns an empty slice for stations the map does not know.
    pub fn destinations(&self, station: &StationId) -> &[StationId] {
        self.destinations
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every station and its destination list, in id
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&StationId, &[StationId])> {
        self.destinations.iter().map(|(id, dests)| (id, dests.as_slice()))
    }

    /// The number of stations in the map.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the map has no stations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    fn push(&mut self, from: &StationId, to: &StationId) {
        self.destinations
            .entry(from.clone())
            .or_default()
            .push(to.clone());
    }
}

/// Derive per-station adjacency from every line in the network.
///
/// Returns a fresh map rather than mutating the network: the caller
/// decides how to merge it back into station records. Lines are
/// processed in id order and stops in sequence order, so the result is
/// deterministic for a given network and configuration.
///
/// A single-stop line emits no edges, even under `loop` flow: a
/// station is never its own neighbour.
pub fn build_adjacency(
    network: &RailNetwork,
    config: &BuildConfig,
) -> Result<AdjacencyMap, BuildError> {
    let mut map = AdjacencyMap::default();

    // Seed every station so unserved stations still appear, empty.
    for station in network.stations.keys() {
        map.destinations.insert(station.clone(), Vec::new());
    }

    for (line_id, line) in &network.lines {
        let path = line_path(line_id, line, network, config)?;
        let n = path.len();

        for (i, &station) in path.iter().enumerate() {
            // Backward neighbour. At the first stop only a loop reaches
            // back to the last; twoway alone does not close the cycle.
            if i > 0 {
                map.push(station, path[i - 1]);
            } else if line.flow == Flow::Loop && n > 1 {
                map.push(station, path[n - 1]);
            }

            // Forward neighbour. At the last stop only a loop wraps to
            // the first.
            if i + 1 < n {
                map.push(station, path[i + 1]);
            } else if line.flow == Flow::Loop && n > 1 {
                map.push(station, path[0]);
            }
        }

        trace!(line = %line_id, flow = %line.flow, stops = n, "derived line adjacency");
    }

    debug!(
        stations = map.len(),
        lines = network.lines.len(),
        "adjacency build complete"
    );

    Ok(map)
}

/// Resolve a line's stop list to the station path adjacency runs over.
///
/// Corner markers are dropped when skipping is enabled and rejected
/// otherwise; every surviving id must be a key in the station
/// collection.
fn line_path<'a>(
    line_id: &LineId,
    line: &'a Line,
    network: &RailNetwork,
    config: &BuildConfig,
) -> Result<Vec<&'a StationId>, BuildError> {
    let mut path = Vec::with_capacity(line.stops.len());

    for stop in &line.stops {
        match stop.token() {
            StopToken::Corner(marker) => {
                if config.skip_corners {
                    continue;
                }
                return Err(BuildError::CornerMarker {
                    line: line_id.clone(),
                    marker: *marker,
                });
            }
            StopToken::Station(id) => {
                if !network.stations.contains_key(id) {
                    return Err(BuildError::UnknownStation {
                        line: line_id.clone(),
                        station: id.clone(),
                    });
                }
                path.push(id);
            }
        }
    }

    Ok(path)
}

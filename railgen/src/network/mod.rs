//! Network description input model and YAML loading.
//!
//! This is the parsing collaborator: it turns the declarative YAML map
//! format (a `stations` mapping and a `lines` mapping) into validated
//! domain values. Attributes the adjacency derivation does not care
//! about (names, coordinates, notes) are carried through as opaque
//! bags so they survive into the rendered output untouched.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Flow, LineId, StationId, Stop};

/// Error loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The description could not be read.
    #[error("failed to read network description: {0}")]
    Io(#[from] std::io::Error),

    /// The description is not a well-formed network document. Missing
    /// `stops` or `flow` on a line surfaces here.
    #[error("malformed network description: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A station record: an opaque bag of attributes (name, coordinates,
/// notes) that pass through to the output untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Station {
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

/// A line record: an ordered stop sequence and a flow classifier.
///
/// `flow` is required; a line that does not declare one fails to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct Line {
    /// Ordered stop sequence, first to last.
    pub stops: Vec<Stop>,

    /// How traversal flows along the stop sequence.
    pub flow: Flow,

    /// Presentation attributes (name, direction, type, notes); ignored
    /// by adjacency derivation.
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

/// A parsed rail network description.
///
/// Both collections are keyed maps with deterministic (sorted)
/// iteration order, which makes every downstream pass deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct RailNetwork {
    pub stations: BTreeMap<StationId, Station>,
    pub lines: BTreeMap<LineId, Line>,
}

impl RailNetwork {
    /// Parse a network description from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self, LoadError> {
        let network: RailNetwork = serde_yaml::from_str(s)?;
        debug!(
            stations = network.stations.len(),
            lines = network.lines.len(),
            "parsed network description"
        );
        Ok(network)
    }

    /// Parse a network description from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_yaml_str(&contents)
    }

    /// Load a network description from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

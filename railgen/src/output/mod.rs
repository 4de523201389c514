//! Rendering the augmented station collection.
//!
//! The serialization collaborator: takes the parsed network and a built
//! adjacency map and produces the node document the route finder loads.
//! Each station record is its original attribute bag plus a
//! `destinations` array. The document is plain JSON, optionally wrapped
//! as a JavaScript assignment for direct inclusion in a consuming
//! script.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::adjacency::AdjacencyMap;
use crate::domain::StationId;
use crate::network::RailNetwork;

/// Output encodings for the node document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain JSON document.
    #[default]
    Json,
    /// The JSON document wrapped as `stations = <json>;`.
    JavaScript,
}

/// Error rendering or writing the node document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize node document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write node document: {0}")]
    Io(#[from] std::io::Error),
}

/// A station as rendered: its original attributes plus the derived
/// destinations list.
#[derive(Debug, Serialize)]
struct StationRecord<'a> {
    #[serde(flatten)]
    attrs: &'a serde_json::Map<String, serde_json::Value>,
    destinations: &'a [StationId],
}

fn records<'a>(
    network: &'a RailNetwork,
    adjacency: &'a AdjacencyMap,
) -> BTreeMap<&'a StationId, StationRecord<'a>> {
    network
        .stations
        .iter()
        .map(|(id, station)| {
            let record = StationRecord {
                attrs: &station.attrs,
                destinations: adjacency.destinations(id),
            };
            (id, record)
        })
        .collect()
}

/// Build the node document as a JSON value.
pub fn document(
    network: &RailNetwork,
    adjacency: &AdjacencyMap,
) -> Result<serde_json::Value, RenderError> {
    Ok(serde_json::to_value(records(network, adjacency))?)
}

/// Render the node document as a string in the given format.
pub fn render(
    network: &RailNetwork,
    adjacency: &AdjacencyMap,
    format: OutputFormat,
) -> Result<String, RenderError> {
    let json = serde_json::to_string(&records(network, adjacency))?;
    Ok(match format {
        OutputFormat::Json => json,
        OutputFormat::JavaScript => format!("stations = {json};"),
    })
}

/// Render the node document as indented JSON, for terminal echo.
pub fn render_pretty(
    network: &RailNetwork,
    adjacency: &AdjacencyMap,
) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&records(network, adjacency))?)
}

/// Write the rendered document to a writer.
pub fn write_to<W: Write>(
    writer: &mut W,
    network: &RailNetwork,
    adjacency: &AdjacencyMap,
    format: OutputFormat,
) -> Result<(), RenderError> {
    let rendered = render(network, adjacency, format)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

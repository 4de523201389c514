//! Line identifier and flow classifier types.

use std::fmt;

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A line identifier: a non-empty name with no surrounding whitespace.
///
/// Line ids key the network's line collection. They are a distinct type
/// from [`super::StationId`] so the two kinds of key cannot be mixed up.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidLineId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> String {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How traversal flows along a line's stop sequence.
///
/// Every line must declare its flow explicitly; there is no default
/// variant, so a line definition without a `flow` field fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Stops form an open path; each endpoint has a single neighbour.
    Linear,
    /// The last stop connects back to the first, closing the cycle.
    Loop,
    /// Every adjacent pair of stops connects in both directions, with
    /// no wraparound between last and first.
    TwoWay,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Flow::Linear => "linear",
            Flow::Loop => "loop",
            Flow::TwoWay => "twoway",
        };
        f.write_str(tag)
    }
}

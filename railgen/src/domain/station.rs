//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier: a non-empty name with no surrounding whitespace.
///
/// Station ids are opaque keys into the network's station collection and
/// into the derived adjacency map. This type guarantees that any
/// `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use railgen::domain::StationId;
///
/// let kgx = StationId::parse("Kings Cross").unwrap();
/// assert_eq!(kgx.as_str(), "Kings Cross");
///
/// // Empty ids are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Surrounding whitespace is rejected
/// assert!(StationId::parse(" Kings Cross").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and carry no leading or trailing
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> String {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("Kings Cross").is_ok());
        assert!(StationId::parse("spawn").is_ok());
        assert!(StationId::parse("North-East Junction").is_ok());
        assert!(StationId::parse("7th Street").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn reject_surrounding_whitespace() {
        assert!(StationId::parse(" spawn").is_err());
        assert!(StationId::parse("spawn ").is_err());
        assert!(StationId::parse("  ").is_err());
        assert!(StationId::parse("\tspawn").is_err());
    }

    #[test]
    fn interior_whitespace_allowed() {
        let id = StationId::parse("Kings Cross").unwrap();
        assert_eq!(id.as_str(), "Kings Cross");
    }

    #[test]
    fn display() {
        let id = StationId::parse("spawn").unwrap();
        assert_eq!(format!("{}", id), "spawn");
    }

    #[test]
    fn debug() {
        let id = StationId::parse("spawn").unwrap();
        assert_eq!(format!("{:?}", id), "StationId(spawn)");
    }

    #[test]
    fn equality_and_ordering() {
        let a = StationId::parse("Alpha").unwrap();
        let b = StationId::parse("Beta").unwrap();
        assert_eq!(a, StationId::parse("Alpha").unwrap());
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(StationId::parse("spawn").unwrap(), 1);
        assert!(map.contains_key(&StationId::parse("spawn").unwrap()));
        assert!(!map.contains_key(&StationId::parse("other").unwrap()));
    }

    #[test]
    fn serde_roundtrip() {
        let id = StationId::parse("Kings Cross").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Kings Cross\"");
        let back: StationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<StationId>("\"\"").is_err());
        assert!(serde_json::from_str::<StationId>("\" spawn\"").is_err());
    }
}

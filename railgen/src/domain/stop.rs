//! Stop values as they appear in a line's stop list.
//!
//! The input format writes a stop either as a bare scalar or as a
//! sequence whose first element is the real stop and whose remaining
//! elements are annotations (platform, landing, corner notes) that play
//! no part in adjacency. Normalization to the leading token happens
//! here, at parse time.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

use super::station::StationId;

/// The normalized identity of a stop.
///
/// A stop either names a real station or is a bare integer: the map
/// format's marker for a track corner between stations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StopToken {
    /// A numeric corner marker; never a station.
    Corner(i64),
    /// A real station on the line.
    Station(StationId),
}

impl StopToken {
    /// Returns the station id if this token names a station.
    pub fn as_station(&self) -> Option<&StationId> {
        match self {
            StopToken::Station(id) => Some(id),
            StopToken::Corner(_) => None,
        }
    }

    /// Returns true if this token is a corner marker.
    pub fn is_corner(&self) -> bool {
        matches!(self, StopToken::Corner(_))
    }
}

/// A single entry in a line's stop list.
///
/// Deserializes from either a bare token (`Kings Cross`, `3`) or a
/// sequence whose head is the token and whose tail is kept as opaque
/// annotations (`[Kings Cross, east landing]`). An empty sequence is a
/// parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    token: StopToken,
    annotations: Vec<serde_json::Value>,
}

impl Stop {
    /// A bare station stop with no annotations.
    pub fn station(id: StationId) -> Self {
        Stop {
            token: StopToken::Station(id),
            annotations: Vec::new(),
        }
    }

    /// A bare corner marker.
    pub fn corner(marker: i64) -> Self {
        Stop {
            token: StopToken::Corner(marker),
            annotations: Vec::new(),
        }
    }

    /// The stop's normalized token: the leading element of a compound
    /// stop, or the bare value itself.
    pub fn token(&self) -> &StopToken {
        &self.token
    }

    /// Annotation values carried alongside a compound stop.
    pub fn annotations(&self) -> &[serde_json::Value] {
        &self.annotations
    }
}

impl<'de> Deserialize<'de> for Stop {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(StopToken),
            Compound(Vec<serde_json::Value>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bare(token) => Ok(Stop {
                token,
                annotations: Vec::new(),
            }),
            Raw::Compound(values) => {
                let mut values = values.into_iter();
                let head = values
                    .next()
                    .ok_or_else(|| D::Error::custom("compound stop must not be empty"))?;
                let token = serde_json::from_value(head)
                    .map_err(|e| D::Error::custom(format!("invalid stop token: {e}")))?;
                Ok(Stop {
                    token,
                    annotations: values.collect(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn bare_station_stop() {
        let stop: Stop = serde_yaml::from_str("Kings Cross").unwrap();
        assert_eq!(stop.token(), &StopToken::Station(station_id("Kings Cross")));
        assert!(stop.annotations().is_empty());
    }

    #[test]
    fn bare_corner_stop() {
        let stop: Stop = serde_yaml::from_str("7").unwrap();
        assert_eq!(stop.token(), &StopToken::Corner(7));
        assert!(stop.token().is_corner());
        assert!(stop.token().as_station().is_none());
    }

    #[test]
    fn compound_stop_normalizes_to_head() {
        let stop: Stop = serde_yaml::from_str("[Kings Cross, east landing]").unwrap();
        assert_eq!(stop.token(), &StopToken::Station(station_id("Kings Cross")));
        assert_eq!(stop.annotations().len(), 1);
        assert_eq!(stop.annotations()[0], serde_json::json!("east landing"));
    }

    #[test]
    fn compound_corner_stop() {
        let stop: Stop = serde_yaml::from_str("[3, sharp]").unwrap();
        assert_eq!(stop.token(), &StopToken::Corner(3));
    }

    #[test]
    fn compound_with_mixed_annotations() {
        let stop: Stop = serde_yaml::from_str("[Spawn, 2, north]").unwrap();
        assert_eq!(stop.token(), &StopToken::Station(station_id("Spawn")));
        assert_eq!(stop.annotations().len(), 2);
    }

    #[test]
    fn empty_compound_rejected() {
        assert!(serde_yaml::from_str::<Stop>("[]").is_err());
    }

    #[test]
    fn single_element_compound_equals_bare() {
        let compound: Stop = serde_yaml::from_str("[Spawn]").unwrap();
        let bare: Stop = serde_yaml::from_str("Spawn").unwrap();
        assert_eq!(compound.token(), bare.token());
    }

    #[test]
    fn annotations_never_alter_the_token() {
        let plain: Stop = serde_yaml::from_str("Kings Cross").unwrap();
        let annotated: Stop = serde_yaml::from_str("[Kings Cross, platform 2, west]").unwrap();
        assert_eq!(plain.token(), annotated.token());
    }

    #[test]
    fn constructors() {
        let stop = Stop::station(station_id("Spawn"));
        assert_eq!(stop.token().as_station(), Some(&station_id("Spawn")));

        let stop = Stop::corner(5);
        assert!(stop.token().is_corner());
    }
}

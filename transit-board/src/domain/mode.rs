//! Transport mode of an itinerary leg.

use std::fmt;

use serde::Deserialize;

/// Transport mode as reported by the routing API.
///
/// The planner is only asked for bus, rail, tram and walk legs, but the
/// router is free to answer with other modes. Those are kept verbatim in
/// [`TransitMode::Other`] so text output never fails on them.
///
/// # Examples
///
/// ```
/// use transit_board::domain::TransitMode;
///
/// assert_eq!(TransitMode::parse("BUS"), TransitMode::Bus);
/// assert!(TransitMode::parse("WALK").is_walk());
/// assert_eq!(TransitMode::parse("FERRY").as_str(), "FERRY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TransitMode {
    Walk,
    Bus,
    Tram,
    Rail,
    Train,
    /// Any mode outside the fixed set, stored as received.
    Other(String),
}

impl TransitMode {
    /// Parse a mode name. Unknown names become [`TransitMode::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "WALK" => TransitMode::Walk,
            "BUS" => TransitMode::Bus,
            "TRAM" => TransitMode::Tram,
            "RAIL" => TransitMode::Rail,
            "TRAIN" => TransitMode::Train,
            other => TransitMode::Other(other.to_string()),
        }
    }

    /// Returns the upstream name of the mode.
    pub fn as_str(&self) -> &str {
        match self {
            TransitMode::Walk => "WALK",
            TransitMode::Bus => "BUS",
            TransitMode::Tram => "TRAM",
            TransitMode::Rail => "RAIL",
            TransitMode::Train => "TRAIN",
            TransitMode::Other(name) => name,
        }
    }

    /// Returns true for walking legs.
    pub fn is_walk(&self) -> bool {
        matches!(self, TransitMode::Walk)
    }
}

impl From<String> for TransitMode {
    fn from(s: String) -> Self {
        TransitMode::parse(&s)
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!(TransitMode::parse("WALK"), TransitMode::Walk);
        assert_eq!(TransitMode::parse("BUS"), TransitMode::Bus);
        assert_eq!(TransitMode::parse("TRAM"), TransitMode::Tram);
        assert_eq!(TransitMode::parse("RAIL"), TransitMode::Rail);
        assert_eq!(TransitMode::parse("TRAIN"), TransitMode::Train);
    }

    #[test]
    fn unknown_modes_are_kept() {
        assert_eq!(
            TransitMode::parse("SUBWAY"),
            TransitMode::Other("SUBWAY".into())
        );
        // Case matters: the API only sends uppercase names
        assert_eq!(TransitMode::parse("bus"), TransitMode::Other("bus".into()));
    }

    #[test]
    fn deserialize_from_json_string() {
        let mode: TransitMode = serde_json::from_str("\"TRAM\"").unwrap();
        assert_eq!(mode, TransitMode::Tram);

        let mode: TransitMode = serde_json::from_str("\"FERRY\"").unwrap();
        assert_eq!(mode.to_string(), "FERRY");
    }
}

//! Geographic coordinate pair.

use std::fmt;

use super::DomainError;

/// A WGS84 latitude/longitude pair.
///
/// # Invariants
///
/// - latitude is within -90..=90
/// - longitude is within -180..=180
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Construct coordinates, validating the ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates(format!(
                "latitude {lat} out of range"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinates(format!(
                "longitude {lon} out of range"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Parse a `"lat,lon"` pair, e.g. `"60.1699,24.9384"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_board::domain::Coordinates;
    ///
    /// let home = Coordinates::parse("60.1699, 24.9384").unwrap();
    /// assert_eq!(home.lat(), 60.1699);
    /// assert_eq!(home.lon(), 24.9384);
    ///
    /// assert!(Coordinates::parse("60.1699").is_err());
    /// assert!(Coordinates::parse("95.0,24.0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidCoordinates(format!("expected lat,lon: {s}")))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidCoordinates(format!("bad latitude: {lat}")))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidCoordinates(format!("bad longitude: {lon}")))?;

        Self::new(lat, lon)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_pairs() {
        let c = Coordinates::parse("60.2,24.8").unwrap();
        assert_eq!((c.lat(), c.lon()), (60.2, 24.8));

        let c = Coordinates::parse("-33.5,-70.6").unwrap();
        assert_eq!((c.lat(), c.lon()), (-33.5, -70.6));
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coordinates::new(90.5, 0.0).is_err());
        assert!(Coordinates::new(-90.5, 0.0).is_err());
        assert!(Coordinates::new(0.0, 180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn reject_malformed() {
        assert!(Coordinates::parse("").is_err());
        assert!(Coordinates::parse("abc,24.0").is_err());
        assert!(Coordinates::parse("60.0,").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let c = Coordinates::new(60.1699, 24.9384).unwrap();
        assert_eq!(c.to_string(), "60.1699,24.9384");
        assert_eq!(Coordinates::parse(&c.to_string()).unwrap(), c);
    }
}

//! Predicted vehicle arrival at a stop.

/// One upcoming vehicle visit at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopArrival {
    /// Route short name, e.g. "55" or "550".
    pub route_short_name: String,
    /// Realtime arrival, seconds since the start of the service day.
    pub arrival_offset_seconds: u32,
    /// Name of the stop.
    pub stop_name: String,
    /// Headsign shown on the vehicle.
    pub destination: String,
}

impl StopArrival {
    /// Arrival formatted as `hours:minutes`; see [`format_eta`].
    pub fn eta(&self) -> String {
        format_eta(self.arrival_offset_seconds)
    }
}

/// Format seconds since the start of the service day as `hours:minutes`.
///
/// Both parts are truncated and neither is zero-padded. Console output
/// depends on this exact shape.
///
/// # Examples
///
/// ```
/// use transit_board::domain::format_eta;
///
/// assert_eq!(format_eta(3661), "1:1");
/// assert_eq!(format_eta(45_000), "12:30");
/// assert_eq!(format_eta(59), "0:0");
/// ```
pub fn format_eta(secs: u32) -> String {
    format!("{}:{}", secs / 3600, (secs % 3600) / 60)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The two parts reassemble the truncated offset
        #[test]
        fn eta_matches_integer_division(secs in any::<u32>()) {
            let eta = format_eta(secs);
            let (h, m) = eta.split_once(':').unwrap();
            let h: u32 = h.parse().unwrap();
            let m: u32 = m.parse().unwrap();

            prop_assert_eq!(h, secs / 3600);
            prop_assert_eq!(m, (secs % 3600) / 60);
            prop_assert!(m < 60);
        }

        /// No zero padding: minutes never start with '0' unless zero
        #[test]
        fn eta_has_no_padding(secs in any::<u32>()) {
            let eta = format_eta(secs);
            let (_, m) = eta.split_once(':').unwrap();
            prop_assert!(m == "0" || !m.starts_with('0'));
        }
    }
}

//! Board direction and timetable row kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a station's traffic a board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Trains leaving the station.
    #[default]
    Departing,
    /// Trains coming into the station.
    Arriving,
}

impl Direction {
    /// Both directions, in the order they are offered to users.
    pub const ALL: [Direction; 2] = [Direction::Departing, Direction::Arriving];

    /// The timetable row type that carries this direction's time.
    pub fn row_type(&self) -> RowType {
        match self {
            Direction::Departing => RowType::Departure,
            Direction::Arriving => RowType::Arrival,
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Departing => "Departures",
            Direction::Arriving => "Arrivals",
        }
    }

    /// Column heading for the time column.
    pub fn time_heading(&self) -> &'static str {
        match self {
            Direction::Departing => "Departs",
            Direction::Arriving => "Arrives",
        }
    }

    /// Value used in query strings.
    pub fn as_param(&self) -> &'static str {
        match self {
            Direction::Departing => "departing",
            Direction::Arriving => "arriving",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Type of a single timetable row in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowType {
    Departure,
    Arrival,
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowType::Departure => f.write_str("DEPARTURE"),
            RowType::Arrival => f.write_str("ARRIVAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_type_follows_direction() {
        assert_eq!(Direction::Departing.row_type(), RowType::Departure);
        assert_eq!(Direction::Arriving.row_type(), RowType::Arrival);
    }

    #[test]
    fn default_is_departing() {
        assert_eq!(Direction::default(), Direction::Departing);
    }

    #[test]
    fn labels() {
        assert_eq!(Direction::Departing.label(), "Departures");
        assert_eq!(Direction::Arriving.label(), "Arrivals");
    }

    #[test]
    fn deserialize_direction_param() {
        let d: Direction = serde_json::from_str("\"arriving\"").unwrap();
        assert_eq!(d, Direction::Arriving);
        assert!(serde_json::from_str::<Direction>("\"sideways\"").is_err());
    }

    #[test]
    fn deserialize_row_type() {
        let t: RowType = serde_json::from_str("\"DEPARTURE\"").unwrap();
        assert_eq!(t, RowType::Departure);
        let t: RowType = serde_json::from_str("\"ARRIVAL\"").unwrap();
        assert_eq!(t, RowType::Arrival);
        assert_eq!(RowType::Arrival.to_string(), "ARRIVAL");
    }
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DisplayRow};
use crate::domain::Direction;

/// Request for a station board.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    /// Station long name, exactly as listed
    pub station: String,

    /// Departures or arrivals (defaults to departures)
    pub direction: Option<Direction>,
}

/// A station board.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Station long name
    pub station: String,

    /// Station short code
    pub code: String,

    pub direction: Direction,

    /// Rows in display order
    pub rows: Vec<DisplayRow>,

    /// Set when there is nothing to show
    pub message: Option<String>,
}

impl BoardResponse {
    pub fn from_board(board: &Board, empty_message: &str) -> Self {
        Self {
            station: board.station.clone(),
            code: board.code.to_string(),
            direction: board.direction,
            rows: board.rows().to_vec(),
            message: board.is_empty().then(|| empty_message.to_string()),
        }
    }
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum number of results (default 10, max 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    pub code: String,
    pub name: String,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

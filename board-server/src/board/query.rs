//! Answering a board request end to end.

use tracing::info;

use crate::digitraffic::{DigitrafficError, FetchWindow, TrainSource};
use crate::domain::{Direction, StationCode};
use crate::stations::StationDirectory;

use super::assemble::{assemble, sort_by_scheduled};
use super::config::BoardConfig;
use super::row::{BoardContext, DisplayRow};

/// Errors that stop a board from being produced.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The station name is not in the directory; nothing was fetched
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// The single fetch attempt failed
    #[error("failed to fetch trains: {0}")]
    Fetch(#[from] DigitrafficError),
}

/// Rows for a board, or the signal that there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    Rows(Vec<DisplayRow>),
    Empty,
}

/// A finished board for one station and direction.
#[derive(Debug, Clone)]
pub struct Board {
    pub station: String,
    pub code: StationCode,
    pub direction: Direction,
    pub outcome: BoardOutcome,
}

impl Board {
    /// The rows to display; empty for [`BoardOutcome::Empty`].
    pub fn rows(&self) -> &[DisplayRow] {
        match &self.outcome {
            BoardOutcome::Rows(rows) => rows,
            BoardOutcome::Empty => &[],
        }
    }

    /// Check if the board has no trains.
    pub fn is_empty(&self) -> bool {
        matches!(self.outcome, BoardOutcome::Empty)
    }
}

/// Build the board for `station_name` in `direction`.
///
/// The name must match a directory long name exactly. Resolution happens
/// before any fetch, so an unknown name never reaches the source.
pub async fn query_board<S: TrainSource>(
    source: &S,
    directory: &StationDirectory,
    config: &BoardConfig,
    station_name: &str,
    direction: Direction,
) -> Result<Board, BoardError> {
    let code = directory
        .code_for(station_name)
        .cloned()
        .ok_or_else(|| BoardError::StationNotFound(station_name.to_string()))?;

    info!(station = %code, %direction, "querying board");

    let window = FetchWindow::for_direction(direction, config.window_mins);
    let trains = source.fetch_trains(&code, window).await?;

    let ctx = BoardContext {
        directory,
        target: &code,
        direction,
        offset: config.utc_offset,
    };
    let mut rows = assemble(&trains, &ctx, config.max_rows);
    if config.sort_by_scheduled_time {
        sort_by_scheduled(&mut rows);
    }

    info!(
        station = %code,
        fetched = trains.len(),
        shown = rows.len(),
        "board assembled"
    );

    let outcome = if rows.is_empty() {
        BoardOutcome::Empty
    } else {
        BoardOutcome::Rows(rows)
    };

    Ok(Board {
        station: station_name.to_string(),
        code,
        direction,
        outcome,
    })
}

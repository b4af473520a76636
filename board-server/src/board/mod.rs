//! Station boards.
//!
//! Turns the raw live-trains list for a station into ordered, display-ready
//! rows:
//!
//! 1. Resolve the station name to a code ([`query_board`])
//! 2. Fetch the trains once
//! 3. Build one row per train in API order, skipping any train that cannot
//!    be shown in full ([`build_row`], [`assemble`])
//! 4. Stop at the row cap

mod assemble;
mod config;
mod query;
mod row;


pub use assemble::{assemble, sort_by_scheduled};
pub use config::{BoardConfig, DEFAULT_MAX_ROWS};
pub use query::{Board, BoardError, BoardOutcome, query_board};
pub use row::{BoardContext, CANCELLED_TEXT, DisplayRow, RowSkip, build_row, train_label};

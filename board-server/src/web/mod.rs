//! Web layer for the station boards.
//!
//! Provides an HTML search page, station autocomplete, and the board
//! endpoint in HTML-fragment and JSON flavours.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;

//! Station reference data.
//!
//! Provides long name ↔ short code lookup, loaded once at startup from a
//! local JSON file and shared read-only afterwards.

mod directory;
mod error;

pub use directory::{StationDirectory, StationEntry};
pub use error::StationError;

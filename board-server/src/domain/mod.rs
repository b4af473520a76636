//! Domain types for the station boards.
//!
//! This module contains the validated building blocks shared by the API
//! client and the board pipeline. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod direction;
mod station_code;
mod timestamp;

pub use direction::{Direction, RowType};
pub use station_code::{InvalidStationCode, StationCode};
pub use timestamp::{InvalidOffset, LocalTimestamp, MalformedTimestamp, UtcOffset};

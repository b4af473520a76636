//! Digitraffic rail API client.
//!
//! The Finnish Transport Infrastructure Agency publishes live train data at
//! `rata.digitraffic.fi`. This module fetches the live-trains list for a
//! station and decodes it into raw DTOs.
//!
//! Key characteristics of the API:
//! - All times are UTC strings of the form `yyyy-mm-ddTHH:MM:SS.000Z`
//! - Each train carries its full stop sequence, not only the queried station
//! - Trains come back in no particular time order

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_WINDOW_MINS, DigitrafficClient, DigitrafficConfig, FetchWindow,
};
pub use error::DigitrafficError;
pub use mock::MockDigitrafficClient;
pub use source::{Feed, TrainSource};
pub use types::{RawTrain, TimetableRow, decode_trains};

//! Offline train source for development and tests.
//!
//! Loads saved live-trains responses from JSON files and serves them as if
//! they came from the API.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::StationCode;

use super::client::FetchWindow;
use super::error::DigitrafficError;
use super::types::{RawTrain, decode_trains};

/// Train source backed by `{CODE}.json` files.
///
/// Each file holds the array body of a live-trains response. The fetch
/// window is ignored; row selection by direction happens downstream, so
/// one file serves both departures and arrivals.
#[derive(Debug, Clone)]
pub struct MockDigitrafficClient {
    trains: Arc<HashMap<StationCode, Vec<RawTrain>>>,
}

impl MockDigitrafficClient {
    /// Load every `.json` file in `data_dir`, keyed by file stem.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DigitrafficError> {
        let data_dir = data_dir.as_ref();
        let mut trains = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| DigitrafficError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DigitrafficError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
                DigitrafficError::ApiError {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                }
            })?;

            let code = StationCode::parse(stem).map_err(|_| DigitrafficError::ApiError {
                status: 0,
                message: format!("Invalid station code in filename: {}", stem),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| DigitrafficError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let station_trains = decode_trains(&json).map_err(|e| DigitrafficError::Json {
                message: format!("Failed to parse {:?}: {}", path, e),
                body: None,
            })?;

            debug!(%code, trains = station_trains.len(), "loaded mock trains");
            trains.insert(code, station_trains);
        }

        if trains.is_empty() {
            return Err(DigitrafficError::ApiError {
                status: 0,
                message: format!("No mock train files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            trains: Arc::new(trains),
        })
    }

    /// Return the saved trains for a station.
    ///
    /// Mirrors [`DigitrafficClient::fetch_trains`](super::DigitrafficClient::fetch_trains).
    pub async fn fetch_trains(
        &self,
        station: &StationCode,
        _window: FetchWindow,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        self.trains
            .get(station)
            .cloned()
            .ok_or_else(|| DigitrafficError::NotFound(station.to_string()))
    }
}

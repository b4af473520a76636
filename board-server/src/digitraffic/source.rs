//! Abstraction over where live trains come from.

use std::future::Future;

use crate::domain::StationCode;

use super::client::{DigitrafficClient, FetchWindow};
use super::error::DigitrafficError;
use super::mock::MockDigitrafficClient;
use super::types::RawTrain;

/// Something that can list live trains at a station.
pub trait TrainSource {
    /// Fetch trains at `station` within `window`, in source order.
    fn fetch_trains(
        &self,
        station: &StationCode,
        window: FetchWindow,
    ) -> impl Future<Output = Result<Vec<RawTrain>, DigitrafficError>> + Send;
}

impl TrainSource for DigitrafficClient {
    async fn fetch_trains(
        &self,
        station: &StationCode,
        window: FetchWindow,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        DigitrafficClient::fetch_trains(self, station, window).await
    }
}

impl TrainSource for MockDigitrafficClient {
    async fn fetch_trains(
        &self,
        station: &StationCode,
        window: FetchWindow,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        MockDigitrafficClient::fetch_trains(self, station, window).await
    }
}

/// The source chosen at startup: the live API or saved files.
#[derive(Debug, Clone)]
pub enum Feed {
    Live(DigitrafficClient),
    Mock(MockDigitrafficClient),
}

impl TrainSource for Feed {
    async fn fetch_trains(
        &self,
        station: &StationCode,
        window: FetchWindow,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        match self {
            Feed::Live(client) => client.fetch_trains(station, window).await,
            Feed::Mock(client) => client.fetch_trains(station, window).await,
        }
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardConfig;
use crate::digitraffic::Feed;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Where live trains come from
    pub feed: Arc<Feed>,

    /// Station name lookup
    pub directory: Arc<StationDirectory>,

    /// Board settings
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: Feed, directory: StationDirectory, config: BoardConfig) -> Self {
        Self {
            feed: Arc::new(feed),
            directory: Arc::new(directory),
            config: Arc::new(config),
        }
    }
}

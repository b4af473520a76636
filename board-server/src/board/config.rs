//! Board configuration.

use crate::digitraffic::DEFAULT_WINDOW_MINS;
use crate::domain::UtcOffset;

/// Default maximum number of rows on one board.
pub const DEFAULT_MAX_ROWS: usize = 40;

/// Configuration parameters for building boards.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Maximum number of rows to show. Trains after this many
    /// successfully built rows are not looked at.
    pub max_rows: usize,

    /// How far ahead to query the API (minutes).
    pub window_mins: u32,

    /// Sort rows by scheduled time instead of keeping API order.
    pub sort_by_scheduled_time: bool,

    /// Offset applied to every API timestamp.
    pub utc_offset: UtcOffset,
}

impl BoardConfig {
    /// Create a configuration using the given offset and defaults otherwise.
    pub fn new(utc_offset: UtcOffset) -> Self {
        Self {
            utc_offset,
            ..Self::default()
        }
    }

    /// Set the row cap.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the query window.
    pub fn with_window_mins(mut self, window_mins: u32) -> Self {
        self.window_mins = window_mins;
        self
    }

    /// Enable or disable sorting by scheduled time.
    pub fn with_sort_by_scheduled_time(mut self, sort: bool) -> Self {
        self.sort_by_scheduled_time = sort;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            window_mins: DEFAULT_WINDOW_MINS, // 4 hours
            sort_by_scheduled_time: false,
            utc_offset: UtcOffset::UTC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.max_rows, 40);
        assert_eq!(config.window_mins, 240);
        assert!(!config.sort_by_scheduled_time);
        assert_eq!(config.utc_offset, UtcOffset::UTC);
    }

    #[test]
    fn custom_config() {
        let offset = UtcOffset::from_hours(3).unwrap();
        let config = BoardConfig::new(offset)
            .with_max_rows(10)
            .with_window_mins(60)
            .with_sort_by_scheduled_time(true);

        assert_eq!(config.max_rows, 10);
        assert_eq!(config.window_mins, 60);
        assert!(config.sort_by_scheduled_time);
        assert_eq!(config.utc_offset.hours(), 3);
    }
}

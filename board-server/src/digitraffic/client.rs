//! Digitraffic rail HTTP client.
//!
//! Fetches live trains for one station. Every query is a single GET with
//! no retries; failures are returned to the caller as-is.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::{Direction, StationCode};

use super::error::DigitrafficError;
use super::types::{RawTrain, decode_trains};

/// Default base URL for the Digitraffic rail API.
pub const DEFAULT_BASE_URL: &str = "https://rata.digitraffic.fi/api/v1";

/// Default value for the `Digitraffic-User` identification header.
const DEFAULT_USER: &str = "board-server";

/// Default look-ahead for a board, in minutes.
pub const DEFAULT_WINDOW_MINS: u32 = 240;

/// Time window sent with a live-trains query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub minutes_before_departure: u32,
    pub minutes_after_departure: u32,
    pub minutes_before_arrival: u32,
    pub minutes_after_arrival: u32,
}

impl FetchWindow {
    /// Window covering the next `window_mins` minutes of one direction only.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::digitraffic::FetchWindow;
    /// use board_server::domain::Direction;
    ///
    /// let w = FetchWindow::for_direction(Direction::Arriving, 240);
    /// assert_eq!(w.minutes_before_arrival, 240);
    /// assert_eq!(w.minutes_before_departure, 0);
    /// ```
    pub fn for_direction(direction: Direction, window_mins: u32) -> Self {
        match direction {
            Direction::Departing => Self {
                minutes_before_departure: window_mins,
                minutes_after_departure: 0,
                minutes_before_arrival: 0,
                minutes_after_arrival: 0,
            },
            Direction::Arriving => Self {
                minutes_before_departure: 0,
                minutes_after_departure: 0,
                minutes_before_arrival: window_mins,
                minutes_after_arrival: 0,
            },
        }
    }

    /// Query parameters, including `include_nonstopping=false`.
    pub fn query_params(&self) -> [(&'static str, String); 5] {
        [
            (
                "minutes_before_departure",
                self.minutes_before_departure.to_string(),
            ),
            (
                "minutes_after_departure",
                self.minutes_after_departure.to_string(),
            ),
            (
                "minutes_before_arrival",
                self.minutes_before_arrival.to_string(),
            ),
            (
                "minutes_after_arrival",
                self.minutes_after_arrival.to_string(),
            ),
            ("include_nonstopping", "false".to_string()),
        ]
    }
}

/// Configuration for the Digitraffic client.
#[derive(Debug, Clone)]
pub struct DigitrafficConfig {
    /// Base URL for the API (defaults to production Digitraffic)
    pub base_url: String,
    /// Value of the `Digitraffic-User` header
    pub user: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DigitrafficConfig {
    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the application name sent in `Digitraffic-User`.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DigitrafficConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user: DEFAULT_USER.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Digitraffic rail API client.
#[derive(Debug, Clone)]
pub struct DigitrafficClient {
    http: reqwest::Client,
    base_url: String,
}

impl DigitrafficClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DigitrafficConfig) -> Result<Self, DigitrafficError> {
        let mut headers = HeaderMap::new();

        let user = HeaderValue::from_str(&config.user).map_err(|_| DigitrafficError::ApiError {
            status: 0,
            message: "Invalid Digitraffic-User header value".to_string(),
        })?;
        headers.insert(HeaderName::from_static("digitraffic-user"), user);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the live-trains endpoint for a station.
    pub fn live_trains_url(&self, station: &StationCode) -> String {
        format!("{}/live-trains/station/{}", self.base_url, station.as_str())
    }

    /// Fetch live trains at a station within the given window.
    ///
    /// Trains are returned in API order.
    pub async fn fetch_trains(
        &self,
        station: &StationCode,
        window: FetchWindow,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        let url = self.live_trains_url(station);

        let response = self
            .http
            .get(&url)
            .query(&window.query_params())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigitrafficError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        decode_trains(&body).map_err(|e| DigitrafficError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = DigitrafficConfig::default()
            .with_base_url("http://localhost:8080/")
            .with_user("test-suite")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.user, "test-suite");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = DigitrafficConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user, DEFAULT_USER);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn departing_window() {
        let w = FetchWindow::for_direction(Direction::Departing, DEFAULT_WINDOW_MINS);
        assert_eq!(
            w,
            FetchWindow {
                minutes_before_departure: 240,
                minutes_after_departure: 0,
                minutes_before_arrival: 0,
                minutes_after_arrival: 0,
            }
        );
    }

    #[test]
    fn arriving_window_mirrors_departing() {
        let w = FetchWindow::for_direction(Direction::Arriving, DEFAULT_WINDOW_MINS);
        assert_eq!(w.minutes_before_departure, 0);
        assert_eq!(w.minutes_after_departure, 0);
        assert_eq!(w.minutes_before_arrival, 240);
        assert_eq!(w.minutes_after_arrival, 0);
    }

    #[test]
    fn query_params_exclude_nonstopping() {
        let params = FetchWindow::for_direction(Direction::Departing, 240).query_params();
        assert_eq!(params[0], ("minutes_before_departure", "240".to_string()));
        assert_eq!(params[4], ("include_nonstopping", "false".to_string()));
    }

    #[test]
    fn url_strips_trailing_slash() {
        let client =
            DigitrafficClient::new(DigitrafficConfig::default().with_base_url("http://x/api/v1/"))
                .unwrap();
        let code = StationCode::parse("HKI").unwrap();
        assert_eq!(
            client.live_trains_url(&code),
            "http://x/api/v1/live-trains/station/HKI"
        );
    }

    #[test]
    fn client_rejects_bad_header_value() {
        let config = DigitrafficConfig::default().with_user("bad\nvalue");
        assert!(DigitrafficClient::new(config).is_err());
    }

    // Live API tests are left out: they depend on real traffic.
}

//! Digitraffic client error types.

use std::fmt;

/// Errors from fetching live trains.
#[derive(Debug)]
pub enum DigitrafficError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body was not a JSON array of trains
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// No data for the requested station (mock source only)
    NotFound(String),
}

impl fmt::Display for DigitrafficError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitrafficError::Http(e) => write!(f, "HTTP error: {e}"),
            DigitrafficError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DigitrafficError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DigitrafficError::NotFound(station) => {
                write!(f, "no train data for station {station}")
            }
        }
    }
}

impl std::error::Error for DigitrafficError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigitrafficError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DigitrafficError {
    fn from(err: reqwest::Error) -> Self {
        DigitrafficError::Http(err)
    }
}

//! Digitraffic live-trains response DTOs.
//!
//! These types map directly to the JSON returned by
//! `/live-trains/station/{code}`. Only the fields the boards use are
//! declared; serde ignores the rest.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::domain::RowType;

/// Decode a live-trains response body.
///
/// The body must be a JSON array. Individual trains that do not match
/// [`RawTrain`] are dropped with a warning instead of failing the whole
/// response.
pub fn decode_trains(body: &str) -> Result<Vec<RawTrain>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;

    let trains = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value::<RawTrain>(value) {
            Ok(train) => Some(train),
            Err(e) => {
                warn!(index = i, error = %e, "skipping undecodable train");
                None
            }
        })
        .collect();

    Ok(trains)
}

/// A train as returned by the live-trains endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrain {
    /// Train number, unique per departure date.
    pub train_number: u32,

    /// Train type code, e.g. "IC", "S", "HL".
    pub train_type: String,

    /// Commuter line letter ("A", "I", ...). Empty for non-commuter trains.
    #[serde(rename = "commuterLineID", default)]
    pub commuter_line_id: Option<String>,

    /// Whether the whole train is cancelled.
    #[serde(default)]
    pub cancelled: bool,

    /// Stops in running order, one row per arrival or departure.
    #[serde(default)]
    pub time_table_rows: Vec<TimetableRow>,
}

impl RawTrain {
    /// Non-empty commuter line identifier, if the train has one.
    pub fn commuter_line(&self) -> Option<&str> {
        self.commuter_line_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// One arrival or departure event at a station.
///
/// Every field decodes leniently: a missing or mistyped value becomes
/// `None` (or an empty code) instead of failing the whole train. Whether
/// a row is usable is decided when the board row is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRow {
    /// Station short code.
    #[serde(default, deserialize_with = "lenient")]
    pub station_short_code: String,

    /// Whether this row is the arrival or the departure. `None` for
    /// unknown row types.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub row_type: Option<RowType>,

    /// Timetabled time (UTC).
    #[serde(default, deserialize_with = "lenient")]
    pub scheduled_time: Option<String>,

    /// Current estimate (UTC), present while the event is in the future.
    #[serde(default, deserialize_with = "lenient")]
    pub live_estimate_time: Option<String>,

    /// Recorded time (UTC), present once the event has happened.
    #[serde(default, deserialize_with = "lenient")]
    pub actual_time: Option<String>,

    /// Minutes late against the timetable; negative when early.
    #[serde(default, deserialize_with = "lenient")]
    pub difference_in_minutes: Option<i32>,
}

/// Decode a field, falling back to its default when the value has the
/// wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

//! Building one board row from one train.

use serde::Serialize;

use crate::digitraffic::{RawTrain, TimetableRow};
use crate::domain::{Direction, LocalTimestamp, MalformedTimestamp, RowType, StationCode, UtcOffset};
use crate::stations::StationDirectory;

/// Status text shown for cancelled trains.
pub const CANCELLED_TEXT: &str = "Cancelled";

/// Everything a row needs besides the train itself.
#[derive(Debug, Clone, Copy)]
pub struct BoardContext<'a> {
    pub directory: &'a StationDirectory,
    pub target: &'a StationCode,
    pub direction: Direction,
    pub offset: UtcOffset,
}

/// A display-ready board row.
///
/// Only produced when every field resolved; there are no partial rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// "Commuter line I" or "IC 27".
    pub train_label: String,
    /// Long name of the train's first stop.
    pub origin: String,
    /// Long name of the train's last stop.
    pub destination: String,
    /// Scheduled `HH:MM`, or `"<live> (<scheduled>)"` when they differ.
    pub time_text: String,
    /// Minutes late, or "Cancelled".
    pub status_text: String,
    pub is_late: bool,
    pub is_cancelled: bool,
    /// Scheduled local time at the target station.
    #[serde(skip)]
    pub scheduled: LocalTimestamp,
}

/// Why a train produced no row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowSkip {
    /// The train has no row of the wanted type at the target station
    #[error("no {row_type} row at station {station}")]
    NoMatchingRow { station: StationCode, row_type: RowType },

    /// The origin or destination code is not in the directory
    #[error("unknown station code {0}")]
    UnknownStation(String),

    /// A time on the selected row is missing or not a valid API timestamp
    #[error(transparent)]
    MalformedTimestamp(#[from] MalformedTimestamp),
}

/// Label for a train: its commuter line if it has one, else type and number.
pub fn train_label(train: &RawTrain) -> String {
    match train.commuter_line() {
        Some(line) => format!("Commuter line {line}"),
        None => format!("{} {}", train.train_type, train.train_number),
    }
}

/// First row at the target station with the direction's row type.
fn target_row<'t>(train: &'t RawTrain, ctx: &BoardContext<'_>) -> Result<&'t TimetableRow, RowSkip> {
    let row_type = ctx.direction.row_type();

    train
        .time_table_rows
        .iter()
        .find(|row| {
            row.station_short_code == ctx.target.as_str() && row.row_type == Some(row_type)
        })
        .ok_or_else(|| RowSkip::NoMatchingRow {
            station: ctx.target.clone(),
            row_type,
        })
}

/// Long name for a station code taken from a timetable row.
fn long_name(code: &str, directory: &StationDirectory) -> Result<String, RowSkip> {
    directory
        .long_name_for(code)
        .map(str::to_string)
        .ok_or_else(|| RowSkip::UnknownStation(code.to_uppercase()))
}

/// Build the board row for one train.
///
/// # Errors
///
/// Returns a [`RowSkip`] when the train has no matching row at the target,
/// when its origin or destination is unknown, or when a needed timestamp
/// is missing or malformed. The whole train is skipped in each case. Other
/// stops only contribute their station codes.
pub fn build_row(train: &RawTrain, ctx: &BoardContext<'_>) -> Result<DisplayRow, RowSkip> {
    let row = target_row(train, ctx)?;

    // A matching row exists, so the sequence is non-empty
    let (Some(first), Some(last)) = (train.time_table_rows.first(), train.time_table_rows.last())
    else {
        return Err(RowSkip::NoMatchingRow {
            station: ctx.target.clone(),
            row_type: ctx.direction.row_type(),
        });
    };
    let origin = long_name(&first.station_short_code, ctx.directory)?;
    let destination = long_name(&last.station_short_code, ctx.directory)?;

    let scheduled = row
        .scheduled_time
        .as_deref()
        .ok_or_else(MalformedTimestamp::missing)?;
    let scheduled = LocalTimestamp::from_api(scheduled, ctx.offset)?;
    let live = match row.live_estimate_time.as_deref().or(row.actual_time.as_deref()) {
        Some(ts) => LocalTimestamp::from_api(ts, ctx.offset)?,
        None => scheduled,
    };

    let scheduled_text = scheduled.hhmm();
    let live_text = live.hhmm();
    let time_differs = live_text != scheduled_text;
    let time_text = if time_differs {
        format!("{live_text} ({scheduled_text})")
    } else {
        scheduled_text
    };

    let (status_text, delayed) = if train.cancelled {
        (CANCELLED_TEXT.to_string(), false)
    } else {
        let minutes = row.difference_in_minutes.unwrap_or(0);
        (minutes.to_string(), minutes > 0)
    };

    Ok(DisplayRow {
        train_label: train_label(train),
        origin,
        destination,
        time_text,
        status_text,
        is_late: time_differs || delayed,
        is_cancelled: train.cancelled,
        scheduled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::StationEntry;

    fn directory() -> StationDirectory {
        StationDirectory::from_entries(vec![
            StationEntry::new("HKI", "Helsinki asema"),
            StationEntry::new("PSL", "Pasila asema"),
            StationEntry::new("TPE", "Tampere asema"),
        ])
    }

    fn row(code: &str, row_type: RowType, scheduled: &str) -> TimetableRow {
        TimetableRow {
            station_short_code: code.to_string(),
            row_type: Some(row_type),
            scheduled_time: Some(scheduled.to_string()),
            live_estimate_time: None,
            actual_time: None,
            difference_in_minutes: None,
        }
    }

    /// HKI 08:00 -> PSL 08:05/08:06 -> TPE 09:30
    fn ic_train() -> RawTrain {
        RawTrain {
            train_number: 27,
            train_type: "IC".to_string(),
            commuter_line_id: Some(String::new()),
            cancelled: false,
            time_table_rows: vec![
                row("HKI", RowType::Departure, "2024-01-10T08:00:00.000Z"),
                row("PSL", RowType::Arrival, "2024-01-10T08:05:00.000Z"),
                row("PSL", RowType::Departure, "2024-01-10T08:06:00.000Z"),
                row("TPE", RowType::Arrival, "2024-01-10T09:30:00.000Z"),
            ],
        }
    }

    fn build(train: &RawTrain, target: &str, direction: Direction) -> Result<DisplayRow, RowSkip> {
        let directory = directory();
        let target = StationCode::parse(target).unwrap();
        let ctx = BoardContext {
            directory: &directory,
            target: &target,
            direction,
            offset: UtcOffset::UTC,
        };
        build_row(train, &ctx)
    }

    #[test]
    fn on_time_departure() {
        let r = build(&ic_train(), "HKI", Direction::Departing).unwrap();
        assert_eq!(r.train_label, "IC 27");
        assert_eq!(r.origin, "Helsinki asema");
        assert_eq!(r.destination, "Tampere asema");
        assert_eq!(r.time_text, "08:00");
        assert_eq!(r.status_text, "0");
        assert!(!r.is_late);
        assert!(!r.is_cancelled);
    }

    #[test]
    fn picks_row_matching_direction() {
        let dep = build(&ic_train(), "PSL", Direction::Departing).unwrap();
        assert_eq!(dep.time_text, "08:06");

        let arr = build(&ic_train(), "PSL", Direction::Arriving).unwrap();
        assert_eq!(arr.time_text, "08:05");
    }

    #[test]
    fn first_matching_row_wins() {
        let mut train = ic_train();
        train
            .time_table_rows
            .insert(3, row("PSL", RowType::Departure, "2024-01-10T08:20:00.000Z"));
        let r = build(&train, "PSL", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:06");
    }

    #[test]
    fn origin_and_destination_ignore_target() {
        let r = build(&ic_train(), "PSL", Direction::Arriving).unwrap();
        assert_eq!(r.origin, "Helsinki asema");
        assert_eq!(r.destination, "Tampere asema");
    }

    #[test]
    fn no_matching_row() {
        let err = build(&ic_train(), "HKI", Direction::Arriving).unwrap_err();
        assert_eq!(
            err,
            RowSkip::NoMatchingRow {
                station: StationCode::parse("HKI").unwrap(),
                row_type: RowType::Arrival,
            }
        );

        let err = build(&ic_train(), "OL", Direction::Departing).unwrap_err();
        assert!(matches!(err, RowSkip::NoMatchingRow { .. }));
    }

    #[test]
    fn empty_stop_sequence_is_no_matching_row() {
        let mut train = ic_train();
        train.time_table_rows.clear();
        let err = build(&train, "HKI", Direction::Departing).unwrap_err();
        assert!(matches!(err, RowSkip::NoMatchingRow { .. }));
    }

    #[test]
    fn unknown_destination_skips() {
        let mut train = ic_train();
        train
            .time_table_rows
            .push(row("OL", RowType::Arrival, "2024-01-10T14:00:00.000Z"));
        let err = build(&train, "HKI", Direction::Departing).unwrap_err();
        assert_eq!(err, RowSkip::UnknownStation("OL".to_string()));
    }

    #[test]
    fn unknown_origin_skips() {
        let mut train = ic_train();
        train.time_table_rows[0].station_short_code = "xx".to_string();
        let err = build(&train, "TPE", Direction::Arriving).unwrap_err();
        assert_eq!(err, RowSkip::UnknownStation("XX".to_string()));
    }

    #[test]
    fn commuter_label() {
        let mut train = ic_train();
        train.commuter_line_id = Some("I".to_string());
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.train_label, "Commuter line I");
    }

    #[test]
    fn missing_commuter_field_uses_type_and_number() {
        let mut train = ic_train();
        train.commuter_line_id = None;
        assert_eq!(train_label(&train), "IC 27");
    }

    #[test]
    fn live_estimate_differs_from_schedule() {
        let mut train = ic_train();
        train.time_table_rows[0].live_estimate_time = Some("2024-01-10T08:05:00.000Z".to_string());
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:05 (08:00)");
        assert!(r.is_late);
    }

    #[test]
    fn live_estimate_preferred_over_actual() {
        let mut train = ic_train();
        train.time_table_rows[0].live_estimate_time = Some("2024-01-10T08:00:00.000Z".to_string());
        train.time_table_rows[0].actual_time = Some("2024-01-10T08:09:00.000Z".to_string());
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:00");
        assert!(!r.is_late);
    }

    #[test]
    fn actual_time_used_without_estimate() {
        let mut train = ic_train();
        train.time_table_rows[0].actual_time = Some("2024-01-10T08:02:00.000Z".to_string());
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:02 (08:00)");
        assert!(r.is_late);
    }

    #[test]
    fn seconds_only_difference_is_not_late() {
        let mut train = ic_train();
        train.time_table_rows[0].actual_time = Some("2024-01-10T08:00:40.000Z".to_string());
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:00");
        assert!(!r.is_late);
    }

    #[test]
    fn positive_difference_marks_late() {
        let mut train = ic_train();
        train.time_table_rows[0].difference_in_minutes = Some(3);
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:00");
        assert_eq!(r.status_text, "3");
        assert!(r.is_late);
    }

    #[test]
    fn early_train_is_not_late() {
        let mut train = ic_train();
        train.time_table_rows[0].difference_in_minutes = Some(-1);
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.status_text, "-1");
        assert!(!r.is_late);
    }

    #[test]
    fn cancelled_ignores_difference() {
        let mut train = ic_train();
        train.cancelled = true;
        train.time_table_rows[0].difference_in_minutes = Some(12);
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.status_text, "Cancelled");
        assert!(r.is_cancelled);
        assert!(!r.is_late);
    }

    #[test]
    fn malformed_scheduled_time_skips() {
        let mut train = ic_train();
        train.time_table_rows[0].scheduled_time = Some("2024-01-10T08:00:00Z".to_string());
        let err = build(&train, "HKI", Direction::Departing).unwrap_err();
        assert!(matches!(err, RowSkip::MalformedTimestamp(_)));
    }

    #[test]
    fn missing_scheduled_time_on_target_skips() {
        let mut train = ic_train();
        train.time_table_rows[0].scheduled_time = None;
        let err = build(&train, "HKI", Direction::Departing).unwrap_err();
        assert_eq!(err, RowSkip::MalformedTimestamp(MalformedTimestamp::missing()));
    }

    #[test]
    fn gaps_in_other_stops_do_not_matter() {
        let mut train = ic_train();
        train.time_table_rows[1].scheduled_time = None;
        train.time_table_rows[2].row_type = None;
        let r = build(&train, "HKI", Direction::Departing).unwrap();
        assert_eq!(r.time_text, "08:00");
        assert_eq!(r.destination, "Tampere asema");
    }

    #[test]
    fn malformed_live_time_skips() {
        let mut train = ic_train();
        train.time_table_rows[0].live_estimate_time = Some("soon".to_string());
        let err = build(&train, "HKI", Direction::Departing).unwrap_err();
        assert!(matches!(err, RowSkip::MalformedTimestamp(_)));
    }

    #[test]
    fn offset_applies_to_both_times() {
        let mut train = ic_train();
        train.time_table_rows[0].live_estimate_time = Some("2024-01-10T08:04:00.000Z".to_string());
        let directory = directory();
        let target = StationCode::parse("HKI").unwrap();
        let ctx = BoardContext {
            directory: &directory,
            target: &target,
            direction: Direction::Departing,
            offset: UtcOffset::from_hours(2).unwrap(),
        };
        let r = build_row(&train, &ctx).unwrap();
        assert_eq!(r.time_text, "10:04 (10:00)");
    }

    #[test]
    fn skip_reasons_display() {
        let skip = RowSkip::NoMatchingRow {
            station: StationCode::parse("HKI").unwrap(),
            row_type: RowType::Arrival,
        };
        assert_eq!(skip.to_string(), "no ARRIVAL row at station HKI");
        assert_eq!(
            RowSkip::UnknownStation("OL".into()).to_string(),
            "unknown station code OL"
        );
    }
}

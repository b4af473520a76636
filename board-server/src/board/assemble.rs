//! Turning a raw train list into board rows.

use tracing::{debug, warn};

use crate::digitraffic::RawTrain;

use super::row::{BoardContext, DisplayRow, RowSkip, build_row, train_label};

/// Build up to `max_rows` rows from `trains`, in input order.
///
/// Trains that cannot be shown are logged and left out. Once `max_rows`
/// rows exist, the remaining trains are not examined. An empty result is
/// a valid outcome, not an error.
pub fn assemble(trains: &[RawTrain], ctx: &BoardContext<'_>, max_rows: usize) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(max_rows.min(trains.len()));

    for train in trains {
        if rows.len() >= max_rows {
            break;
        }

        match build_row(train, ctx) {
            Ok(row) => rows.push(row),
            Err(skip @ RowSkip::NoMatchingRow { .. }) => {
                debug!(train = %train_label(train), %skip, "skipping train");
            }
            Err(skip) => {
                warn!(
                    train = %train_label(train),
                    station = %ctx.target,
                    %skip,
                    "skipping train"
                );
            }
        }
    }

    rows
}

/// Stable sort by scheduled local time. Equal times keep input order.
pub fn sort_by_scheduled(rows: &mut [DisplayRow]) {
    rows.sort_by_key(|row| row.scheduled);
}

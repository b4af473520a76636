//! Askama templates for the web frontend.

use askama::Template;

use crate::board::DisplayRow;
use crate::domain::Direction;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the station search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub directions: [Direction; 2],
    pub station_count: usize,
}

impl IndexTemplate {
    pub fn new(station_count: usize) -> Self {
        Self {
            directions: Direction::ALL,
            station_count,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Board fragment with one line per train.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub station: String,
    pub direction_label: &'static str,
    pub time_heading: &'static str,
    pub rows: Vec<RowView>,
}

/// Single message fragment ("Station not found." and friends).
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Board row view model.
#[derive(Debug, Clone)]
pub struct RowView {
    pub train: String,
    pub origin: String,
    pub destination: String,
    pub time: String,
    pub status: String,
    pub highlighted: bool,
}

impl RowView {
    /// CSS class for the time and status cells.
    pub fn emphasis(&self) -> &'static str {
        if self.highlighted { "late" } else { "" }
    }
}

impl From<&DisplayRow> for RowView {
    fn from(row: &DisplayRow) -> Self {
        Self {
            train: row.train_label.clone(),
            origin: row.origin.clone(),
            destination: row.destination.clone(),
            time: row.time_text.clone(),
            status: row.status_text.clone(),
            highlighted: row.is_late || row.is_cancelled,
        }
    }
}

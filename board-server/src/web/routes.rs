//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::board::{BoardError, query_board};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Shown when the entered name is not a known station.
const STATION_NOT_FOUND: &str = "Station not found.";

/// Shown when a board has no rows.
const NO_TRAINS: &str = "No trains found for this station.";

/// Shown when live train data could not be fetched.
const TRAINS_UNAVAILABLE: &str = "Train data is unavailable right now.";

/// Default number of station suggestions.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on station suggestions.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/board", get(station_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::new(state.directory.len())
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Autocomplete station names.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let stations = state
        .directory
        .suggest(&req.q, limit)
        .into_iter()
        .filter_map(|name| {
            state.directory.code_for(name).map(|code| StationSearchResult {
                code: code.to_string(),
                name: name.to_string(),
            })
        })
        .collect();

    Json(StationSearchResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Render a message fragment with the given status.
fn message_fragment(status: StatusCode, message: &str) -> Result<Response, AppError> {
    let html = MessageTemplate {
        message: message.to_string(),
    }
    .render()
    .map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Board of departures or arrivals for one station.
async fn station_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<BoardRequest>,
) -> Result<Response, AppError> {
    let direction = req.direction.unwrap_or_default();
    let html = accepts_html(&headers);

    let result = query_board(
        state.feed.as_ref(),
        &state.directory,
        &state.config,
        &req.station,
        direction,
    )
    .await;

    let board = match result {
        Ok(board) => board,
        Err(e) if html => {
            let err = AppError::from(e);
            return message_fragment(err.status(), err.message());
        }
        Err(e) => return Err(e.into()),
    };

    if !html {
        return Ok(Json(BoardResponse::from_board(&board, NO_TRAINS)).into_response());
    }

    if board.is_empty() {
        return message_fragment(StatusCode::OK, NO_TRAINS);
    }

    let template = BoardTemplate {
        station: board.station.clone(),
        direction_label: direction.label(),
        time_heading: direction.time_heading(),
        rows: board.rows().iter().map(RowView::from).collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::NotFound { message }
            | AppError::BadGateway { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<BoardError> for AppError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::StationNotFound(_) => AppError::NotFound {
                message: STATION_NOT_FOUND.to_string(),
            },
            BoardError::Fetch(err) => {
                warn!(error = %err, "train fetch failed");
                AppError::BadGateway {
                    message: TRAINS_UNAVAILABLE.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, message = self.message(), "request failed");

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

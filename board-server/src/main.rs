use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use board_server::board::BoardConfig;
use board_server::digitraffic::{
    DEFAULT_BASE_URL, DigitrafficClient, DigitrafficConfig, Feed, MockDigitrafficClient,
};
use board_server::domain::UtcOffset;
use board_server::stations::StationDirectory;
use board_server::web::{AppState, create_router};

/// Read an environment variable, falling back to `default` when unset.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Station directory (fail fast if unavailable)
    let stations_file = env_or("BOARD_STATIONS_FILE", "stationList.json");
    let directory =
        StationDirectory::load(&stations_file).expect("Failed to load station directory");
    info!(file = %stations_file, stations = directory.len(), "loaded station directory");

    // Offset is fixed for the lifetime of the process
    let utc_offset = match std::env::var("BOARD_UTC_OFFSET_HOURS") {
        Ok(hours) => {
            let hours: i32 = hours
                .parse()
                .expect("BOARD_UTC_OFFSET_HOURS must be a whole number of hours");
            UtcOffset::from_hours(hours).expect("Invalid BOARD_UTC_OFFSET_HOURS")
        }
        Err(_) => UtcOffset::from_host(),
    };
    info!(offset = %utc_offset, "using local time offset");

    let feed = match std::env::var("BOARD_MOCK_DIR") {
        Ok(dir) => {
            warn!(%dir, "serving saved trains instead of the live API");
            let mock = MockDigitrafficClient::new(&dir).expect("Failed to load mock trains");
            Feed::Mock(mock)
        }
        Err(_) => {
            let config = DigitrafficConfig::default()
                .with_base_url(env_or("BOARD_API_URL", DEFAULT_BASE_URL));
            let client = DigitrafficClient::new(config).expect("Failed to create API client");
            Feed::Live(client)
        }
    };

    let sort_by_time = matches!(env_or("BOARD_SORT_BY_TIME", "false").as_str(), "1" | "true");
    let config = BoardConfig::new(utc_offset).with_sort_by_scheduled_time(sort_by_time);
    let state = AppState::new(feed, directory, config);

    let static_dir = env_or("BOARD_STATIC_DIR", "static");
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = env_or("BOARD_LISTEN_ADDR", "127.0.0.1:3000")
        .parse()
        .expect("BOARD_LISTEN_ADDR must be host:port");

    info!("Station boards listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

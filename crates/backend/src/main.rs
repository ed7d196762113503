use anyhow::Context;
use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use backend::api::AppState;
use backend::routes::configure_routes;
use backend::shared::config;
use backend::shared::data::record_source::{JsonFileSource, RecordSourceError};
use backend::shared::data::store::SalesStore;
use backend::system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config().context("failed to load config.toml")?;

    let records_path = config::get_records_path(&config);
    let source = JsonFileSource::new(&records_path);
    let store = match SalesStore::load(&source) {
        Ok(store) => store,
        // Без файла данных дашборды просто пустые
        Err(RecordSourceError::Io { path, source }) => {
            tracing::warn!(
                "Sales records unavailable at {} ({}), starting with no data",
                path.display(),
                source
            );
            SalesStore::default()
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load sales records from {}", records_path.display())
            })
        }
    };
    if store.is_empty() {
        tracing::warn!("Sales store is empty, dashboards will show no data");
    } else {
        tracing::info!("Sales store ready: {} records", store.len());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = configure_routes(AppState::new(store, config.dashboard.clone()))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid server address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::prefs::{PREFERENCES_PATH, PreferenceStore};
use crate::state::AppState;

mod format;
mod i18n;
mod poller;
mod prefs;
mod state;
mod styles;
mod svg;
mod themes;
mod views;

#[tokio::main]
async fn main() -> Result<()> {
    shared::init_tracing!()?;
    let settings = shared::load_settings!()?;
    let bind_addr = settings.bind_addr.clone();

    let state = Arc::new(AppState::new(
        settings,
        PreferenceStore::new(PREFERENCES_PATH),
    ));

    poller::spawn_poller(Arc::clone(&state));

    let app = Router::new()
        .route("/", get(views::index))
        .route("/styles.css", get(views::styles_css))
        .route("/fragments/metrics", get(views::fragment_metrics))
        .route("/prefs/timeframe", post(views::set_timeframe))
        .route("/prefs/theme", post(views::set_theme))
        .route("/prefs/language", post(views::set_language))
        .route("/refresh", post(views::refresh_now))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    info!("dashboard listening on {bind_addr}");
    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;
    Ok(())
}

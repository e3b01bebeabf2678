use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use shared::records::RequestRecord;
use tracing::{debug, warn};

use crate::state::AppState;

/// Spawns the periodic poll of the upstream record list. Each tick runs the
/// full fetch-and-install path; a failed poll keeps the previous snapshot.
pub fn spawn_poller(state: Arc<AppState>) {
    let period = std::time::Duration::from_secs(state.settings.poll_interval_secs);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            poll_once(&state).await;
        }
    });
}

/// Fetches the upstream records and installs them as the latest snapshot.
/// A response from a fetch that was superseded while in flight is discarded
/// (see [`crate::state::Snapshot::replace_if_newer`]).
pub async fn poll_once(state: &AppState) {
    let started_at = Utc::now();
    let url = format!(
        "{}/completion_requests",
        state.settings.metrics_base_url.trim_end_matches('/')
    );

    match fetch_records(&state.client, &url).await {
        Ok(records) => {
            let installed = {
                let mut snapshot = state.snapshot.write().unwrap();
                snapshot.replace_if_newer(started_at, Utc::now(), records)
            };
            if !installed {
                debug!("discarded poll response superseded while in flight");
            }
        }
        Err(e) => warn!("failed to poll {url}: {e:#}"),
    }
}

async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<RequestRecord>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

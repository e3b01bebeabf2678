use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use shared::config::Settings;
use shared::records::RequestRecord;

use crate::prefs::PreferenceStore;

pub struct AppState {
    pub settings: Settings,
    pub snapshot: RwLock<Snapshot>,
    pub prefs: PreferenceStore,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings, prefs: PreferenceStore) -> Self {
        AppState {
            settings,
            snapshot: RwLock::new(Snapshot::empty()),
            prefs,
            client: reqwest::Client::new(),
        }
    }
}

/// The latest successfully fetched record set.
///
/// `started_at` is the instant the winning fetch began. When a periodic poll
/// and a manual refresh overlap, whichever response carries the later start
/// instant wins and the other is discarded (last-write-wins; arrival order
/// does not matter).
pub struct Snapshot {
    pub records: Arc<Vec<RequestRecord>>,
    pub fetched_at: Option<DateTime<Utc>>,
    started_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Snapshot {
            records: Arc::new(Vec::new()),
            fetched_at: None,
            started_at: None,
        }
    }

    /// Installs `records` unless the current snapshot came from a fetch that
    /// started later. Returns whether the snapshot was replaced.
    pub fn replace_if_newer(
        &mut self,
        started_at: DateTime<Utc>,
        fetched_at: DateTime<Utc>,
        records: Vec<RequestRecord>,
    ) -> bool {
        if self.started_at.is_some_and(|current| current > started_at) {
            return false;
        }
        self.records = Arc::new(records);
        self.fetched_at = Some(fetched_at);
        self.started_at = Some(started_at);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn stale_response_is_discarded() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let mut snapshot = Snapshot::empty();

        // The later fetch completes first
        assert!(snapshot.replace_if_newer(
            t0 + Duration::seconds(30),
            t0 + Duration::seconds(31),
            Vec::new()
        ));
        assert!(!snapshot.replace_if_newer(t0, t0 + Duration::seconds(35), Vec::new()));
        assert_eq!(snapshot.fetched_at, Some(t0 + Duration::seconds(31)));
    }

    #[test]
    fn newer_fetch_replaces_older_snapshot() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let mut snapshot = Snapshot::empty();

        assert!(snapshot.replace_if_newer(t0, t0 + Duration::seconds(1), Vec::new()));
        assert!(snapshot.replace_if_newer(
            t0 + Duration::seconds(30),
            t0 + Duration::seconds(31),
            Vec::new()
        ));
        assert_eq!(snapshot.fetched_at, Some(t0 + Duration::seconds(31)));
    }
}

use chrono::{DateTime, Duration, Utc};

/// A user-selectable chart window: `(id, label, duration, bucket width)`.
///
/// `hours: None` is the "all history" sentinel. A live rolling chart has no
/// natural upper bound for it, so [`resolve_range`] maps it to a fixed
/// 24-hour display window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeframe {
    pub id: &'static str,
    pub label: &'static str,
    pub hours: Option<i64>,
    pub bucket_width_secs: i64,
}

/// Bucket widths are tuned so every bounded window renders as a
/// chart-friendly number of bars (roughly 60-180) regardless of its length.
pub const TIMEFRAMES: &[Timeframe] = &[
    Timeframe { id: "1h", label: "1 Hour", hours: Some(1), bucket_width_secs: 60 },
    Timeframe { id: "6h", label: "6 Hours", hours: Some(6), bucket_width_secs: 120 },
    Timeframe { id: "12h", label: "12 Hours", hours: Some(12), bucket_width_secs: 600 },
    Timeframe { id: "1d", label: "1 Day", hours: Some(24), bucket_width_secs: 1200 },
    Timeframe { id: "1w", label: "1 Week", hours: Some(168), bucket_width_secs: 7200 },
    Timeframe { id: "1mo", label: "1 Month", hours: Some(720), bucket_width_secs: 43200 },
    Timeframe { id: "all", label: "All Time", hours: None, bucket_width_secs: 3600 },
];

pub const DEFAULT_TIMEFRAME_ID: &str = "all";

/// Display window for the unbounded sentinel, and the duration unknown ids
/// fall back to.
const FALLBACK_WINDOW_HOURS: i64 = 24;

// Kept in sync with the "1d" row of TIMEFRAMES (asserted in tests).
const FALLBACK: &Timeframe =
    &Timeframe { id: "1d", label: "1 Day", hours: Some(24), bucket_width_secs: 1200 };

impl Timeframe {
    /// Looks up a timeframe by id. Unknown ids resolve to the 1-day entry
    /// rather than erroring, so a stale stored preference still renders.
    pub fn get(id: &str) -> &'static Timeframe {
        TIMEFRAMES.iter().find(|tf| tf.id == id).unwrap_or(FALLBACK)
    }

    pub fn bucket_width(&self) -> Duration {
        Duration::seconds(self.bucket_width_secs)
    }
}

/// Computes the concrete `[start, end)` wall-clock interval for a timeframe.
///
/// `now` is supplied by the caller, never read from a clock, so repeated
/// calls with the same arguments are deterministic.
pub fn resolve_range(tf: &Timeframe, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let hours = tf.hours.unwrap_or(FALLBACK_WINDOW_HOURS);
    (now - Duration::hours(hours), now)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn resolves_bounded_timeframes() {
        let now = fixed_now();
        for (id, hours) in [("1h", 1), ("6h", 6), ("12h", 12), ("1d", 24), ("1w", 168), ("1mo", 720)] {
            let (start, end) = resolve_range(Timeframe::get(id), now);
            assert_eq!(end, now, "{id}");
            assert_eq!(start, now - Duration::hours(hours), "{id}");
        }
    }

    #[test]
    fn all_time_resolves_to_24h_display_window() {
        let now = fixed_now();
        let (start, end) = resolve_range(Timeframe::get("all"), now);
        assert_eq!(end, now);
        assert_eq!(start, now - Duration::hours(24));
    }

    #[test]
    fn unknown_id_falls_back_to_one_day() {
        let tf = Timeframe::get("3y");
        assert_eq!(tf.id, "1d");
        assert_eq!(tf.bucket_width_secs, 1200);
    }

    #[test]
    fn fallback_entry_matches_table_row() {
        let one_day = TIMEFRAMES.iter().find(|tf| tf.id == "1d").unwrap();
        assert_eq!(one_day, FALLBACK);
    }

    #[test]
    fn default_timeframe_exists_in_table() {
        assert!(TIMEFRAMES.iter().any(|tf| tf.id == DEFAULT_TIMEFRAME_ID));
    }
}

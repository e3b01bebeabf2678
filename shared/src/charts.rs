//! Time-bucketed aggregation for chart rendering.
//!
//! The pipeline is pure: callers pass the record snapshot, the timeframe,
//! and the current instant, and get back one value per bucket. Nothing here
//! reads a clock or retains state between calls, so rerunning with the same
//! inputs yields identical output.

use chrono::{DateTime, Duration, Utc};

use crate::records::RequestRecord;
use crate::timeframes::{self, Timeframe};

/// One aggregated value for one bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregatedPoint<T> {
    pub timestamp: DateTime<Utc>,
    pub value: T,
}

/// One named chart trace: one point per generated bucket, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series<T> {
    pub label: String,
    pub points: Vec<AggregatedPoint<T>>,
}

impl<T: PartialEq> Series<T> {
    /// True when every point sits at `value` (the reducer's empty output).
    /// Secondary series that are flat at the empty value may be omitted from
    /// a render; the primary series never is, since an all-zero chart means
    /// "no traffic", not "no data".
    pub fn is_flat_at(&self, value: &T) -> bool {
        self.points.iter().all(|p| p.value == *value)
    }
}

/// Generates the ordered bucket start times covering a timeframe's window.
///
/// The resolved start is rounded up and the end rounded down to multiples of
/// the bucket width, so boundaries stay pinned to clean wall-clock positions
/// (a 10-minute bucket always starts at :00, :10, :20, ...) instead of
/// drifting as `now` advances between polls. The rounded range can be
/// shorter than one bucket width, in which case the sequence is empty.
pub fn generate_buckets(tf: &Timeframe, now: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let (start, end) = timeframes::resolve_range(tf, now);
    let width_ms = tf.bucket_width_secs * 1000;

    let first_ms = -(-start.timestamp_millis()).div_euclid(width_ms) * width_ms;
    let last_ms = end.timestamp_millis().div_euclid(width_ms) * width_ms;
    if first_ms > last_ms {
        return Vec::new();
    }

    let first = start + Duration::milliseconds(first_ms - start.timestamp_millis());
    let count = (last_ms - first_ms) / width_ms + 1;
    (0..count)
        .map(|i| first + Duration::milliseconds(i * width_ms))
        .collect()
}

/// Assigns each record to at most one bucket and reduces every bucket's
/// members to a single value.
///
/// Membership is left-closed, right-open: a record whose timestamp equals a
/// bucket start belongs to that bucket, never the preceding one. Records
/// falling outside every bucket are silently dropped so out-of-range points
/// cannot distort the requested window. Every bucket appears in the output
/// exactly once, and the reducer sees an empty slice for empty buckets.
///
/// Buckets must be evenly spaced by `bucket_width` (as `generate_buckets`
/// produces); the bucket index is computed directly from the timestamp, so
/// the whole pass is O(records + buckets).
pub fn aggregate<T>(
    records: &[&RequestRecord],
    buckets: &[DateTime<Utc>],
    bucket_width: Duration,
    reduce: impl Fn(&[&RequestRecord]) -> T,
) -> Vec<AggregatedPoint<T>> {
    if buckets.is_empty() {
        return Vec::new();
    }
    let width_ms = bucket_width.num_milliseconds();
    let first_ms = buckets[0].timestamp_millis();

    let mut members: Vec<Vec<&RequestRecord>> = vec![Vec::new(); buckets.len()];
    for record in records {
        let offset = record.timestamp.timestamp_millis() - first_ms;
        if offset < 0 {
            continue;
        }
        let idx = (offset / width_ms) as usize;
        if idx >= buckets.len() {
            continue;
        }
        members[idx].push(record);
    }

    buckets
        .iter()
        .zip(&members)
        .map(|(&timestamp, bucket)| AggregatedPoint { timestamp, value: reduce(bucket) })
        .collect()
}

/// Count-of-records reducer: 0 for empty buckets.
pub fn count(records: &[&RequestRecord]) -> f64 {
    records.len() as f64
}

/// Mean of a numeric field over the records that report it. Yields `None`
/// when no record in the bucket carries the field: "no data" is distinct
/// from an average of zero.
pub fn mean_of(
    field: impl Fn(&RequestRecord) -> Option<f64>,
) -> impl Fn(&[&RequestRecord]) -> Option<f64> {
    move |records| {
        let values: Vec<f64> = records.iter().filter_map(|r| field(r)).collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

/// Aggregates the full record set into a single labeled series.
pub fn series<T>(
    records: &[&RequestRecord],
    tf: &Timeframe,
    now: DateTime<Utc>,
    label: &str,
    reduce: impl Fn(&[&RequestRecord]) -> T,
) -> Series<T> {
    let buckets = generate_buckets(tf, now);
    Series {
        label: label.to_owned(),
        points: aggregate(records, &buckets, tf.bucket_width(), reduce),
    }
}

/// Splits records into disjoint labeled subsets and aggregates each subset
/// against the *same* bucket sequence, so the resulting series share one
/// time axis and can be stacked or grouped directly.
pub fn split_series<T>(
    records: &[&RequestRecord],
    tf: &Timeframe,
    now: DateTime<Utc>,
    partitions: &[(&str, fn(&RequestRecord) -> bool)],
    reduce: impl Fn(&[&RequestRecord]) -> T,
) -> Vec<Series<T>> {
    let buckets = generate_buckets(tf, now);
    partitions
        .iter()
        .map(|&(label, predicate)| {
            let subset: Vec<&RequestRecord> =
                records.iter().copied().filter(|r| predicate(r)).collect();
            Series {
                label: label.to_owned(),
                points: aggregate(&subset, &buckets, tf.bucket_width(), &reduce),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::records::TokenCounts;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn record(timestamp: DateTime<Utc>, success: bool) -> RequestRecord {
        RequestRecord {
            timestamp,
            is_streaming: false,
            success,
            time_to_first_token_ms: None,
            time_to_last_token_ms: None,
            response_time_ms: None,
            tokens: TokenCounts::default(),
            model: None,
            origin: None,
        }
    }

    #[test]
    fn bucket_boundaries_are_width_aligned() {
        // An awkward `now` so the raw range does not fall on bucket edges
        let now = fixed_now() + Duration::seconds(437);
        for tf in timeframes::TIMEFRAMES {
            let width_ms = tf.bucket_width_secs * 1000;
            for bucket in generate_buckets(tf, now) {
                assert_eq!(
                    bucket.timestamp_millis() % width_ms,
                    0,
                    "unaligned bucket in {}",
                    tf.id
                );
            }
        }
    }

    #[test]
    fn bounded_timeframes_hit_the_bucket_count_target() {
        let now = fixed_now();
        for (id, expected) in [("1h", 60), ("6h", 180), ("12h", 72), ("1d", 72), ("1w", 84), ("1mo", 60)] {
            let buckets = generate_buckets(Timeframe::get(id), now);
            // The rounded range drops at most one bucket from either edge
            assert!(
                (expected - 1..=expected + 1).contains(&(buckets.len() as i64)),
                "{id}: got {} buckets",
                buckets.len()
            );
            assert!((60..=181).contains(&buckets.len()), "{id} outside chart-friendly range");
        }
    }

    #[test]
    fn all_time_window_renders_hourly_buckets() {
        let buckets = generate_buckets(Timeframe::get("all"), fixed_now());
        // 24h display window at 1h width; `now` on the hour keeps both edges
        assert_eq!(buckets.len(), 25);
    }

    #[test]
    fn bucket_positions_are_stable_as_now_advances() {
        let tf = Timeframe::get("12h");
        let first = generate_buckets(tf, fixed_now());
        let second = generate_buckets(tf, fixed_now() + Duration::seconds(30));
        // Same aligned grid, not a 30-second drift
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_range_yields_no_buckets() {
        let narrow = Timeframe { id: "1m", label: "1 Minute", hours: Some(0), bucket_width_secs: 3600 };
        let now = fixed_now() + Duration::seconds(437);
        assert!(generate_buckets(&narrow, now).is_empty());
        assert!(aggregate(&[], &[], Duration::seconds(3600), count).is_empty());
    }

    #[test]
    fn boundary_record_lands_in_its_own_bucket() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();
        let buckets = generate_buckets(tf, now);
        let edge = buckets[30];

        let on_edge = record(edge, true);
        let before_edge = record(edge - Duration::milliseconds(1), true);
        let points = aggregate(&[&on_edge, &before_edge], &buckets, tf.bucket_width(), count);

        assert_eq!(points[30].value, 1.0);
        assert_eq!(points[29].value, 1.0);
    }

    #[test]
    fn count_totality_over_in_range_records() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();
        let buckets = generate_buckets(tf, now);

        let in_range: Vec<RequestRecord> = (0..50)
            .map(|i| record(buckets[0] + Duration::seconds(i * 59), i % 3 == 0))
            .collect();
        let too_old = record(buckets[0] - Duration::seconds(1), true);
        let too_new = record(*buckets.last().unwrap() + tf.bucket_width(), true);

        let mut refs: Vec<&RequestRecord> = in_range.iter().collect();
        refs.push(&too_old);
        refs.push(&too_new);

        let points = aggregate(&refs, &buckets, tf.bucket_width(), count);
        let total: f64 = points.iter().map(|p| p.value).sum();
        assert_eq!(total, in_range.len() as f64);
    }

    #[test]
    fn empty_buckets_have_defined_values() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();
        let buckets = generate_buckets(tf, now);

        let counts = aggregate(&[], &buckets, tf.bucket_width(), count);
        assert_eq!(counts.len(), buckets.len());
        assert!(counts.iter().all(|p| p.value == 0.0));

        let means = aggregate(&[], &buckets, tf.bucket_width(), mean_of(|r| r.latency_ms()));
        assert!(means.iter().all(|p| p.value.is_none()));
    }

    #[test]
    fn mean_ignores_records_missing_the_field() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();
        let buckets = generate_buckets(tf, now);

        let mut with_latency = record(buckets[0], true);
        with_latency.response_time_ms = Some(300);
        let mut with_latency_too = record(buckets[0] + Duration::seconds(10), true);
        with_latency_too.response_time_ms = Some(100);
        let without = record(buckets[0] + Duration::seconds(20), true);

        let points = aggregate(
            &[&with_latency, &with_latency_too, &without],
            &buckets,
            tf.bucket_width(),
            mean_of(|r| r.latency_ms()),
        );
        assert_eq!(points[0].value, Some(200.0));
    }

    #[test]
    fn pipeline_is_deterministic() {
        let tf = Timeframe::get("6h");
        let now = fixed_now() + Duration::seconds(437);
        let records: Vec<RequestRecord> = (0..200)
            .map(|i| record(now - Duration::seconds(i * 97), i % 4 != 0))
            .collect();
        let refs: Vec<&RequestRecord> = records.iter().collect();

        let first = split_series(&refs, tf, now, PARTITIONS, count);
        let second = split_series(&refs, tf, now, PARTITIONS, count);
        assert_eq!(first, second);
    }

    const PARTITIONS: &[(&str, fn(&RequestRecord) -> bool)] =
        &[("successful", |r| r.success), ("failed", |r| !r.success)];

    #[test]
    fn split_series_share_one_bucket_axis() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();

        // Two records in the 09:30 bucket, one per outcome
        let ok = record(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap() + Duration::milliseconds(500),
            true,
        );
        let failed = record(Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 10).unwrap(), false);

        let series = split_series(&[&ok, &failed], tf, now, PARTITIONS, count);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "successful");

        let axis: Vec<_> = series[0].points.iter().map(|p| p.timestamp).collect();
        let other_axis: Vec<_> = series[1].points.iter().map(|p| p.timestamp).collect();
        assert_eq!(axis, other_axis);
        // now falls exactly on a minute boundary, so both edges survive rounding
        assert_eq!(axis.len(), 61);

        let bucket_930 = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        for (s, label) in series.iter().zip(["successful", "failed"]) {
            for point in &s.points {
                let expected = if point.timestamp == bucket_930 { 1.0 } else { 0.0 };
                assert_eq!(point.value, expected, "{label} at {}", point.timestamp);
            }
        }
    }

    #[test]
    fn flat_series_detection() {
        let tf = Timeframe::get("1h");
        let now = fixed_now();
        let empty = series::<f64>(&[], tf, now, "failed", count);
        assert!(empty.is_flat_at(&0.0));

        let hit = record(now - Duration::minutes(30), false);
        let busy = series(&[&hit], tf, now, "failed", count);
        assert!(!busy.is_flat_at(&0.0));
    }
}

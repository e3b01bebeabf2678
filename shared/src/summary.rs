use std::collections::HashMap;

use crate::records::RequestRecord;

/// Numeric roll-up of one record subset, feeding the dashboard's stat grids.
///
/// Callers choose the subset: the overview computes it over the whole
/// timeframe window, the streamed/non-streamed tabs over their halves.
/// Averages are `None` when no record in the subset reports the field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub streaming_requests: u64,
    pub non_streaming_requests: u64,

    pub total_tokens: Option<u64>,
    pub avg_tokens_per_request: Option<f64>,
    pub avg_prompt_tokens: Option<f64>,
    pub avg_completion_tokens: Option<f64>,

    pub avg_response_time_ms: Option<f64>,
    pub avg_tokens_per_second: Option<f64>,
    pub avg_time_to_first_token_ms: Option<f64>,
    pub avg_time_to_last_token_ms: Option<f64>,

    /// `(label, count)` sorted by descending count, then label, so equal
    /// counts render in a stable order. Unlabeled records are excluded.
    pub model_distribution: Vec<(String, u64)>,
    pub origin_distribution: Vec<(String, u64)>,
}

impl Summary {
    pub fn compute(records: &[&RequestRecord]) -> Summary {
        let mut summary = Summary {
            total_requests: records.len() as u64,
            ..Summary::default()
        };

        for record in records {
            if record.success {
                summary.successful_requests += 1;
            } else {
                summary.failed_requests += 1;
            }
            if record.is_streaming {
                summary.streaming_requests += 1;
            } else {
                summary.non_streaming_requests += 1;
            }
        }

        let totals: Vec<u64> = records.iter().filter_map(|r| r.tokens.total).collect();
        if !totals.is_empty() {
            let sum: u64 = totals.iter().sum();
            summary.total_tokens = Some(sum);
            summary.avg_tokens_per_request = Some(sum as f64 / totals.len() as f64);
        }
        summary.avg_prompt_tokens = mean(records, |r| r.tokens.prompt.map(|t| t as f64));
        summary.avg_completion_tokens = mean(records, |r| r.tokens.completion.map(|t| t as f64));

        summary.avg_response_time_ms = mean(records, RequestRecord::latency_ms);
        summary.avg_tokens_per_second = mean(records, RequestRecord::tokens_per_second);
        summary.avg_time_to_first_token_ms =
            mean(records, |r| r.time_to_first_token_ms.map(|ms| ms as f64));
        summary.avg_time_to_last_token_ms =
            mean(records, |r| r.time_to_last_token_ms.map(|ms| ms as f64));

        summary.model_distribution = distribution(records, |r| r.model.as_deref());
        summary.origin_distribution = distribution(records, |r| r.origin.as_deref());

        summary
    }

    /// Success rate as a percentage; 0 when there are no requests.
    pub fn success_rate(&self) -> f64 {
        percentage(self.successful_requests, self.total_requests)
    }

    pub fn streaming_percentage(&self) -> f64 {
        percentage(self.streaming_requests, self.total_requests)
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn mean(records: &[&RequestRecord], field: impl Fn(&RequestRecord) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| field(r)).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn distribution(
    records: &[&RequestRecord],
    label: impl Fn(&RequestRecord) -> Option<&str>,
) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in records {
        if let Some(value) = label(record).filter(|v| !v.is_empty()) {
            *counts.entry(value).or_default() += 1;
        }
    }
    let mut sorted: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_owned(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::records::TokenCounts;

    fn record(success: bool, streaming: bool) -> RequestRecord {
        RequestRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            is_streaming: streaming,
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
    fn empty_subset_is_all_defaults() {
        let summary = Summary::compute(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.success_rate(), 0.0);
        assert_eq!(summary.streaming_percentage(), 0.0);
    }

    #[test]
    fn counts_and_rates() {
        let a = record(true, true);
        let b = record(true, false);
        let c = record(false, true);
        let d = record(true, true);
        let summary = Summary::compute(&[&a, &b, &c, &d]);

        assert_eq!(summary.total_requests, 4);
        assert_eq!(summary.successful_requests, 3);
        assert_eq!(summary.failed_requests, 1);
        assert_eq!(summary.streaming_requests, 3);
        assert_eq!(summary.non_streaming_requests, 1);
        assert_eq!(summary.success_rate(), 75.0);
        assert_eq!(summary.streaming_percentage(), 75.0);
    }

    #[test]
    fn token_and_latency_averages_skip_missing_fields() {
        let mut a = record(true, true);
        a.tokens = TokenCounts { total: Some(200), prompt: Some(150), completion: Some(50) };
        a.time_to_first_token_ms = Some(100);
        a.time_to_last_token_ms = Some(1000);
        let mut b = record(true, false);
        b.tokens = TokenCounts { total: Some(100), prompt: None, completion: None };
        b.response_time_ms = Some(500);
        let c = record(false, false);

        let summary = Summary::compute(&[&a, &b, &c]);
        assert_eq!(summary.total_tokens, Some(300));
        assert_eq!(summary.avg_tokens_per_request, Some(150.0));
        assert_eq!(summary.avg_prompt_tokens, Some(150.0));
        assert_eq!(summary.avg_completion_tokens, Some(50.0));
        // a reports 1000ms (last token), b 500ms (response time), c nothing
        assert_eq!(summary.avg_response_time_ms, Some(750.0));
        assert_eq!(summary.avg_time_to_first_token_ms, Some(100.0));
        assert_eq!(summary.avg_time_to_last_token_ms, Some(1000.0));
    }

    #[test]
    fn no_tokens_reported_means_no_averages() {
        let a = record(true, false);
        let summary = Summary::compute(&[&a]);
        assert_eq!(summary.total_tokens, None);
        assert_eq!(summary.avg_tokens_per_request, None);
        assert_eq!(summary.avg_tokens_per_second, None);
    }

    #[test]
    fn distributions_sort_by_count_then_label() {
        let mut a = record(true, false);
        a.model = Some("mistral".to_owned());
        a.origin = Some("cli".to_owned());
        let mut b = record(true, false);
        b.model = Some("llama3".to_owned());
        let mut c = record(true, false);
        c.model = Some("llama3".to_owned());
        let mut d = record(true, false);
        d.model = Some("codegemma".to_owned());
        let mut e = record(true, false);
        e.model = Some(String::new()); // unlabeled

        let summary = Summary::compute(&[&a, &b, &c, &d, &e]);
        assert_eq!(
            summary.model_distribution,
            vec![
                ("llama3".to_owned(), 2),
                ("codegemma".to_owned(), 1),
                ("mistral".to_owned(), 1),
            ]
        );
        assert_eq!(summary.origin_distribution, vec![("cli".to_owned(), 1)]);
    }
}

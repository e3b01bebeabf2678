use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One observed completion request, as returned by the proxy's
/// `/completion_requests` endpoint.
///
/// Records are read-only inputs to aggregation: every field is set by the
/// proxy and nothing downstream mutates them. Optional fields mean "not
/// reported" and are skipped by numeric reducers rather than treated as
/// zero or as errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub is_streaming: bool,
    pub success: bool,
    #[serde(default)]
    pub time_to_first_token_ms: Option<i64>,
    #[serde(default)]
    pub time_to_last_token_ms: Option<i64>,
    #[serde(default)]
    pub response_time_ms: Option<i64>,
    #[serde(default)]
    pub tokens: TokenCounts,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenCounts {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub prompt: Option<u64>,
    #[serde(default)]
    pub completion: Option<u64>,
}

impl RequestRecord {
    /// End-to-end latency for charting. Streamed requests report it as
    /// time-to-last-token, non-streamed ones as total response time; older
    /// proxy versions populate only one of the two.
    pub fn latency_ms(&self) -> Option<f64> {
        self.time_to_last_token_ms
            .or(self.response_time_ms)
            .map(|ms| ms as f64)
    }

    /// Completion tokens per second, when the record reports both the token
    /// count and a positive latency.
    pub fn tokens_per_second(&self) -> Option<f64> {
        let tokens = self.tokens.completion?;
        let latency = self.latency_ms().filter(|ms| *ms > 0.0)?;
        Some(tokens as f64 / (latency / 1000.0))
    }
}

/// The proxy emits RFC 3339 timestamps for newer rows but naive ISO 8601
/// (no UTC offset) for rows written by older versions; naive values are UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn deserializes_rfc3339_timestamp() {
        let record: RequestRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-01-01T10:30:00.500Z",
                "is_streaming": true,
                "success": true,
                "time_to_first_token_ms": 120,
                "time_to_last_token_ms": 1900,
                "tokens": {"total": 150, "prompt": 100, "completion": 50},
                "model": "llama3",
                "origin": "cli"
            }"#,
        )
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(record.timestamp, expected);
        assert_eq!(record.tokens.completion, Some(50));
        assert_eq!(record.model.as_deref(), Some("llama3"));
        assert_eq!(record.response_time_ms, None);
    }

    #[test]
    fn deserializes_naive_timestamp_as_utc() {
        let record: RequestRecord = serde_json::from_str(
            r#"{"timestamp": "2024-06-15T08:00:01", "is_streaming": false, "success": false}"#,
        )
        .unwrap();

        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 1).unwrap()
        );
        assert_eq!(record.tokens, TokenCounts::default());
        assert_eq!(record.origin, None);
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let result: Result<RequestRecord, _> = serde_json::from_str(
            r#"{"timestamp": "yesterday", "is_streaming": false, "success": true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn latency_prefers_time_to_last_token() {
        let record: RequestRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-01-01T00:00:00Z",
                "is_streaming": true,
                "success": true,
                "time_to_last_token_ms": 2000,
                "response_time_ms": 2500
            }"#,
        )
        .unwrap();
        assert_eq!(record.latency_ms(), Some(2000.0));
    }

    #[test]
    fn tokens_per_second_requires_tokens_and_latency() {
        let mut record: RequestRecord = serde_json::from_str(
            r#"{
                "timestamp": "2024-01-01T00:00:00Z",
                "is_streaming": false,
                "success": true,
                "response_time_ms": 2000,
                "tokens": {"completion": 100}
            }"#,
        )
        .unwrap();
        assert_eq!(record.tokens_per_second(), Some(50.0));

        record.tokens.completion = None;
        assert_eq!(record.tokens_per_second(), None);

        record.tokens.completion = Some(100);
        record.response_time_ms = Some(0);
        assert_eq!(record.tokens_per_second(), None);
    }
}

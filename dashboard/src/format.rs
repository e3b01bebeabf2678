//! Display formatting for metric values.

/// Percentage with one decimal place; "0%" when the total is zero.
pub fn percentage(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}

/// Thousands-separated integer formatting.
pub fn number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Millisecond durations render as "123ms" below one second, "1.23s" above.
pub fn response_time(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_handles_zero_total() {
        assert_eq!(percentage(5, 0), "0%");
        assert_eq!(percentage(0, 10), "0.0%");
        assert_eq!(percentage(1, 3), "33.3%");
        assert_eq!(percentage(10, 10), "100.0%");
    }

    #[test]
    fn number_groups_thousands() {
        assert_eq!(number(0), "0");
        assert_eq!(number(999), "999");
        assert_eq!(number(1000), "1,000");
        assert_eq!(number(1234567), "1,234,567");
    }

    #[test]
    fn response_time_switches_units_at_one_second() {
        assert_eq!(response_time(0.0), "0ms");
        assert_eq!(response_time(999.4), "999ms");
        assert_eq!(response_time(1000.0), "1.00s");
        assert_eq!(response_time(2345.0), "2.35s");
    }
}

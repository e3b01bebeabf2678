use chrono::{DateTime, Utc};
use maud::{Markup, html};
use shared::charts::{self, Series};
use shared::records::RequestRecord;
use shared::summary::Summary;
use shared::timeframes::Timeframe;

use crate::format;
use crate::i18n::Translation;
use crate::styles::{Charts as ChartClass, Metrics as MetricsClass};
use crate::svg;

use super::{fmt_opt_ms, metric_item, metric_list, metric_section};

pub fn render(
    records: &[&RequestRecord],
    summary: &Summary,
    tf: &Timeframe,
    now: DateTime<Utc>,
    t: &Translation,
) -> Markup {
    html! {
        (metric_section(t.basic_statistics, html! {
            div.(MetricsClass::SPLIT_LAYOUT) {
                div.(MetricsClass::METRIC_GRID) {
                    (metric_item(t.total_completion_requests, html! {
                        (format::number(summary.total_requests))
                    }))
                    (metric_item(t.success_rate, html! {
                        span style=(format!("color: {}", success_rate_color(summary))) {
                            (format::percentage(summary.successful_requests, summary.total_requests))
                        }
                    }))
                    (metric_item(t.successful_requests, html! {
                        (format::number(summary.successful_requests))
                    }))
                    (metric_item(t.failed_requests, html! {
                        (format::number(summary.failed_requests))
                    }))
                    (metric_item(t.streaming_percentage, html! {
                        (format::percentage(summary.streaming_requests, summary.total_requests))
                    }))
                }
                div.(ChartClass::CHART_CONTAINER) {
                    (request_count_chart(records, tf, now, t))
                }
            }
        }))

        (metric_section(t.performance_metrics, html! {
            div.(MetricsClass::SPLIT_LAYOUT) {
                div.(MetricsClass::METRIC_GRID) {
                    (metric_item(t.avg_response_time, html! {
                        (fmt_opt_ms(summary.avg_response_time_ms))
                    }))
                    @if let Some(tps) = summary.avg_tokens_per_second {
                        (metric_item(t.avg_tokens_per_second, html! {
                            (format!("{tps:.2} ")) (t.tokens_per_second_unit)
                        }))
                    }
                }
                div.(ChartClass::CHART_CONTAINER) {
                    (response_time_chart(records, tf, now, t))
                }
            }
        }))

        (metric_section(t.token_usage, html! {
            div.(MetricsClass::METRIC_GRID) {
                (metric_item(t.total_tokens_used, html! {
                    @match summary.total_tokens {
                        Some(total) => { (format::number(total)) },
                        None => { "n/a" },
                    }
                }))
                (metric_item(t.avg_tokens_per_request, html! {
                    @match summary.avg_tokens_per_request {
                        Some(avg) => { (format!("{avg:.1}")) },
                        None => { "n/a" },
                    }
                }))
            }
        }))

        @if !summary.model_distribution.is_empty() {
            (metric_section(t.model_usage, metric_list(&summary.model_distribution, t.requests_unit)))
        }
        @if !summary.origin_distribution.is_empty() {
            (metric_section(t.request_sources, metric_list(&summary.origin_distribution, t.requests_unit)))
        }
    }
}

/// Perfect and healthy rates render in green, degraded in yellow, anything
/// below 80% in red.
fn success_rate_color(summary: &Summary) -> &'static str {
    let rate = summary.success_rate();
    if rate == 100.0 {
        "var(--color-metric-success)"
    } else if rate >= 90.0 {
        "var(--color-success)"
    } else if rate >= 80.0 {
        "var(--color-warning)"
    } else {
        "var(--color-metric-failed)"
    }
}

fn request_count_chart(
    records: &[&RequestRecord],
    tf: &Timeframe,
    now: DateTime<Utc>,
    t: &Translation,
) -> Markup {
    let series = charts::split_series(
        records,
        tf,
        now,
        &[
            (t.successful_requests, |r: &RequestRecord| r.success),
            (t.failed_requests, |r: &RequestRecord| !r.success),
        ],
        charts::count,
    );

    // The failed series is omitted when flat at zero; the successful series
    // always renders, since an all-zero chart means "no traffic"
    let mut visible: Vec<&Series<f64>> = vec![&series[0]];
    if !series[1].is_flat_at(&0.0) {
        visible.push(&series[1]);
    }

    svg::render_bar_chart(
        &visible,
        &["var(--color-metric-success)", "var(--color-metric-failed)"],
        t.requests_chart_title,
        t.requests_chart_y_axis,
    )
}

fn response_time_chart(
    records: &[&RequestRecord],
    tf: &Timeframe,
    now: DateTime<Utc>,
    t: &Translation,
) -> Markup {
    let series = charts::series(
        records,
        tf,
        now,
        t.response_time_chart_title,
        charts::mean_of(|r| r.latency_ms()),
    );
    svg::render_line_chart(&series, t.response_time_chart_title, t.response_time_chart_y_axis)
}

use maud::{Markup, html};
use shared::summary::Summary;

use crate::format;
use crate::i18n::Translation;
use crate::styles::Metrics as MetricsClass;

use super::{fmt_opt_ms, metric_item, metric_section, token_usage_grid};

/// The streamed tab: counts and latency phases over the streaming subset.
pub fn render(streamed: &Summary, total: &Summary, t: &Translation) -> Markup {
    html! {
        (metric_section(t.tab_streamed, html! {
            div.(MetricsClass::METRIC_GRID) {
                (metric_item(t.streamed_requests_count, html! {
                    (format::number(streamed.total_requests))
                }))
                (metric_item(t.streamed_requests_percent, html! {
                    (format::percentage(streamed.total_requests, total.total_requests))
                }))
            }
        }))

        (metric_section(t.performance_metrics, html! {
            div.(MetricsClass::METRIC_GRID) {
                (metric_item(t.time_to_first_token, html! {
                    (fmt_opt_ms(streamed.avg_time_to_first_token_ms))
                }))
                (metric_item(t.time_to_last_token, html! {
                    (fmt_opt_ms(streamed.avg_time_to_last_token_ms))
                }))
                (metric_item(t.avg_response_time, html! {
                    (fmt_opt_ms(streamed.avg_response_time_ms))
                }))
            }
        }))

        (metric_section(t.token_usage, token_usage_grid(streamed, t)))
    }
}

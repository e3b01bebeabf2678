use maud::{Markup, html};
use shared::summary::Summary;

use crate::format;
use crate::i18n::Translation;
use crate::styles::Metrics as MetricsClass;

use super::{fmt_opt_ms, metric_item, metric_section, token_usage_grid};

/// The non-streamed tab: counts and response time over the blocking subset.
pub fn render(non_streamed: &Summary, total: &Summary, t: &Translation) -> Markup {
    html! {
        (metric_section(t.tab_non_streamed, html! {
            div.(MetricsClass::METRIC_GRID) {
                (metric_item(t.non_streamed_requests_count, html! {
                    (format::number(non_streamed.total_requests))
                }))
                (metric_item(t.non_streamed_requests_percent, html! {
                    (format::percentage(non_streamed.total_requests, total.total_requests))
                }))
            }
        }))

        (metric_section(t.performance_metrics, html! {
            div.(MetricsClass::METRIC_GRID) {
                (metric_item(t.avg_response_time, html! {
                    (fmt_opt_ms(non_streamed.avg_response_time_ms))
                }))
                @if let Some(avg) = non_streamed.avg_tokens_per_request {
                    (metric_item(t.tokens_per_request, html! {
                        (format!("{avg:.1}"))
                    }))
                }
            }
        }))

        (metric_section(t.token_usage, token_usage_grid(non_streamed, t)))
    }
}

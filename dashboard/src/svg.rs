use chrono::{DateTime, Utc};
use maud::{Markup, html};
use shared::charts::Series;

use crate::styles::Charts as ChartClass;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;

const TEXT_STYLE: &str = "fill: var(--color-text); font-family: inherit";
const SVG_CONTAINER_STYLE: &str = "width:100%;height:auto";

/// Tick labels stay short for intra-day windows and pick up the date once
/// the axis spans more than two days.
fn format_tick(ts: DateTime<Utc>, span_hours: i64) -> String {
    if span_hours > 48 {
        ts.format("%b %d").to_string()
    } else {
        ts.format("%H:%M").to_string()
    }
}

fn format_value(v: f64) -> String {
    if v == v.floor() && v.abs() < 1_000_000.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

fn axis_span_hours(timestamps: &[DateTime<Utc>]) -> i64 {
    match (timestamps.first(), timestamps.last()) {
        (Some(first), Some(last)) => (*last - *first).num_hours(),
        _ => 0,
    }
}

/// Bar chart over one or more series sharing the same bucket axis: one slot
/// per bucket, one sub-bar per series. A legend appears only when more than
/// one series is drawn.
pub fn render_bar_chart(
    series: &[&Series<f64>],
    colors: &[&str],
    title: &str,
    y_label: &str,
) -> Markup {
    let Some(primary) = series.first() else {
        return empty_chart(title);
    };
    if primary.points.is_empty() {
        return empty_chart(title);
    }

    let max_val = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.value))
        .fold(0.0_f64, f64::max);
    let max_val = if max_val == 0.0 { 1.0 } else { max_val };

    let chart_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let slot_w = chart_w / primary.points.len() as f64;
    let bar_w = ((slot_w - 1.0) / series.len() as f64).max(0.5);

    let timestamps: Vec<DateTime<Utc>> = primary.points.iter().map(|p| p.timestamp).collect();
    let span_hours = axis_span_hours(&timestamps);

    html! {
        svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) xmlns="http://www.w3.org/2000/svg" style=(SVG_CONTAINER_STYLE) {
            rect width=(WIDTH) height=(HEIGHT) style="fill: var(--color-surface)" {}
            text x=(MARGIN_LEFT) y="14" font-size="12" style=(TEXT_STYLE) { (title) }
            text x=(MARGIN_LEFT - 5.0) y=(MARGIN_TOP + 10.0) font-size="10" text-anchor="end" style=(TEXT_STYLE) {
                (format_value(max_val))
            }
            text x=(MARGIN_LEFT - 5.0) y=(MARGIN_TOP + chart_h) font-size="10" text-anchor="end" style=(TEXT_STYLE) { "0" }
            (y_axis_label(y_label, chart_h))
            @for (s_idx, s) in series.iter().enumerate() {
                @let color = colors.get(s_idx).copied().unwrap_or("var(--color-accent)");
                @for (i, point) in s.points.iter().enumerate() {
                    @let bar_h = (point.value / max_val) * chart_h;
                    @let x = MARGIN_LEFT + i as f64 * slot_w + s_idx as f64 * bar_w;
                    @let y = MARGIN_TOP + chart_h - bar_h;
                    rect x=(x) y=(y) width=(bar_w) height=(bar_h) opacity="0.7" style=(format!("fill: {color}")) {
                        title { (format_tick(point.timestamp, span_hours)) " " (s.label) ": " (format_value(point.value)) }
                    }
                }
            }
            @if series.len() > 1 {
                (legend(series, colors))
            }
            (x_axis(&timestamps, chart_w, span_hours))
        }
    }
}

/// Line chart over an optional-valued series. Buckets without data break the
/// line rather than plotting zero, so gaps read as "no data".
pub fn render_line_chart(series: &Series<Option<f64>>, title: &str, y_label: &str) -> Markup {
    let values: Vec<f64> = series.points.iter().filter_map(|p| p.value).collect();
    if values.is_empty() {
        return empty_chart(title);
    }

    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let range = if (max_val - min_val).abs() < f64::EPSILON {
        1.0
    } else {
        max_val - min_val
    };

    let chart_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let denom = (series.points.len() - 1).max(1) as f64;

    let position = |i: usize, val: f64| {
        let x = MARGIN_LEFT + (i as f64 / denom) * chart_w;
        let y = MARGIN_TOP + chart_h - ((val - min_val) / range) * chart_h;
        (x, y)
    };

    // Consecutive runs of present values become polyline segments
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, point) in series.points.iter().enumerate() {
        match point.value {
            Some(val) => {
                let (x, y) = position(i, val);
                if !current.is_empty() {
                    current.push(' ');
                }
                use std::fmt::Write;
                let _ = write!(current, "{x},{y}");
            }
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let timestamps: Vec<DateTime<Utc>> = series.points.iter().map(|p| p.timestamp).collect();
    let span_hours = axis_span_hours(&timestamps);

    html! {
        svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) xmlns="http://www.w3.org/2000/svg" style=(SVG_CONTAINER_STYLE) {
            rect width=(WIDTH) height=(HEIGHT) style="fill: var(--color-surface)" {}
            text x=(MARGIN_LEFT) y="14" font-size="12" style=(TEXT_STYLE) { (title) }
            text x=(MARGIN_LEFT - 5.0) y=(MARGIN_TOP + 10.0) font-size="10" text-anchor="end" style=(TEXT_STYLE) {
                (format_value(max_val))
            }
            text x=(MARGIN_LEFT - 5.0) y=(MARGIN_TOP + chart_h) font-size="10" text-anchor="end" style=(TEXT_STYLE) {
                (format_value(min_val))
            }
            (y_axis_label(y_label, chart_h))
            @for points in &segments {
                polyline points=(points) fill="none" stroke-width="2" style="stroke: var(--color-accent)" {}
            }
            @for (i, point) in series.points.iter().enumerate() {
                @if let Some(val) = point.value {
                    @let (x, y) = position(i, val);
                    circle cx=(x) cy=(y) r="3" style="fill: var(--color-accent)" {
                        title { (format_tick(point.timestamp, span_hours)) ": " (format_value(val)) }
                    }
                }
            }
            (x_axis(&timestamps, chart_w, span_hours))
        }
    }
}

fn y_axis_label(label: &str, chart_h: f64) -> Markup {
    let mid_y = MARGIN_TOP + chart_h / 2.0;
    html! {
        text x="12" y=(mid_y) font-size="10" text-anchor="middle"
            transform=(format!("rotate(-90 12 {mid_y})")) style=(TEXT_STYLE)
        {
            (label)
        }
    }
}

fn legend<T>(series: &[&Series<T>], colors: &[&str]) -> Markup {
    html! {
        @for (i, (s, color)) in series.iter().zip(colors).enumerate() {
            @let x = WIDTH - MARGIN_RIGHT - 110.0;
            @let y = 8.0 + i as f64 * 14.0;
            rect x=(x) y=(y) width="10" height="10" opacity="0.7" style=(format!("fill: {color}")) {}
            text x=(x + 14.0) y=(y + 9.0) font-size="10" style=(TEXT_STYLE) { (s.label) }
        }
    }
}

fn x_axis(timestamps: &[DateTime<Utc>], chart_w: f64, span_hours: i64) -> Markup {
    let label_y = HEIGHT - 5.0;
    html! {
        @if let Some(ts) = timestamps.first() {
            text x=(MARGIN_LEFT) y=(label_y) font-size="11" text-anchor="start" style=(TEXT_STYLE) {
                (format_tick(*ts, span_hours))
            }
        }
        @if timestamps.len() > 2 {
            @let mid = timestamps.len() / 2;
            @let mid_x = MARGIN_LEFT + chart_w / 2.0;
            text x=(mid_x) y=(label_y) font-size="11" text-anchor="middle" style=(TEXT_STYLE) {
                (format_tick(timestamps[mid], span_hours))
            }
        }
        @if let Some(ts) = timestamps.last() {
            @let end_x = MARGIN_LEFT + chart_w;
            text x=(end_x) y=(label_y) font-size="11" text-anchor="end" style=(TEXT_STYLE) {
                (format_tick(*ts, span_hours))
            }
        }
    }
}

pub fn empty_chart(title: &str) -> Markup {
    html! {
        div.(ChartClass::CHART_EMPTY) { (title) }
    }
}

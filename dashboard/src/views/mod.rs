use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};
use serde::Deserialize;
use shared::records::RequestRecord;
use shared::summary::Summary;
use shared::timeframes::{TIMEFRAMES, Timeframe, resolve_range};
use tracing::warn;

use crate::format;
use crate::i18n::{LANGUAGES, Language, Translation};
use crate::poller;
use crate::state::AppState;
use crate::styles::{
    self, Global as GlobalClass, Metrics as MetricsClass, Selectors as SelectorClass,
};
use crate::themes::{THEMES, Theme};

mod non_streamed;
mod overview;
mod streamed;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Streamed,
    NonStreamed,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Overview, Tab::Streamed, Tab::NonStreamed];

    fn from_key(key: Option<&str>) -> Tab {
        match key {
            Some("streamed") => Tab::Streamed,
            Some("non-streamed") => Tab::NonStreamed,
            _ => Tab::Overview,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Streamed => "streamed",
            Tab::NonStreamed => "non-streamed",
        }
    }

    fn label(self, t: &Translation) -> &'static str {
        match self {
            Tab::Overview => t.tab_overview,
            Tab::Streamed => t.tab_streamed,
            Tab::NonStreamed => t.tab_non_streamed,
        }
    }
}

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

#[derive(Deserialize)]
pub struct ValueForm {
    pub value: String,
}

pub async fn index(Query(query): Query<TabQuery>, State(state): State<Arc<AppState>>) -> Markup {
    let tab = Tab::from_key(query.tab.as_deref());
    let prefs = state.prefs.load_or_default();
    let theme = Theme::get(&prefs.theme);
    let lang = Language::from_code(&prefs.language);
    let t = lang.translation();

    let body = html! {
        div.(GlobalClass::PAGE) {
            header.(GlobalClass::PAGE_HEADER) {
                h1 { (t.app_title) }
                div {
                    (theme_selector(theme, tab))
                    (language_selector(lang, tab))
                }
            }
            (tab_bar(tab, t))
            div #metrics-container
                hx-get=(format!("/fragments/metrics?tab={}", tab.key()))
                hx-trigger=(format!("every {}s", state.settings.poll_interval_secs))
                hx-swap="innerHTML"
            {
                (render_metrics(&state, tab))
            }
            footer.(GlobalClass::PAGE_FOOTER) { "LLM Metrics Proxy" }
        }
    };
    page_shell(t.app_title, theme, body)
}

pub async fn styles_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], styles::ALL.clone())
}

pub async fn fragment_metrics(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
) -> Markup {
    render_metrics(&state, Tab::from_key(query.tab.as_deref()))
}

pub async fn set_timeframe(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ValueForm>,
) -> Markup {
    let mut prefs = state.prefs.load_or_default();
    prefs.timeframe = form.value;
    if let Err(e) = state.prefs.save(&prefs) {
        warn!("failed to save timeframe preference: {e}");
    }
    render_metrics(&state, Tab::from_key(query.tab.as_deref()))
}

pub async fn set_theme(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    let mut prefs = state.prefs.load_or_default();
    prefs.theme = form.value;
    if let Err(e) = state.prefs.save(&prefs) {
        warn!("failed to save theme preference: {e}");
    }
    redirect_to_tab(query.tab.as_deref())
}

pub async fn set_language(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ValueForm>,
) -> Redirect {
    let mut prefs = state.prefs.load_or_default();
    prefs.language = form.value;
    if let Err(e) = state.prefs.save(&prefs) {
        warn!("failed to save language preference: {e}");
    }
    redirect_to_tab(query.tab.as_deref())
}

pub async fn refresh_now(
    Query(query): Query<TabQuery>,
    State(state): State<Arc<AppState>>,
) -> Markup {
    poller::poll_once(&state).await;
    render_metrics(&state, Tab::from_key(query.tab.as_deref()))
}

fn redirect_to_tab(tab: Option<&str>) -> Redirect {
    match Tab::from_key(tab) {
        Tab::Overview => Redirect::to("/"),
        other => Redirect::to(&format!("/?tab={}", other.key())),
    }
}

fn page_shell(title: &str, theme: &Theme, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (maud::PreEscaped(theme.css_variables())) }
                link rel="stylesheet" href="/styles.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body { (body) }
        }
    }
}

/// Renders the metrics fragment for one tab: toolbar, then the tab content
/// computed from the latest snapshot. `now` is read once here and threaded
/// through the whole pipeline so a single render is internally consistent.
fn render_metrics(state: &AppState, tab: Tab) -> Markup {
    let prefs = state.prefs.load_or_default();
    let lang = Language::from_code(&prefs.language);
    let t = lang.translation();
    let tf = Timeframe::get(&prefs.timeframe);
    let now = Utc::now();

    let (records, fetched_at) = {
        let snapshot = state.snapshot.read().unwrap();
        (Arc::clone(&snapshot.records), snapshot.fetched_at)
    };

    let (start, end) = resolve_range(tf, now);
    let window: Vec<&RequestRecord> = records
        .iter()
        .filter(|r| r.timestamp >= start && r.timestamp <= end)
        .collect();
    let summary = Summary::compute(&window);

    let content = if fetched_at.is_none() {
        html! {
            section.(MetricsClass::METRIC_SECTION) {
                p.(MetricsClass::METRIC_NOTE) { (t.no_metrics_data) }
            }
        }
    } else {
        match tab {
            Tab::Overview => overview::render(&window, &summary, tf, now, t),
            Tab::Streamed => {
                let subset: Vec<&RequestRecord> =
                    window.iter().copied().filter(|r| r.is_streaming).collect();
                streamed::render(&Summary::compute(&subset), &summary, t)
            }
            Tab::NonStreamed => {
                let subset: Vec<&RequestRecord> =
                    window.iter().copied().filter(|r| !r.is_streaming).collect();
                non_streamed::render(&Summary::compute(&subset), &summary, t)
            }
        }
    };

    html! {
        (toolbar(tab, tf, fetched_at, t))
        (content)
    }
}

fn tab_bar(active: Tab, t: &Translation) -> Markup {
    html! {
        nav.(SelectorClass::TAB_BAR) {
            @for &tab in Tab::ALL {
                @let href = match tab {
                    Tab::Overview => "/".to_owned(),
                    other => format!("/?tab={}", other.key()),
                };
                a.(SelectorClass::TAB_BTN)
                    .(if tab == active { SelectorClass::TAB_ACTIVE } else { "" })
                    href=(href)
                {
                    (tab.label(t))
                }
            }
        }
    }
}

fn toolbar(
    tab: Tab,
    active_tf: &Timeframe,
    fetched_at: Option<DateTime<Utc>>,
    t: &Translation,
) -> Markup {
    html! {
        div.(SelectorClass::TOOLBAR) {
            @for tf in TIMEFRAMES {
                button.(SelectorClass::TIMEFRAME_BTN)
                    .(if tf.id == active_tf.id { SelectorClass::TIMEFRAME_ACTIVE } else { "" })
                    hx-post=(format!("/prefs/timeframe?tab={}", tab.key()))
                    hx-vals=(format!(r#"{{"value": "{}"}}"#, tf.id))
                    hx-target="#metrics-container"
                    hx-swap="innerHTML"
                {
                    (tf.label)
                }
            }
            button.(SelectorClass::REFRESH_BTN)
                hx-post=(format!("/refresh?tab={}", tab.key()))
                hx-target="#metrics-container"
                hx-swap="innerHTML"
            {
                (t.refresh_now)
            }
            @if let Some(ts) = fetched_at {
                span.(SelectorClass::LAST_UPDATED) {
                    (t.last_updated) ": " (ts.format("%H:%M:%S"))
                }
            }
        }
    }
}

fn theme_selector(active: &Theme, tab: Tab) -> Markup {
    html! {
        form action=(format!("/prefs/theme?tab={}", tab.key())) method="post" style="display:inline" {
            select.(SelectorClass::SELECT_CONTROL) name="value" onchange="this.form.submit()" {
                @for theme in THEMES {
                    option value=(theme.id) selected[theme.id == active.id] { (theme.name) }
                }
            }
        }
    }
}

fn language_selector(active: Language, tab: Tab) -> Markup {
    html! {
        form action=(format!("/prefs/language?tab={}", tab.key())) method="post" style="display:inline" {
            select.(SelectorClass::SELECT_CONTROL) name="value" onchange="this.form.submit()" {
                @for &lang in LANGUAGES {
                    option value=(lang.code()) selected[lang == active] { (lang.native_name()) }
                }
            }
        }
    }
}

fn metric_section(title: &str, content: Markup) -> Markup {
    html! {
        section.(MetricsClass::METRIC_SECTION) {
            h2 { (title) }
            (content)
        }
    }
}

fn metric_item(title: &str, value: Markup) -> Markup {
    html! {
        div.(MetricsClass::METRIC_ITEM) {
            div.(MetricsClass::METRIC_ITEM_TITLE) { (title) }
            div.(MetricsClass::METRIC_ITEM_VALUE) { (value) }
        }
    }
}

fn metric_list(items: &[(String, u64)], unit: &str) -> Markup {
    html! {
        ul.(MetricsClass::METRIC_LIST) {
            @for (label, count) in items {
                li.(MetricsClass::METRIC_LIST_ITEM) {
                    span { (label) }
                    span.(MetricsClass::METRIC_LIST_COUNT) { (format::number(*count)) " " (unit) }
                }
            }
        }
    }
}

fn token_usage_grid(summary: &Summary, t: &Translation) -> Markup {
    html! {
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
            @if let Some(tps) = summary.avg_tokens_per_second {
                (metric_item(t.avg_tokens_per_second, html! {
                    (format!("{tps:.2} ")) (t.tokens_per_second_unit)
                }))
            }
        }
    }
}

fn fmt_opt_ms(value: Option<f64>) -> Markup {
    html! {
        @match value {
            Some(ms) => { (format::response_time(ms)) },
            None => { "n/a" },
        }
    }
}

mod global {
    turf::style_sheet!("assets/global.css");
}

mod metrics {
    turf::style_sheet!("assets/metrics.css");
}

mod charts {
    turf::style_sheet!("assets/charts.css");
}

mod selectors {
    turf::style_sheet!("assets/selectors.css");
}

pub use charts::ClassName as Charts;
pub use global::ClassName as Global;
pub use metrics::ClassName as Metrics;
pub use selectors::ClassName as Selectors;

use std::sync::LazyLock;

pub static ALL: LazyLock<String> = LazyLock::new(|| {
    [
        global::STYLE_SHEET,
        metrics::STYLE_SHEET,
        charts::STYLE_SHEET,
        selectors::STYLE_SHEET,
    ]
    .join("\n")
});

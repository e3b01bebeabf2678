//! Typed UI translations.
//!
//! Every language fills in a complete [`Translation`] const, so a missing
//! message is a compile error rather than a blank cell at render time.

mod de;
mod en;
mod es;
mod fr;
mod ja;
mod ko;
mod ru;
mod zh;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    Ja,
    Zh,
    Ru,
    Ko,
}

pub const LANGUAGES: &[Language] = &[
    Language::En,
    Language::Es,
    Language::Fr,
    Language::De,
    Language::Ja,
    Language::Zh,
    Language::Ru,
    Language::Ko,
];

impl Language {
    /// Resolves a stored language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Language {
        LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or(Language::En)
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ru => "ru",
            Language::Ko => "ko",
        }
    }

    /// The language's name in that language, for the selector.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::Ru => "Русский",
            Language::Ko => "한국어",
        }
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Language::En => &en::EN,
            Language::Es => &es::ES,
            Language::Fr => &fr::FR,
            Language::De => &de::DE,
            Language::Ja => &ja::JA,
            Language::Zh => &zh::ZH,
            Language::Ru => &ru::RU,
            Language::Ko => &ko::KO,
        }
    }
}

pub struct Translation {
    pub app_title: &'static str,

    // Tab labels
    pub tab_overview: &'static str,
    pub tab_streamed: &'static str,
    pub tab_non_streamed: &'static str,

    // Section headers
    pub basic_statistics: &'static str,
    pub performance_metrics: &'static str,
    pub token_usage: &'static str,
    pub model_usage: &'static str,
    pub request_sources: &'static str,

    // Metric labels
    pub total_completion_requests: &'static str,
    pub successful_requests: &'static str,
    pub failed_requests: &'static str,
    pub success_rate: &'static str,
    pub streaming_percentage: &'static str,
    pub total_tokens_used: &'static str,
    pub avg_tokens_per_request: &'static str,
    pub avg_response_time: &'static str,
    pub avg_tokens_per_second: &'static str,
    pub time_to_first_token: &'static str,
    pub time_to_last_token: &'static str,
    pub streamed_requests_count: &'static str,
    pub streamed_requests_percent: &'static str,
    pub non_streamed_requests_count: &'static str,
    pub non_streamed_requests_percent: &'static str,
    pub tokens_per_request: &'static str,

    // Charts
    pub requests_chart_title: &'static str,
    pub requests_chart_y_axis: &'static str,
    pub response_time_chart_title: &'static str,
    pub response_time_chart_y_axis: &'static str,

    // Chrome
    pub last_updated: &'static str,
    pub refresh_now: &'static str,
    pub requests_unit: &'static str,
    pub tokens_per_second_unit: &'static str,
    pub no_metrics_data: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("pt"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn codes_round_trip() {
        for &lang in LANGUAGES {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn every_language_has_a_distinct_title() {
        // A duplicated title usually means a copy-pasted table
        let mut titles: Vec<&str> = LANGUAGES.iter().map(|l| l.translation().app_title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), LANGUAGES.len());
    }
}

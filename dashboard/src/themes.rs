//! Visual themes expressed as CSS custom properties.
//!
//! The page shell emits one `:root` block from the active theme and every
//! view and SVG color references the variables, so switching themes never
//! touches markup.

pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    /// Bar color for the successful-requests series
    pub metric_success: &'static str,
    /// Bar color for the failed-requests series
    pub metric_failed: &'static str,
}

pub const THEMES: &[Theme] = &[
    Theme {
        id: "light",
        name: "Light",
        background: "#f8f9fa",
        surface: "#ffffff",
        text: "#212529",
        text_secondary: "#6c757d",
        border: "#dee2e6",
        accent: "#007bff",
        success: "#28a745",
        warning: "#ffc107",
        error: "#dc3545",
        metric_success: "#36a2eb",
        metric_failed: "#dc3545",
    },
    Theme {
        id: "dark",
        name: "Dark",
        background: "#16181d",
        surface: "#1f2229",
        text: "#e9ecef",
        text_secondary: "#9aa0a8",
        border: "#343a40",
        accent: "#4dabf7",
        success: "#40c057",
        warning: "#fab005",
        error: "#fa5252",
        metric_success: "#4dabf7",
        metric_failed: "#fa5252",
    },
];

impl Theme {
    /// Looks up a theme by id; unknown ids fall back to the first (light).
    pub fn get(id: &str) -> &'static Theme {
        THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
    }

    /// Renders the `:root` declaration block the page shell injects.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --color-background: {};\n  --color-surface: {};\n  --color-text: {};\n  --color-text-secondary: {};\n  --color-border: {};\n  --color-accent: {};\n  --color-success: {};\n  --color-warning: {};\n  --color-error: {};\n  --color-metric-success: {};\n  --color-metric-failed: {};\n}}",
            self.background,
            self.surface,
            self.text,
            self.text_secondary,
            self.border,
            self.accent,
            self.success,
            self.warning,
            self.error,
            self.metric_success,
            self.metric_failed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_light() {
        assert_eq!(Theme::get("solarized").id, "light");
        assert_eq!(Theme::get("dark").id, "dark");
    }

    #[test]
    fn css_block_declares_every_variable() {
        for theme in THEMES {
            let css = theme.css_variables();
            for var in [
                "--color-background",
                "--color-surface",
                "--color-text",
                "--color-text-secondary",
                "--color-border",
                "--color-accent",
                "--color-success",
                "--color-warning",
                "--color-error",
                "--color-metric-success",
                "--color-metric-failed",
            ] {
                assert!(css.contains(var), "{} missing {var}", theme.id);
            }
        }
    }
}

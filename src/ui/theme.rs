//! Visual theme and styling.

use console::Style;

/// Console theme for pipeline output.
#[derive(Debug, Clone)]
pub struct TallyTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for step names (bold).
    pub step_title: Style,
    /// Style for step numbers and counters (dim).
    pub step_number: Style,
}

impl Default for TallyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            step_title: Style::new().bold(),
            step_number: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            step_title: Style::new(),
            step_number: Style::new(),
        }
    }

    /// Format the success line. Only colour is added, the text is unchanged.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a failure line. Only colour is added, the text is unchanged.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a progress line, e.g. `[2/3] merge_past_data`.
    pub fn format_progress(&self, current: usize, total: usize, name: &str) -> String {
        format!(
            "{} {}",
            self.step_number.apply_to(format!("[{}/{}]", current, total)),
            self.step_title.apply_to(name)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_lines_are_the_bare_message() {
        let theme = TallyTheme::plain();
        assert_eq!(
            theme.format_success("すべての処理が正常に完了しました。"),
            "すべての処理が正常に完了しました。"
        );
        assert_eq!(
            theme.format_error("データ転記処理でエラーが発生しました。"),
            "データ転記処理でエラーが発生しました。"
        );
    }

    #[test]
    fn colored_outcome_lines_keep_the_text() {
        let theme = TallyTheme::new();
        let line = console::strip_ansi_codes(&theme.format_error("Failed")).into_owned();
        assert_eq!(line, "Failed");
    }

    #[test]
    fn theme_formats_progress() {
        let theme = TallyTheme::plain();
        assert_eq!(
            theme.format_progress(2, 3, "merge_past_data"),
            "[2/3] merge_past_data"
        );
    }
}

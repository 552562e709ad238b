//! Output verbosity.

/// Output verbosity mode.
///
/// The outcome line (success or failure message) is printed in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress plus commands and timings.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show the outcome line only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows commands and timings.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-step progress.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
    }

    #[test]
    fn output_mode_shows_progress() {
        assert!(OutputMode::Verbose.shows_progress());
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}

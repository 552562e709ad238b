//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{should_use_colors, NonInteractiveUI, OutputMode, TallyTheme, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: TallyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TallyTheme::new()
        } else {
            TallyTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err_term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_progress(&mut self, current: usize, total: usize, name: &str) {
        if self.mode.shows_progress() {
            writeln!(
                self.err_term,
                "{}",
                self.theme.format_progress(current, total, name)
            )
            .ok();
        }
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        write!(self.term, "{}", prompt)?;
        self.term.flush()?;
        self.term.read_key()?;
        writeln!(self.term)?;
        Ok(())
    }
}

/// Create the appropriate UI based on environment.
///
/// Falls back to [`NonInteractiveUI`] when no terminal is attached, even if
/// `interactive` is requested, since nobody could answer the pause.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && crate::shell::has_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

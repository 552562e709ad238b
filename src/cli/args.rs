//! CLI argument definitions.
//!
//! Every flag is optional: running `tally` with no arguments runs the
//! annual pipeline in the current directory.

use clap::Parser;
use std::path::PathBuf;

use crate::steps::{Term, DEFAULT_PYTHON};

/// Tally - fail-fast launcher for the customer ranking data pipeline.
#[derive(Debug, Clone, Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the pipeline scripts (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Interpreter used to run the scripts
    #[arg(long, env = "TALLY_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Reporting period to build
    #[arg(long, value_enum, default_value_t = Term::Annual)]
    pub term: Term,

    /// Exit right after a failure instead of waiting for a key press
    #[arg(long)]
    pub no_pause: bool,

    /// Show commands and step timings
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the final outcome line
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            project: None,
            python: DEFAULT_PYTHON.to_string(),
            term: Term::Annual,
            no_pause: false,
            verbose: false,
            quiet: false,
            no_color: false,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.project.is_none());
        assert_eq!(cli.term, Term::Annual);
        assert!(!cli.no_pause);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_term() {
        let cli = Cli::try_parse_from(["tally", "--term", "second-quarter"]).unwrap();
        assert_eq!(cli.term, Term::SecondQuarter);
    }

    #[test]
    fn rejects_unknown_term() {
        assert!(Cli::try_parse_from(["tally", "--term", "monthly"]).is_err());
    }

    #[test]
    fn parses_project_and_python() {
        let cli =
            Cli::try_parse_from(["tally", "-p", "/data/ranking", "--python", "python3"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/data/ranking")));
        assert_eq!(cli.python, "python3");
    }

    #[test]
    fn parses_no_pause() {
        let cli = Cli::try_parse_from(["tally", "--no-pause"]).unwrap();
        assert!(cli.no_pause);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tally", "-v", "-q"]).is_err());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tally", "extra"]).is_err());
    }

    #[test]
    fn default_matches_no_args() {
        let cli = Cli::default();
        assert_eq!(cli.term, Term::Annual);
        assert_eq!(cli.python, DEFAULT_PYTHON);
    }
}

//! Tally CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tally::cli::{Cli, RunCommand};
use tally::shell::is_ci;
use tally::ui::{create_ui, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so stdout only carries the outcome line
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("tally=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tally=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Tally starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // Nobody can answer the pause under CI or with --no-pause
    let is_interactive = !cli.no_pause && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let command = RunCommand::new(&project_root, cli);
    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

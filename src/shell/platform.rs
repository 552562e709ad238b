//! Environment detection.

use console::Term;

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if an operator could answer a key-press prompt.
///
/// Only stdout matters: the prompt is written there. Redirecting stderr
/// (logs, progress) still leaves someone at the console.
pub fn has_terminal() -> bool {
    Term::stdout().is_term()
}

//! The step data model.

use std::fmt;

/// How to start one external program.
///
/// The runner treats this as opaque: it is handed to the process layer as-is
/// and only the exit status of the program comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    /// Program to execute, resolved through `PATH` when not a path.
    pub program: String,

    /// Fixed arguments passed to the program.
    pub args: Vec<String>,
}

impl StepCommand {
    /// Create a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a command that runs a program with no arguments.
    pub fn program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// One unit of pipeline progress: a program plus the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based position in the pipeline.
    pub index: usize,

    /// Short identifier used in logs.
    pub name: String,

    /// What to run.
    pub command: StepCommand,

    /// Localized text printed when this step fails.
    pub failure_message: String,
}

impl Step {
    /// Create a step.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        command: StepCommand,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            command,
            failure_message: failure_message.into(),
        }
    }
}

/// Build an ordered step list, numbering entries from 1.
pub fn numbered<I>(entries: I) -> Vec<Step>
where
    I: IntoIterator<Item = (String, StepCommand, String)>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, command, message))| Step::new(i + 1, name, command, message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_display_joins_program_and_args() {
        let cmd = StepCommand::new("python", ["01_create_data.py"]);
        assert_eq!(cmd.to_string(), "python 01_create_data.py");
    }

    #[test]
    fn command_without_args_displays_program_only() {
        let cmd = StepCommand::program("./run.sh");
        assert_eq!(cmd.to_string(), "./run.sh");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn numbered_assigns_one_based_indices_in_order() {
        let steps = numbered(vec![
            (
                "a".to_string(),
                StepCommand::program("a"),
                "a failed".to_string(),
            ),
            (
                "b".to_string(),
                StepCommand::program("b"),
                "b failed".to_string(),
            ),
        ]);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].index, 1);
        assert_eq!(steps[0].name, "a");
        assert_eq!(steps[1].index, 2);
        assert_eq!(steps[1].failure_message, "b failed");
    }

    #[test]
    fn numbered_empty_is_empty() {
        let steps = numbered(Vec::new());
        assert!(steps.is_empty());
    }
}

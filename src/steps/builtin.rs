//! Built-in step lists for the ranking report pipeline.
//!
//! The lists are fixed at build time. A [`Term`] picks which one to run;
//! the only run-time input is the interpreter used to start the scripts.

use clap::ValueEnum;

use super::step::{numbered, Step, StepCommand};

/// Interpreter used for the built-in scripts when none is given.
pub const DEFAULT_PYTHON: &str = "python";

/// Printed once when every step exits with status 0.
pub const SUCCESS_MESSAGE: &str = "すべての処理が正常に完了しました。";

/// Failure messages, in step order.
pub const FAILURE_MESSAGES: [&str; 3] = [
    "データ作成処理でエラーが発生しました。",
    "過去データ結合処理でエラーが発生しました。",
    "データ転記処理でエラーが発生しました。",
];

const STEP_NAMES: [&str; 3] = ["create_data", "merge_past_data", "transfer_data"];

/// Reporting period; selects the script set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Term {
    /// Fiscal-year ranking
    #[default]
    Annual,
    /// Second-quarter ranking
    SecondQuarter,
}

impl Term {
    /// Label used in the report file names.
    pub fn label(&self) -> &'static str {
        match self {
            Term::Annual => "年度",
            Term::SecondQuarter => "第２四半期",
        }
    }

    /// Scripts to run, in order.
    pub fn scripts(&self) -> [&'static str; 3] {
        match self {
            Term::Annual => [
                "01_create_data.py",
                "02_merge_past_data.py",
                "03_transfer_data.py",
            ],
            Term::SecondQuarter => [
                "01_create_data.py",
                "02_merge_past_data_2Q.py",
                "03_transfer_data_2Q.py",
            ],
        }
    }
}

/// Build the step list for a term, running each script with `python`.
pub fn builtin_steps(term: Term, python: &str) -> Vec<Step> {
    numbered(
        term.scripts()
            .iter()
            .zip(STEP_NAMES)
            .zip(FAILURE_MESSAGES)
            .map(|((script, name), message)| {
                (
                    name.to_string(),
                    StepCommand::new(python, [*script]),
                    message.to_string(),
                )
            }),
    )
}

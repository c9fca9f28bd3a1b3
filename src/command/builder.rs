//! Full 3dMEMA invocation

use super::fragment::set_arguments;
use crate::subject::SubjectEntry;
use crate::types::MemaParams;
use std::fmt;

pub const DEFAULT_PROGRAM: &str = "3dMEMA";

/// Flags appended after `-max_zeros` on every run
pub const FIXED_FLAGS: [&str; 3] = ["-model_outliers", "-residual_Z", "-HKtest"];

/// Program plus its argument vector, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemaCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl MemaCommand {
    #[must_use]
    pub fn build(params: &MemaParams, entries: &[SubjectEntry]) -> Self {
        Self::build_with_program(DEFAULT_PROGRAM, params, entries)
    }

    #[must_use]
    pub fn build_with_program(
        program: impl Into<String>,
        params: &MemaParams,
        entries: &[SubjectEntry],
    ) -> Self {
        let mut args = vec![
            "-prefix".to_string(),
            params.output.clone(),
            "-jobs".to_string(),
            params.jobs.to_string(),
            "-set".to_string(),
            params.group.clone(),
        ];
        args.extend(set_arguments(entries, params.sub_bricks()));
        args.push("-max_zeros".to_string());
        args.push(params.max_zeros.to_string());
        args.extend(FIXED_FLAGS.iter().map(|flag| (*flag).to_string()));

        Self {
            program: program.into(),
            args,
        }
    }

    /// Shell-quoted command line, for display only
    #[must_use]
    pub fn command_line(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

impl fmt::Display for MemaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

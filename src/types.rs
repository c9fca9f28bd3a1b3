//! Domain-specific types for a 3dMEMA invocation

use std::fmt;

/// Parameters that shape one 3dMEMA run
#[derive(Debug, Clone, PartialEq)]
pub struct MemaParams {
    pub output: String,
    pub group: String,
    pub idx_b: i64,
    pub idx_t: i64,
    pub jobs: i64,
    pub max_zeros: f64,
}

impl MemaParams {
    pub const DEFAULT_GROUP: &'static str = "GroupAvr";
    pub const DEFAULT_IDX_B: i64 = 1;
    pub const DEFAULT_IDX_T: i64 = 2;
    pub const DEFAULT_JOBS: i64 = 1;
    // Not exposed on the command line
    pub const MAX_ZEROS: f64 = 0.25;

    /// Parameters with every default applied except the output prefix
    #[must_use]
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            group: Self::DEFAULT_GROUP.to_string(),
            idx_b: Self::DEFAULT_IDX_B,
            idx_t: Self::DEFAULT_IDX_T,
            jobs: Self::DEFAULT_JOBS,
            max_zeros: Self::MAX_ZEROS,
        }
    }

    #[must_use]
    pub fn sub_bricks(&self) -> SubBricks {
        SubBricks::new(self.idx_b, self.idx_t)
    }
}

/// Pair of sub-brick indices selecting the beta and t-statistic volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubBricks {
    pub beta: i64,
    pub tstat: i64,
}

impl SubBricks {
    #[must_use]
    pub fn new(beta: i64, tstat: i64) -> Self {
        Self { beta, tstat }
    }
}

impl fmt::Display for SubBricks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "beta=[{beta}], t=[{tstat}]", beta = self.beta, tstat = self.tstat)
    }
}

/// Raw bytes captured from a finished external process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    #[inline]
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

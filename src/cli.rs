use crate::types::MemaParams;
use clap::Parser;
use std::path::PathBuf;

/// Run an AFNI 3dMEMA group analysis over subject statistic images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subject statistic image(s), one per subject
    #[arg(short, long, value_name = "FILE", num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output prefix for the 3dMEMA result
    #[arg(short, long)]
    pub output: Option<String>,

    /// Group label
    #[arg(short, long, default_value = MemaParams::DEFAULT_GROUP)]
    pub group: String,

    /// Sub-brick index of the beta estimate
    #[arg(short = 'b', long = "idx_b", allow_negative_numbers = true, default_value_t = MemaParams::DEFAULT_IDX_B)]
    pub idx_b: i64,

    /// Sub-brick index of the t statistic
    #[arg(short = 't', long = "idx_t", allow_negative_numbers = true, default_value_t = MemaParams::DEFAULT_IDX_T)]
    pub idx_t: i64,

    /// Number of jobs passed to 3dMEMA
    #[arg(short, long, allow_negative_numbers = true, default_value_t = MemaParams::DEFAULT_JOBS)]
    pub jobs: i64,

    /// 3dMEMA executable to run
    #[arg(long, value_name = "PATH", default_value = crate::command::DEFAULT_PROGRAM)]
    pub program: String,

    /// Print the command line instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log progress and the command line to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Run parameters, `None` when inputs or output are missing or empty
    #[must_use]
    pub fn params(&self) -> Option<MemaParams> {
        if self.inputs.is_empty() {
            return None;
        }
        let output = self.output.as_ref().filter(|o| !o.is_empty())?;

        Some(MemaParams {
            output: output.clone(),
            group: self.group.clone(),
            idx_b: self.idx_b,
            idx_t: self.idx_t,
            jobs: self.jobs,
            max_zeros: MemaParams::MAX_ZEROS,
        })
    }
}

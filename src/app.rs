//! One invocation of the wrapper: usage, dry run or a real 3dMEMA run

use crate::cli::Args;
use crate::command::{MemaCommand, assemble_fragment, subject_entries};
use crate::runner::Executor;
use crate::types::CommandOutput;
use tracing::{debug, info};

/// What a run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Inputs or output prefix missing; nothing was executed
    Usage,
    /// Command assembled but not executed
    DryRun(MemaCommand),
    /// Command executed, output captured
    Completed(CommandOutput),
}

/// Assemble the 3dMEMA command for the given arguments
///
/// Returns `None` when the arguments lack inputs or an output prefix.
#[must_use]
pub fn build_command(args: &Args) -> Option<MemaCommand> {
    let params = args.params()?;
    let entries = subject_entries(&args.inputs);

    for entry in &entries {
        debug!(id = %entry.id, path = %entry.path.display(), "subject");
    }
    debug!(bricks = %params.sub_bricks(), "set {}", assemble_fragment(&entries, params.sub_bricks()));

    Some(MemaCommand::build_with_program(args.program.as_str(), &params, &entries))
}

/// Run once; the external tool's failures come back as captured output
pub fn run(args: &Args, executor: &impl Executor) -> RunOutcome {
    let Some(command) = build_command(args) else {
        return RunOutcome::Usage;
    };

    if args.dry_run {
        return RunOutcome::DryRun(command);
    }

    info!(subjects = args.inputs.len(), "{command}");
    RunOutcome::Completed(executor.execute(&command))
}

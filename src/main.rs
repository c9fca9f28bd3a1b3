use anyhow::Result;
use clap::{CommandFactory, Parser};
use memarun::cli::Args;
use memarun::{ProcessExecutor, RunOutcome, display, logging};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run_and_relay(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Run once and relay whatever the run produced
fn run_and_relay(args: &Args) -> Result<()> {
    match memarun::run(args, &ProcessExecutor) {
        RunOutcome::Usage => {
            let _ = Args::command().print_help();
            println!();
        }
        RunOutcome::DryRun(command) => println!("{command}"),
        RunOutcome::Completed(output) => display::print_output(&output)?,
    }

    Ok(())
}

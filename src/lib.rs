pub mod app;
pub mod cli;
pub mod command;
pub mod display;
pub mod logging;
pub mod runner;
pub mod subject;
pub mod types;

// Re-export commonly used items
pub use app::{RunOutcome, run};
pub use runner::{Executor, ProcessExecutor};

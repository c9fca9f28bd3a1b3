//! 3dMEMA command assembly
//!
//! Turns subject files and run parameters into the program name and
//! argument vector handed to the runner.

mod builder;
mod fragment;

// Re-export public API
pub use builder::{DEFAULT_PROGRAM, FIXED_FLAGS, MemaCommand};
pub use fragment::{assemble_fragment, set_arguments, subject_entries, subject_fragment};

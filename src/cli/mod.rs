//! Command line interface for the ytdata binary

pub mod args;
pub mod output;

pub use args::{Args, Command, SearchKind, VerbosityLevel};
pub use output::OutputFormatter;

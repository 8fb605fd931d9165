// Application layer: turns an engine result into what the CLI prints.

pub mod runner;

pub use runner::{exit_code, format_values, run, RunOptions};

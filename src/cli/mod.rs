//! Command-line interface
//!
//! A small binary that streams the upcoming-movies listing to stdout.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;

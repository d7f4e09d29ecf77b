//! Command-line interface for computing minimum spanning trees.
//!
//! The `run` command reads a graph input file, computes its minimum spanning
//! tree with the configured worker count, and writes the report file.

mod commands;
mod input;
mod report;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, ScanStrategyArg, render_summary,
    run_cli,
};
pub use input::{GraphInput, InputError, parse_graph_input};
pub use report::write_report;

#[cfg(test)]
mod test_helpers;

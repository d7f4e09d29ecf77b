//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, RunCommand, ScanStrategyArg};

/// The four-vertex graph whose minimum spanning tree weighs 19.
pub(super) const REFERENCE_INPUT: &str = "4 5 4\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_input_file(dir: &TempDir, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join("graph_input.txt");
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_command_for(
    input: &Path,
    output: &Path,
    threads: Option<usize>,
    scan_strategy: ScanStrategyArg,
) -> RunCommand {
    RunCommand {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        threads,
        scan_strategy,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

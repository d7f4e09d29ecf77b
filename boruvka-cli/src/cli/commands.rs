//! Command implementations and argument parsing for the boruvka CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use boruvka_core::{BoruvkaBuilder, BoruvkaError, MinimumSpanningTree, ScanStrategy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{GraphInput, InputError, parse_graph_input};
use super::report::write_report;

const DEFAULT_INPUT: &str = "graph_input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning trees with parallel Boruvka rounds."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of a graph file and write a report.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph input file: `V E T` followed by `E` lines of `source dest weight`.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Report file, written only when the computation succeeds.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Worker threads per round; overrides the `T` value in the input header.
    #[arg(long, short = 't', value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// How each round's closest-edge scan is divided between workers.
    #[arg(long, value_enum, default_value_t = ScanStrategyArg::VertexOwnership)]
    pub scan_strategy: ScanStrategyArg,
}

/// Command-line names for [`ScanStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanStrategyArg {
    /// Each worker owns every `T`-th vertex and rescans all edges for it.
    VertexOwnership,
    /// Each worker scans one contiguous slice of the edge list.
    EdgePartition,
}

impl From<ScanStrategyArg> for ScanStrategy {
    fn from(value: ScanStrategyArg) -> Self {
        match value {
            ScanStrategyArg::VertexOwnership => Self::VertexOwnership,
            ScanStrategyArg::EdgePartition => Self::EdgePartition,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was malformed.
    #[error("invalid graph input in `{path}`: {source}")]
    Input {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: InputError,
    },
    /// The core rejected the graph or failed to compute the tree.
    #[error(transparent)]
    Core(#[from] BoruvkaError),
    /// The report file could not be written.
    #[error("failed to write report `{path}`: {source}")]
    Report {
        /// Path of the report file.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Path of the written report.
    pub output: PathBuf,
    /// Worker threads used per round.
    pub workers: usize,
    /// The computed tree.
    pub tree: MinimumSpanningTree,
    /// Wall-clock time spent in the computation.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input, computing the tree, or
/// writing the report fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, Command, RunCommand, ScanStrategyArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("graph_input.txt");
/// std::fs::write(&input, "4 5 2\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: dir.path().join("output.txt"),
///         threads: None,
///         scan_strategy: ScanStrategyArg::VertexOwnership,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 19);
/// assert_eq!(summary.workers, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = %command.input.display(), workers = field::Empty, strategy = ?command.scan_strategy),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        input,
        output,
        threads,
        scan_strategy,
    } = command;

    let graph_input = load_input(&input)?;
    let workers = threads.unwrap_or(graph_input.threads);
    Span::current().record("workers", workers);

    let boruvka = BoruvkaBuilder::new()
        .with_worker_count(workers)
        .with_scan_strategy(scan_strategy.into())
        .build()?;

    let started = Instant::now();
    let tree = boruvka.run_edges(graph_input.vertex_count, graph_input.edges)?;
    let elapsed = started.elapsed();

    write_report_file(&output, &tree, elapsed)?;
    info!(
        edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        report = %output.display(),
        "command completed"
    );

    Ok(ExecutionSummary {
        output,
        workers,
        tree,
        elapsed,
    })
}

#[instrument(name = "cli.load_input", err, fields(path = %path.display()))]
fn load_input(path: &Path) -> Result<GraphInput, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph_input(BufReader::new(file)).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report_file(
    path: &Path,
    tree: &MinimumSpanningTree,
    elapsed: Duration,
) -> Result<(), CliError> {
    let to_error = |source| CliError::Report {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_report(tree, elapsed, &mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

/// Renders a short human-readable summary of `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "minimum spanning tree: {} edges, total weight {}",
        summary.tree.edges().len(),
        summary.tree.total_weight()
    )?;
    writeln!(
        writer,
        "rounds: {}, workers: {}",
        summary.tree.rounds(),
        summary.workers
    )?;
    writeln!(writer, "report: {}", summary.output.display())?;
    Ok(())
}

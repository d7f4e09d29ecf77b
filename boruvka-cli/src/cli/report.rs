//! Report file rendering.

use std::io::{self, Write};
use std::time::Duration;

use boruvka_core::MinimumSpanningTree;

/// Writes the tree report: one line per edge, the total weight, and the
/// wall-clock time of the computation in whole milliseconds.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use boruvka_cli::cli::write_report;
/// use boruvka_core::{BoruvkaBuilder, Edge};
///
/// let tree = BoruvkaBuilder::new()
///     .build()?
///     .run_edges(2, vec![Edge::new(0, 1, 3)])?;
/// let mut buffer = Vec::new();
/// write_report(&tree, Duration::from_millis(12), &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Edges in MST:\nEdge 0 - 1 with weight 3\nTotal weight of MST: 3\nExecution Time: 12 milliseconds\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_report(
    tree: &MinimumSpanningTree,
    elapsed: Duration,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "Edges in MST:")?;
    for edge in tree.edges() {
        writeln!(
            writer,
            "Edge {} - {} with weight {}",
            edge.source(),
            edge.dest(),
            edge.weight()
        )?;
    }
    writeln!(writer, "Total weight of MST: {}", tree.total_weight())?;
    writeln!(writer, "Execution Time: {} milliseconds", elapsed.as_millis())?;
    Ok(())
}

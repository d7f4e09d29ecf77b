//! Parser for the whitespace-separated graph input format.
//!
//! The file starts with the header `V E T` (vertex count, edge count, worker
//! count), followed by `E` triples `source dest weight`. Any whitespace,
//! newlines included, separates tokens. Tokens after the last triple are
//! ignored.

use std::io::{self, Read};
use std::str::FromStr;

use boruvka_core::Edge;
use thiserror::Error;

/// A parsed graph input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInput {
    /// Declared number of vertices.
    pub vertex_count: usize,
    /// Worker count requested by the header.
    pub threads: usize,
    /// Edges in file order.
    pub edges: Vec<Edge>,
}

/// Errors raised while parsing graph input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input could not be read.
    #[error("failed to read graph input: {0}")]
    Read(#[from] io::Error),
    /// A header value was zero or negative.
    #[error(
        "vertex, edge, and thread counts must be positive (got V={vertices}, E={edges}, T={threads})"
    )]
    NonPositiveHeader {
        /// Declared vertex count.
        vertices: i64,
        /// Declared edge count.
        edges: i64,
        /// Declared thread count.
        threads: i64,
    },
    /// The input ended before every declared value was read.
    #[error("graph input ended early: expected {expected} at token {position}")]
    Truncated {
        /// Zero-based index of the missing token.
        position: usize,
        /// Description of the missing value.
        expected: &'static str,
    },
    /// A token could not be parsed as the expected value.
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    InvalidToken {
        /// Zero-based index of the offending token.
        position: usize,
        /// The raw token.
        token: String,
        /// Description of the expected value.
        expected: &'static str,
    },
}

/// Reads and parses graph input from `reader`.
///
/// # Errors
/// Returns [`InputError`] when reading fails or the content is malformed.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::parse_graph_input;
///
/// let input = parse_graph_input("3 2 1\n0 1 5\n1 2 -2\n".as_bytes())?;
/// assert_eq!(input.vertex_count, 3);
/// assert_eq!(input.threads, 1);
/// assert_eq!(input.edges.len(), 2);
/// # Ok::<(), boruvka_cli::cli::InputError>(())
/// ```
pub fn parse_graph_input(mut reader: impl Read) -> Result<GraphInput, InputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_tokens(&raw)
}

fn parse_tokens(raw: &str) -> Result<GraphInput, InputError> {
    let mut tokens = Tokens::new(raw);

    let vertices: i64 = tokens.next("vertex count")?;
    let edges: i64 = tokens.next("edge count")?;
    let threads: i64 = tokens.next("thread count")?;
    let (Some(vertex_count), Some(edge_count), Some(thread_count)) =
        (positive(vertices), positive(edges), positive(threads))
    else {
        return Err(InputError::NonPositiveHeader {
            vertices,
            edges,
            threads,
        });
    };

    // Cap the reservation so an absurd header cannot allocate up front.
    let mut parsed = Vec::with_capacity(edge_count.min(raw.len()));
    for _ in 0..edge_count {
        let source: usize = tokens.next("source vertex")?;
        let dest: usize = tokens.next("destination vertex")?;
        let weight: i32 = tokens.next("edge weight")?;
        parsed.push(Edge::new(source, dest, weight));
    }

    Ok(GraphInput {
        vertex_count,
        threads: thread_count,
        edges: parsed,
    })
}

fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&count| count > 0)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            inner: raw.split_whitespace(),
            position: 0,
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let position = self.position;
        let token = self
            .inner
            .next()
            .ok_or(InputError::Truncated { position, expected })?;
        self.position += 1;
        token.parse().map_err(|_| InputError::InvalidToken {
            position,
            token: token.to_owned(),
            expected,
        })
    }
}

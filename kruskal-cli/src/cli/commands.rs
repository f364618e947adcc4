//! Command implementations and argument parsing for the kruskal CLI.

use std::io::{self, Write};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use kruskal_core::{Edge, MstError, SpanningForest, compute_mst};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Vertex count of the built-in demonstration graph.
const DEMO_VERTICES: usize = 4;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the MST of the built-in four-vertex example graph.
    Demo,
    /// Compute the MST of a graph given on the command line.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of vertices; edges may reference `0..VERTICES`.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Edge as `SRC:DST:WEIGHT`; repeat for every edge.
    #[arg(long = "edge", short = 'e', value_name = "SRC:DST:WEIGHT")]
    pub edges: Vec<EdgeSpec>,
}

/// An integer-weighted edge parsed from `SRC:DST:WEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Source vertex.
    pub source: usize,
    /// Target vertex.
    pub target: usize,
    /// Edge weight; may be negative.
    pub weight: i64,
}

impl From<EdgeSpec> for Edge<i64> {
    fn from(spec: EdgeSpec) -> Self {
        Self::new(spec.source, spec.target, spec.weight)
    }
}

/// Errors raised while parsing an [`EdgeSpec`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EdgeSpecError {
    /// The value did not split into exactly three `:`-separated parts.
    #[error("expected SRC:DST:WEIGHT, got `{raw}`")]
    Shape {
        /// Raw value supplied by the user.
        raw: String,
    },
    /// One of the parts was not a valid integer.
    #[error("invalid {part} `{value}` in edge `{raw}`")]
    Number {
        /// Which part failed to parse.
        part: &'static str,
        /// The offending text.
        value: String,
        /// Raw value supplied by the user.
        raw: String,
    },
}

impl FromStr for EdgeSpec {
    type Err = EdgeSpecError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        let [source, target, weight] = parts.as_slice() else {
            return Err(EdgeSpecError::Shape {
                raw: raw.to_owned(),
            });
        };

        Ok(Self {
            source: parse_part(source, "source", raw)?,
            target: parse_part(target, "target", raw)?,
            weight: parse_part(weight, "weight", raw)?,
        })
    }
}

fn parse_part<T: FromStr>(value: &str, part: &'static str, raw: &str) -> Result<T, EdgeSpecError> {
    value.parse().map_err(|_| EdgeSpecError::Number {
        part,
        value: value.to_owned(),
        raw: raw.to_owned(),
    })
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The MST computation rejected the graph.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the graph came from (`demo` or `arguments`).
    pub graph: &'static str,
    /// The computed spanning tree or forest.
    pub forest: SpanningForest<i64>,
}

/// Returns the built-in demonstration graph as `(vertex_count, edges)`.
///
/// Its MST keeps `2 -- 3`, `0 -- 3`, and `0 -- 1` for a total cost of 19.
#[must_use]
pub fn demo_graph() -> (usize, Vec<Edge<i64>>) {
    (
        DEMO_VERTICES,
        vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 6),
            Edge::new(0, 3, 5),
            Edge::new(1, 3, 15),
            Edge::new(2, 3, 4),
        ],
    )
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph is rejected.
///
/// # Examples
/// ```
/// # use kruskal_cli::cli::{Cli, Command, run_cli};
/// let summary = run_cli(Cli { command: Command::Demo })?;
/// assert_eq!(summary.forest.total_cost(), 19);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo => {
            span.record("command", field::display("demo"));
            let (vertices, edges) = demo_graph();
            execute("demo", vertices, &edges)
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run)
        }
    }
}

pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let edges: Vec<Edge<i64>> = command.edges.into_iter().map(Edge::from).collect();
    execute("arguments", command.vertices, &edges)
}

#[instrument(name = "cli.execute", err, skip(edges), fields(edges = edges.len()))]
fn execute(
    graph: &'static str,
    vertices: usize,
    edges: &[Edge<i64>],
) -> Result<ExecutionSummary, CliError> {
    let forest = compute_mst(vertices, edges)?;
    info!(
        graph,
        total_cost = forest.total_cost(),
        spanning = forest.is_spanning_tree(),
        "command completed"
    );
    Ok(ExecutionSummary { graph, forest })
}

/// Renders the accepted edges and total cost of `summary` to `writer`.
///
/// # Errors
/// Returns any I/O error raised by `writer`.
///
/// # Examples
/// ```
/// # use kruskal_cli::cli::{Cli, Command, render_summary, run_cli};
/// let summary = run_cli(Cli { command: Command::Demo })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("Total cost of MST: 19\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Following are the edges of the constructed MST:")?;
    for edge in summary.forest.edges() {
        writeln!(writer, "{edge}")?;
    }
    writeln!(writer, "Total cost of MST: {}", summary.forest.total_cost())?;
    if !summary.forest.is_spanning_tree() {
        writeln!(
            writer,
            "Graph is disconnected: {} components remain",
            summary.forest.component_count()
        )?;
    }
    Ok(())
}

//! Command-line interface for the Kruskal demonstration harness.
//!
//! `demo` runs the classic four-vertex example graph; `run` takes the vertex
//! count and `SRC:DST:WEIGHT` edge triples straight from the command line.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeSpec, EdgeSpecError, ExecutionSummary, RunCommand, demo_graph,
    render_summary, run_cli,
};

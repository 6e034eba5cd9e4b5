//! Route command handler for walking one greedy route.

use std::path::PathBuf;

use anyhow::{Context, Result};

use borderwalk_lib::{build_adjacency, load_countries, plan_greedy_route, RouteSummary};

use borderwalk_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Country dataset to read.
    pub input: PathBuf,
    /// Starting country name.
    pub from: String,
}

/// Handle the route subcommand.
///
/// Loads the dataset and prints the greedy route starting at `--from`.
pub fn handle_route(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let records = load_countries(&args.input)
        .with_context(|| format!("failed to load dataset from {}", args.input.display()))?;
    let adjacency = build_adjacency(records);

    let path = plan_greedy_route(&adjacency, &args.from)?;
    let summary = RouteSummary::from_path(&path)?;
    format.render_route(&summary)
}

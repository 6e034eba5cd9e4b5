//! Build command handler for computing every qualifying greedy route.

use std::path::PathBuf;

use anyhow::{Context, Result};

use borderwalk_lib::{calculate_routes, RouteConfig};

use borderwalk_cli::output::OutputFormat;

/// Arguments for the build command.
#[derive(Debug, Clone)]
pub struct BuildCommandArgs {
    /// Country dataset to read.
    pub input: PathBuf,
    /// Route collection file to write.
    pub output: PathBuf,
    /// Minimum number of countries a route needs to be kept.
    pub min_length: usize,
    /// Only print the final summary.
    pub quiet: bool,
}

impl BuildCommandArgs {
    /// Convert CLI args to a library RouteConfig.
    pub fn to_config(&self) -> RouteConfig {
        RouteConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            min_length: self.min_length,
        }
    }
}

/// Handle the build subcommand.
///
/// Walks a greedy route from every country and writes the routes that reach
/// the minimum length.
pub fn handle_build(args: &BuildCommandArgs, format: OutputFormat) -> Result<()> {
    let config = args.to_config();

    if format != OutputFormat::Json {
        println!(
            "Calculating longest route (min length {}) for all starting countries...",
            config.min_length
        );
    }

    let report = calculate_routes(&config).with_context(|| {
        format!(
            "failed to calculate routes from {}",
            config.input.display()
        )
    })?;

    format.render_build(&config.output, &report, args.quiet)
}

//! Output formatting for route rendering.
//!
//! This module provides formatters for rendering single-route summaries and
//! route collection reports in the supported output formats.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use borderwalk_lib::{RouteCollection, RouteRenderMode, RouteReport, RouteSummary};

use crate::terminal::ColorPalette;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing with optional colors.
    #[default]
    Text,
    /// Markdown-flavoured listing.
    Rich,
    /// One line joined with arrows.
    Arrow,
    /// Machine-readable JSON.
    Json,
}

/// JSON shape for the build command.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput<'a> {
    pub output: String,
    pub min_length: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub routes: &'a RouteCollection,
}

impl<'a> BuildOutput<'a> {
    pub fn new(output: &Path, report: &'a RouteReport) -> Self {
        Self {
            output: output.display().to_string(),
            min_length: report.min_length,
            accepted: report.accepted,
            skipped: report.skipped,
            routes: &report.routes,
        }
    }
}

impl OutputFormat {
    /// Render a single greedy route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => render_text(summary, ColorPalette::detect()),
            OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Arrow => print!("{}", summary.render(RouteRenderMode::Arrow)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(summary)
                    .context("failed to serialise route summary")?;
                println!("{json}");
            }
        }
        Ok(())
    }

    /// Render the outcome of a full route calculation.
    pub fn render_build(self, output: &Path, report: &RouteReport, quiet: bool) -> Result<()> {
        if self == OutputFormat::Json {
            let json = serde_json::to_string_pretty(&BuildOutput::new(output, report))
                .context("failed to serialise route report")?;
            println!("{json}");
            return Ok(());
        }

        let palette = ColorPalette::detect();
        if !quiet {
            for route in &report.found {
                println!(
                    "  - {}{}{}: Found path of {} countries",
                    palette.green, route.start, palette.reset, route.length
                );
            }
        }

        println!(
            "\nSuccess! {} routes saved to {}",
            report.routes.len(),
            output.display()
        );
        if report.skipped > 0 {
            println!(
                "{}Skipped {} countries with paths shorter than {}.{}",
                palette.gray, report.skipped, report.min_length, palette.reset
            );
        }
        Ok(())
    }
}

/// Render a route summary in text format.
///
/// The first and last countries are tagged; intermediate steps are indexed.
pub fn render_text(summary: &RouteSummary, palette: ColorPalette) {
    println!(
        "Greedy route from {}{}{} ({} countries, {} hops):",
        palette.white_bold, summary.start, palette.reset, summary.countries, summary.hops
    );

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let tag = if step.index == 0 {
            format!("{}STRT{}", palette.tag_start, palette.reset)
        } else if step.index == last {
            format!("{}END {}", palette.tag_end, palette.reset)
        } else {
            format!("{}{:>4}{}", palette.gray, step.index, palette.reset)
        };
        println!(" {} {}", tag, step.country);
    }
}

use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    RichText,
    /// Single line joined with arrows, as the quiz shows it.
    Arrow,
}

/// Step taken along a greedy route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub country: String,
}

/// Structured representation of one greedy route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: String,
    pub end: String,
    pub countries: usize,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a route into a summary with indexed steps.
    pub fn from_path(path: &[String]) -> Result<Self> {
        let (Some(start), Some(end)) = (path.first(), path.last()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = path
            .iter()
            .enumerate()
            .map(|(index, country)| RouteStep {
                index,
                country: country.clone(),
            })
            .collect();

        Ok(Self {
            start: start.clone(),
            end: end.clone(),
            countries: path.len(),
            hops: path.len() - 1,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Arrow => self.render_arrow(),
        }
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} countries, {} hops)",
            self.start, self.end, self.countries, self.hops
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.country);
        }
        buffer
    }

    fn render_arrow(&self) -> String {
        let mut buffer = self
            .steps
            .iter()
            .map(|step| step.country.as_str())
            .collect::<Vec<_>>()
            .join(" → ");
        buffer.push('\n');
        buffer
    }
}

//! Route collection across every country in the dataset.
//!
//! [`collect_routes`] walks one greedy route per input record and keeps the
//! ones that reach the minimum length. [`write_routes`] persists the result
//! as a pretty-printed JSON object keyed by start country, which is what the
//! quiz front end loads.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info, warn};

use crate::dataset::load_countries;
use crate::error::{Error, Result};
use crate::graph::{build_adjacency, AdjacencyMap};
use crate::path::greedy_path;

/// Routes shorter than this are not worth quizzing on.
pub const DEFAULT_MIN_ROUTE_LENGTH: usize = 10;

/// Default dataset filename.
pub const DEFAULT_INPUT_FILE: &str = "flags.json";

/// Default route collection filename.
pub const DEFAULT_OUTPUT_FILE: &str = "longest_routes.json";

/// Inputs for a full route calculation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub min_length: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            min_length: DEFAULT_MIN_ROUTE_LENGTH,
        }
    }
}

/// Start country to greedy route, in first-insertion order.
///
/// Serializes as a JSON object. Inserting an existing start country replaces
/// its route without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCollection {
    routes: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `path` under `start`, returning the route it replaced.
    pub fn insert(&mut self, start: impl Into<String>, path: Vec<String>) -> Option<Vec<String>> {
        let start = start.into();
        match self.positions.get(&start) {
            Some(&position) => Some(std::mem::replace(&mut self.routes[position].1, path)),
            None => {
                self.positions.insert(start.clone(), self.routes.len());
                self.routes.push((start, path));
                None
            }
        }
    }

    pub fn get(&self, start: &str) -> Option<&[String]> {
        self.positions
            .get(start)
            .map(|&position| self.routes[position].1.as_slice())
    }

    pub fn contains(&self, start: &str) -> bool {
        self.positions.contains_key(start)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.routes
            .iter()
            .map(|(start, path)| (start.as_str(), path.as_slice()))
    }
}

impl Serialize for RouteCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.routes.len()))?;
        for (start, path) in &self.routes {
            map.serialize_entry(start, path)?;
        }
        map.end()
    }
}

/// Start record whose route met the minimum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedRoute {
    pub start: String,
    pub length: usize,
}

/// Outcome of running the greedy walk from every country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteReport {
    pub routes: RouteCollection,
    /// One entry per accepted start record in input order. Duplicate
    /// identifiers appear once per record even though `routes` keeps one.
    pub found: Vec<AcceptedRoute>,
    /// Start records whose route met the minimum length.
    pub accepted: usize,
    /// Start records whose route fell short of the minimum length.
    pub skipped: usize,
    pub min_length: usize,
}

/// Walk a greedy route from every record and keep those of at least
/// `min_length` countries.
pub fn collect_routes(adjacency: &AdjacencyMap, min_length: usize) -> RouteReport {
    let mut routes = RouteCollection::new();
    let mut found = Vec::new();
    let mut accepted = 0;
    let mut skipped = 0;

    for record in adjacency.records() {
        let path = greedy_path(record, adjacency);
        if path.len() >= min_length {
            debug!(country = %record.country, length = path.len(), "route accepted");
            found.push(AcceptedRoute {
                start: record.country.clone(),
                length: path.len(),
            });
            routes.insert(record.country.clone(), path);
            accepted += 1;
        } else {
            debug!(country = %record.country, length = path.len(), "route skipped");
            skipped += 1;
        }
    }

    info!(accepted, skipped, min_length, "route collection complete");
    RouteReport {
        routes,
        found,
        accepted,
        skipped,
        min_length,
    }
}

/// Write the collection to `path` as 2-space indented UTF-8 JSON.
pub fn write_routes(path: &Path, routes: &RouteCollection) -> Result<()> {
    let to_error = |source: std::io::Error| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, routes)
        .map_err(|err| to_error(std::io::Error::from(err)))?;
    writer.flush().map_err(to_error)?;

    info!(path = %path.display(), routes = routes.len(), "wrote route collection");
    Ok(())
}

/// Load the dataset, collect every qualifying route and write the result.
///
/// The output file is only touched once every route has been computed.
pub fn calculate_routes(config: &RouteConfig) -> Result<RouteReport> {
    let records = load_countries(&config.input)?;
    let adjacency = build_adjacency(records);

    let dangling = adjacency.dangling_borders();
    if !dangling.is_empty() {
        warn!(
            count = dangling.len(),
            "dataset declares borders with no matching country; they are ignored"
        );
    }

    let report = collect_routes(&adjacency, config.min_length);
    write_routes(&config.output, &report.routes)?;
    Ok(report)
}

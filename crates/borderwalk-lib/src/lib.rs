//! Borderwalk library entry points.
//!
//! This crate exposes helpers to load a country border dataset, build the
//! adjacency lookup, walk greedy border routes and persist the qualifying
//! routes. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routes;

pub use dataset::{load_countries, parse_countries, CountryRecord};
pub use error::{Error, Result};
pub use graph::{build_adjacency, open_neighbor_count, AdjacencyMap, DanglingBorder, VisitedSet};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{greedy_path, plan_greedy_route};
pub use routes::{
    calculate_routes, collect_routes, write_routes, AcceptedRoute, RouteCollection, RouteConfig,
    RouteReport, DEFAULT_INPUT_FILE, DEFAULT_MIN_ROUTE_LENGTH, DEFAULT_OUTPUT_FILE,
};

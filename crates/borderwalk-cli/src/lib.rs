//! Borderwalk CLI library.
//!
//! This crate provides command-line interface utilities for the borderwalk
//! route builder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;

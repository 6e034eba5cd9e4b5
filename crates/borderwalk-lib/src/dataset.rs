//! Country border dataset loading.
//!
//! The dataset is a JSON array of objects, each carrying a `country`
//! identifier and an optional `borders` list naming neighbouring countries
//! by identifier. Any other fields on the objects (flags, capitals, ...) are
//! ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// One country in the border dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    /// Neighbour identifiers in declared order. `None` marks an island.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
}

impl CountryRecord {
    /// Build a record with the given neighbour list.
    pub fn new<I, S>(country: impl Into<String>, borders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            country: country.into(),
            borders: Some(borders.into_iter().map(Into::into).collect()),
        }
    }

    /// Build a record without a neighbour list.
    pub fn island(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            borders: None,
        }
    }

    /// Declared neighbour identifiers; empty when the list is absent.
    pub fn neighbours(&self) -> &[String] {
        self.borders.as_deref().unwrap_or(&[])
    }
}

/// Parse a dataset from its JSON text.
pub fn parse_countries(json: &str) -> serde_json::Result<Vec<CountryRecord>> {
    serde_json::from_str(json)
}

/// Load the country dataset stored at `path`.
///
/// A missing file maps to [`Error::InputNotFound`]; content that is not a
/// JSON array of country records maps to [`Error::InputMalformed`].
pub fn load_countries(path: &Path) -> Result<Vec<CountryRecord>> {
    debug!(path = %path.display(), "reading country dataset");
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = parse_countries(&contents).map_err(|source| Error::InputMalformed {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        countries = records.len(),
        "loaded country dataset"
    );
    Ok(records)
}

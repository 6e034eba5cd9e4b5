use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the borderwalk library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input dataset could not be located at the resolved path.
    #[error("input dataset not found at {path}")]
    InputNotFound { path: PathBuf },

    /// Input dataset exists but could not be read.
    #[error("failed to read input dataset {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input dataset is not a JSON array of country records.
    #[error("could not decode input dataset {path}")]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Route collection could not be written to the output path.
    #[error("could not write routes to {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a country name could not be found in the dataset.
    #[error("unknown country: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a computed route lacks any countries.
    #[error("route was empty")]
    EmptyRoute,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

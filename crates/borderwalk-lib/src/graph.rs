use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::dataset::CountryRecord;

/// Minimum similarity score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Countries already placed on the route being built.
pub type VisitedSet<'a> = HashSet<&'a str>;

/// Declared border pointing at a country that has no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingBorder {
    pub country: String,
    pub border: String,
}

/// Lookup from country identifier to its record.
///
/// The full input collection is retained in declared order, duplicates
/// included, while identifier lookups resolve to the last record seen.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl AdjacencyMap {
    /// Record registered for `country`, if any.
    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.index.get(country).map(|&position| &self.records[position])
    }

    /// Whether `country` is a key of the map.
    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Number of distinct country identifiers.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every input record in declared order, including shadowed duplicates.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Declared borders that do not resolve to any record.
    pub fn dangling_borders(&self) -> Vec<DanglingBorder> {
        self.unique_records()
            .flat_map(move |record| {
                record
                    .neighbours()
                    .iter()
                    .filter(move |border| !self.contains(border))
                    .map(move |border| DanglingBorder {
                        country: record.country.clone(),
                        border: border.clone(),
                    })
            })
            .collect()
    }

    /// Known country names most similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .unique_records()
            .map(|record| {
                let score =
                    strsim::normalized_damerau_levenshtein(&needle, &record.country.to_lowercase());
                (score, record.country.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, country)| country.to_string())
            .collect()
    }

    fn unique_records(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records
            .iter()
            .enumerate()
            .filter(move |(position, record)| self.index.get(&record.country) == Some(position))
            .map(|(_, record)| record)
    }
}

/// Build the adjacency lookup from the loaded dataset.
///
/// Neighbour identifiers are not checked here; borders naming unknown
/// countries are simply never resolved during traversal.
pub fn build_adjacency(records: Vec<CountryRecord>) -> AdjacencyMap {
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if let Some(previous) = index.insert(record.country.clone(), position) {
            warn!(
                country = %record.country,
                previous,
                replacement = position,
                "duplicate country identifier; later record replaces earlier"
            );
        }
    }

    AdjacencyMap { records, index }
}

/// Count the neighbours of `record` that are known and not yet visited.
pub fn open_neighbor_count(
    record: &CountryRecord,
    adjacency: &AdjacencyMap,
    visited: &VisitedSet<'_>,
) -> usize {
    record
        .neighbours()
        .iter()
        .filter(|border| !visited.contains(border.as_str()) && adjacency.contains(border))
        .count()
}

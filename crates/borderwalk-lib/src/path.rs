use tracing::debug;

use crate::dataset::CountryRecord;
use crate::error::{Error, Result};
use crate::graph::{open_neighbor_count, AdjacencyMap, VisitedSet};

/// Walk a single greedy border route starting at `start`.
///
/// Each step moves to the unvisited, known neighbour that itself has the
/// most open neighbours. Ties go to whichever neighbour the current country
/// declares first. The walk ends on an island or a dead end, so every
/// country appears at most once in the result.
pub fn greedy_path<'a>(start: &'a CountryRecord, adjacency: &'a AdjacencyMap) -> Vec<String> {
    let mut path = Vec::new();
    let mut visited = VisitedSet::new();
    let mut current = Some(start);

    while let Some(record) = current {
        path.push(record.country.clone());
        visited.insert(record.country.as_str());

        if record.borders.is_none() {
            break;
        }

        let mut candidates: Vec<(&'a CountryRecord, usize)> = record
            .neighbours()
            .iter()
            .filter(|border| !visited.contains(border.as_str()))
            .filter_map(|border| adjacency.get(border))
            .map(|neighbour| {
                let open = open_neighbor_count(neighbour, adjacency, &visited);
                (neighbour, open)
            })
            .collect();

        // Stable: equal counts keep declared neighbour order.
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        current = candidates.first().map(|&(neighbour, _)| neighbour);
    }

    path
}

/// Resolve `start` by name and walk its greedy route.
pub fn plan_greedy_route(adjacency: &AdjacencyMap, start: &str) -> Result<Vec<String>> {
    let record = adjacency
        .get(start)
        .ok_or_else(|| Error::UnknownCountry {
            name: start.to_string(),
            suggestions: adjacency.fuzzy_matches(start, 3),
        })?;

    let path = greedy_path(record, adjacency);
    debug!(start, length = path.len(), "planned greedy route");
    Ok(path)
}

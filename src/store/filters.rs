use std::collections::BTreeSet;

use super::record::MovieRecord;

pub fn normalize_title(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn collect_genres(records: &[MovieRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|r| r.genre.as_deref())
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive exact genre match. A blank query matches everything.
pub fn filtered_indices(records: &[MovieRecord], genre: Option<&str>) -> Vec<usize> {
    let wanted = genre.map(normalize_title).filter(|g| !g.is_empty());
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| match &wanted {
            Some(g) => r.genre.as_deref().map(normalize_title).as_ref() == Some(g),
            None => true,
        })
        .map(|(i, _)| i)
        .collect()
}

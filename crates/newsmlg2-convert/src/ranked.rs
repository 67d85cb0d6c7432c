//! Ranked-list engine
//!
//! Every category and editorial-note extractor goes through
//! [`sorted_filtered_projection`]: take a collection, sort it by rank,
//! keep the entries matching one equality filter, and project each
//! survivor onto a fixed list of attributes.

use newsmlg2_domain::{sort_by_rank, Rank};
use serde_json::{Map, Value};
use tracing::warn;

use crate::record::{non_null, value_to_rank};

/// Equality filter on one string attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter<'a> {
    /// Attribute name (`type` for categories, `role` for notes)
    pub key: &'a str,

    /// Required value
    pub value: &'a str,
}

impl<'a> Filter<'a> {
    /// Create a filter
    pub fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }

    fn matches(&self, entry: &Map<String, Value>) -> bool {
        entry.get(self.key).and_then(Value::as_str) == Some(self.value)
    }
}

/// Rank of one collection entry; unparseable ranks count as unranked
pub fn entry_rank(entry: &Map<String, Value>) -> Option<Rank> {
    non_null(entry.get("rank")).and_then(value_to_rank)
}

/// Sort, filter and project a collection
///
/// Entries that are not mappings are skipped. The sort is stable, so
/// entries with equal or missing ranks keep their source order, with
/// unranked entries after all ranked ones. Attributes absent on an entry
/// (or `null`) project to `None`.
pub fn sorted_filtered_projection<'a>(
    collection: &'a [Value],
    collection_field: &str,
    filter: Option<Filter<'_>>,
    attrs: &[&str],
) -> Vec<Vec<Option<&'a Value>>> {
    let mut entries: Vec<&Map<String, Value>> = Vec::with_capacity(collection.len());
    for (idx, item) in collection.iter().enumerate() {
        match item.as_object() {
            Some(entry) => entries.push(entry),
            None => warn!("Skipping non-mapping entry {} in {}", idx, collection_field),
        }
    }

    sort_by_rank(&mut entries, |entry| entry_rank(entry));

    entries
        .into_iter()
        .filter(|entry| filter.map_or(true, |f| f.matches(entry)))
        .map(|entry| attrs.iter().map(|attr| non_null(entry.get(*attr))).collect())
        .collect()
}

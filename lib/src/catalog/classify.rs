use rustc_hash::FxHashMap;

use crate::catalog::{Catalog, CategoryEntry, CategoryRegistry, LibraryRecord};

/// The catalog grouped by category and sorted by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One entry per registry category, in registry order.
    pub categories: Vec<CategoryEntry>,
    /// Every library key, sorted case-insensitively by library name.
    pub alphabetic: Vec<String>,
}

/// Groups every library in `catalog` under each registry category it lists.
///
/// Membership is computed in a single pass over the name-sorted view, so each
/// category's members come out in the same order a per-category sort by name
/// would produce. Categories a library lists that the registry doesn't know
/// are ignored.
pub fn classify(registry: &CategoryRegistry, catalog: &Catalog) -> Classification {
    let alphabetic = catalog.alphabetic();

    let mut members: FxHashMap<&str, Vec<&LibraryRecord>> = FxHashMap::default();
    for &record in &alphabetic {
        for key in &record.category {
            if !registry.contains(key) {
                tracing::debug!(library = %record.key, category = %key, "unknown category");
                continue;
            }

            let list = members.entry(key.as_str()).or_default();
            if !list.iter().any(|r| r.key == record.key) {
                list.push(record);
            }
        }
    }

    let categories = registry.iter()
        .map(|category| CategoryEntry {
            key: category.key.clone(),
            title: category.title.clone(),
            library_keys: members.get(category.key.as_str())
                .map(|list| list.iter().map(|r| r.key.clone()).collect())
                .unwrap_or_default(),
        })
        .collect();

    Classification {
        categories,
        alphabetic: alphabetic.iter().map(|r| r.key.clone()).collect(),
    }
}

use std::collections::BTreeMap;

use crate::catalog::LibraryRecord;

/// Every library of a run, keyed by library key.
///
/// Iteration is in key order. Use [`Catalog::alphabetic()`] for the
/// name-sorted view pages are rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<R = LibraryRecord> {
    records: BTreeMap<String, R>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Catalog { records: BTreeMap::new() }
    }
}

impl<R> Catalog<R> {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Inserts `record` under `key`, returning the record it replaced, if
    /// any. The most recent insert for a key always wins.
    pub fn insert(&mut self, key: impl Into<String>, record: R) -> Option<R> {
        self.records.insert(key.into(), record)
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut R> {
        self.records.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// Consumes `self`, mapping every record through `f`.
    pub fn map<T, F: FnMut(R) -> T>(self, mut f: F) -> Catalog<T> {
        Catalog {
            records: self.records.into_iter()
                .map(|(key, record)| (key, f(record)))
                .collect()
        }
    }
}

impl Catalog<LibraryRecord> {
    /// All records sorted case-insensitively by name. Records with equal
    /// names keep key order.
    pub fn alphabetic(&self) -> Vec<&LibraryRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by_cached_key(|record| record.name.to_lowercase());
        records
    }
}

impl<R> FromIterator<(String, R)> for Catalog<R> {
    fn from_iter<I: IntoIterator<Item = (String, R)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (key, record) in iter {
            catalog.insert(key, record);
        }

        catalog
    }
}

pub mod minijinja;
pub mod transpile;

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;

use crate::catalog::{Catalog, Classification, LibraryRecord};
use crate::error::Result;
use crate::version::ReleaseVersion;

pub trait Engine: Debug {
    /// Renders the engine-syntax `template`, named `name` in diagnostics,
    /// against `context`.
    fn render(&self, name: &str, template: &str, context: &Context<'_>) -> Result<String>;
}

/// The top-level variables every page is rendered with.
#[derive(Debug, Clone, Serialize)]
pub struct Context<'a> {
    #[serde(flatten)]
    pub version: &'a ReleaseVersion,
    pub is_develop: bool,
    pub unreleased_lib_count: usize,
    pub unreleased_libs: Vec<&'a LibraryRecord>,
    /// Every registry category, in registry order.
    pub categories: Vec<CategoryView<'a>>,
    /// Every library, sorted by name.
    pub libraries: Vec<&'a LibraryRecord>,
    #[serde(flatten)]
    pub globals: &'a BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub libraries: Vec<&'a LibraryRecord>,
}

impl<'a> Context<'a> {
    pub fn new(
        catalog: &'a Catalog,
        classification: &'a Classification,
        version: &'a ReleaseVersion,
        globals: &'a BTreeMap<String, serde_json::Value>,
    ) -> Self {
        let records = |keys: &'a [String]| -> Vec<&'a LibraryRecord> {
            keys.iter().filter_map(|key| catalog.get(key)).collect()
        };

        Context {
            version,
            is_develop: false,
            unreleased_lib_count: 0,
            unreleased_libs: vec![],
            categories: classification.categories.iter()
                .map(|entry| CategoryView {
                    key: &entry.key,
                    title: &entry.title,
                    libraries: records(&entry.library_keys),
                })
                .collect(),
            libraries: records(&classification.alphabetic),
            globals,
        }
    }

    pub fn develop(mut self, is_develop: bool) -> Self {
        self.is_develop = is_develop;
        self
    }

    /// Records the libraries in `keys` as new in this release. Keys missing
    /// from the catalog are ignored. Listed in name order.
    pub fn unreleased(mut self, keys: &[String]) -> Self {
        self.unreleased_libs = self.libraries.iter()
            .copied()
            .filter(|library| keys.contains(&library.key))
            .collect();

        for key in keys {
            if !self.unreleased_libs.iter().any(|library| &library.key == key) {
                tracing::warn!(library = %key, "unreleased library is not in the catalog");
            }
        }

        self.unreleased_lib_count = self.unreleased_libs.len();
        self
    }
}

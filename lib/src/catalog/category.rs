use serde::{Deserialize, Serialize};

/// A registry-defined grouping of libraries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// The key libraries list in their `category` field.
    pub key: String,
    /// The display title.
    pub title: String,
}

/// The fixed, ordered set of categories pages are grouped by.
///
/// Order is significant: categorized page sections are emitted in registry
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[derive(derive_more::Deref)]
#[serde(transparent)]
pub struct CategoryRegistry(Vec<Category>);

/// One registry category and the keys of its member libraries, sorted
/// case-insensitively by library name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub key: String,
    pub title: String,
    pub library_keys: Vec<String>,
}

impl CategoryRegistry {
    pub fn new<I, K, T>(categories: I) -> Self
        where I: IntoIterator<Item = (K, T)>, K: Into<String>, T: Into<String>
    {
        CategoryRegistry(categories.into_iter()
            .map(|(key, title)| Category { key: key.into(), title: title.into() })
            .collect())
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.0.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        CategoryRegistry::new([
            ("Algorithms", "Algorithms"),
            ("Concurrent", "Concurrent Programming"),
            ("Containers", "Containers"),
            ("Correctness", "Correctness and testing"),
            ("Data", "Data structures"),
            ("Domain", "Domain Specific"),
            ("Emulation", "Language Features Emulation"),
            ("Function-objects", "Function objects and higher-order programming"),
            ("Generic", "Generic Programming"),
            ("Image-processing", "Image processing"),
            ("IO", "Input/Output"),
            ("Inter-language", "Inter-language support"),
            ("Iterators", "Iterators"),
            ("Math", "Math and numerics"),
            ("Memory", "Memory"),
            ("Metaprogramming", "Template Metaprogramming"),
            ("Miscellaneous", "Miscellaneous"),
            ("Parsing", "Parsing"),
            ("Patterns", "Patterns and Idioms"),
            ("Preprocessor", "Preprocessor Metaprogramming"),
            ("Programming", "Programming Interfaces"),
            ("State", "State Machines"),
            ("String", "String and text processing"),
            ("System", "System"),
            ("Workarounds", "Broken compiler workarounds"),
        ])
    }
}

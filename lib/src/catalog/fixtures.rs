use crate::catalog::{Authors, Catalog, LibraryRecord};

/// `categories` is a whitespace-separated list of category keys.
pub fn record(key: &str, name: &str, categories: &str) -> LibraryRecord {
    LibraryRecord {
        key: key.into(),
        name: name.into(),
        category: categories.split_whitespace().map(String::from).collect(),
        authors: Authors::default(),
        description: String::new(),
        documentation: None,
        library_path: key.into(),
        documentation_link: format!("{key}/index.html"),
        description_clean: String::new(),
        authors_formatted: String::new(),
    }
}

pub fn catalog(records: &[(&str, &str, &str)]) -> Catalog {
    records.iter()
        .map(|(key, name, cats)| (key.to_string(), record(key, name, cats)))
        .collect()
}

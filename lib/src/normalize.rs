//! Derived fields and manual corrections for loaded metadata.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, LibraryRecord, RawRecord};

/// A hand-maintained correction for a known-bad upstream metadata entry.
///
/// Every field but `key` is optional; only the fields given are replaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Override {
    /// Key of the library to correct.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    /// Replaces the derived documentation link outright.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Override {
    pub fn name(key: &str, name: &str) -> Self {
        Override { name: Some(name.into()), ..Override::new(key) }
    }

    pub fn category(key: &str, categories: &[&str]) -> Self {
        let category = categories.iter().map(|c| c.to_string()).collect();
        Override { category: Some(category), ..Override::new(key) }
    }

    pub fn link(key: &str, link: &str) -> Self {
        Override { link: Some(link.into()), ..Override::new(key) }
    }

    fn new(key: &str) -> Self {
        Override { key: key.into(), name: None, category: None, link: None, description: None }
    }

    fn apply(&self, record: &mut LibraryRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }

        if let Some(category) = &self.category {
            record.category = category.clone();
        }

        if let Some(link) = &self.link {
            record.documentation_link = link.clone();
        }

        if let Some(description) = &self.description {
            record.description = description.clone();
            record.description_clean = clean_description(description);
        }
    }
}

/// The built-in override table.
pub fn default_overrides() -> Vec<Override> {
    vec![
        Override::name("numeric/conversion", "Numeric Conversion"),
        Override::name("numeric/interval", "Interval"),
        Override::category("logic/tribool", &["Miscellaneous"]),
        Override::link("compatibility", "compatibility/index.html"),
        Override::link("functional/overloaded_function", "functional/overloaded_function/index.html"),
    ]
}

/// Derives computed fields for every record, then applies `overrides` in
/// order. Overrides naming a key absent from the catalog are skipped.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    overrides: &'a [Override],
}

impl<'a> Normalizer<'a> {
    pub fn new(overrides: &'a [Override]) -> Self {
        Normalizer { overrides }
    }

    pub fn normalize(&self, catalog: Catalog<RawRecord>) -> Catalog {
        let mut catalog = catalog.map(normalize_record);
        for fix in self.overrides {
            match catalog.get_mut(&fix.key) {
                Some(record) => {
                    tracing::debug!(library = %fix.key, "applying manual override");
                    fix.apply(record);
                }
                None => tracing::warn!(library = %fix.key, "override names an unknown library"),
            }
        }

        catalog
    }
}

pub fn normalize_record(raw: RawRecord) -> LibraryRecord {
    LibraryRecord {
        name: raw.name.unwrap_or_else(|| raw.key.clone()),
        documentation_link: documentation_link(&raw.library_path, raw.documentation.as_deref()),
        description_clean: clean_description(&raw.description),
        authors_formatted: raw.authors.format(),
        key: raw.key,
        category: raw.category,
        authors: raw.authors,
        description: raw.description,
        documentation: raw.documentation,
        library_path: raw.library_path,
    }
}

/// The documentation link for a library at `library_path`.
///
/// ```
/// use pagegen::normalize::documentation_link;
///
/// assert_eq!(documentation_link("foo", None), "foo/index.html");
/// assert_eq!(documentation_link("foo", Some("doc/")), "foo/doc/index.html");
/// assert_eq!(documentation_link("foo", Some("doc/html/foo.html")), "foo/doc/html/foo.html");
/// ```
pub fn documentation_link(library_path: &str, documentation: Option<&str>) -> String {
    match documentation {
        None => format!("{library_path}/index.html"),
        Some(doc) if doc.ends_with('/') => format!("{library_path}/{doc}index.html"),
        Some(doc) => format!("{library_path}/{doc}"),
    }
}

/// Removes a single trailing period, along with any whitespace around it.
/// Descriptions that don't end in a period are returned unchanged.
pub fn clean_description(description: &str) -> String {
    match description.trim_end().strip_suffix('.') {
        Some(stripped) => stripped.trim_end().to_string(),
        None => description.to_string(),
    }
}

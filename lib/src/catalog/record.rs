use serde::{Deserialize, Serialize};

/// A library's author field: either a single preformatted string or a list
/// of names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Authors {
    Single(String),
    Many(Vec<String>),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::Many(vec![])
    }
}

impl Authors {
    /// Formats the authors as prose: `"A, B and C"`. A single string passes
    /// through unchanged.
    ///
    /// ```
    /// use pagegen::catalog::Authors;
    ///
    /// let many = Authors::Many(vec!["Alice".into(), "Bob".into(), "Carol".into()]);
    /// assert_eq!(many.format(), "Alice, Bob and Carol");
    ///
    /// let single = Authors::Single("Alice and friends".into());
    /// assert_eq!(single.format(), "Alice and friends");
    /// ```
    pub fn format(&self) -> String {
        match self {
            Authors::Single(name) => name.clone(),
            Authors::Many(names) => match names.split_last() {
                None => String::new(),
                Some((last, [])) => last.clone(),
                Some((last, init)) => format!("{} and {last}", init.join(", ")),
            },
        }
    }
}

/// A library's metadata exactly as read from its metadata file, tagged with
/// the directory it was found in.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub authors: Authors,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(skip)]
    pub library_path: String,
}

/// A normalized catalog entry: the raw fields plus the fields derived from
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryRecord {
    pub key: String,
    pub name: String,
    pub category: Vec<String>,
    pub authors: Authors,
    pub description: String,
    pub documentation: Option<String>,
    pub library_path: String,

    /// Link to the library's documentation, relative to the libraries root.
    pub documentation_link: String,
    /// `description` without its trailing period.
    pub description_clean: String,
    /// `authors` as a single prose string.
    pub authors_formatted: String,
}

impl LibraryRecord {
    pub fn in_category(&self, key: &str) -> bool {
        self.category.iter().any(|c| c == key)
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryRegistry;
use crate::data::{Format, Toml};
use crate::error::Result;
use crate::normalize::{Override, default_overrides};
use crate::page::{Fixup, default_fixups};

/// Everything a pipeline run needs to know about the release tree.
///
/// Every field has a default, so a TOML file only needs to name what it
/// changes. Directory and page paths are `/`-separated and relative to the
/// release root.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub categories: CategoryRegistry,
    /// Directory scanned for libraries.
    pub libs_dir: String,
    /// Location of a library's metadata file within its directory.
    pub metadata_file: String,
    /// Stripped from a library directory to form its `library_path`.
    pub path_prefix: String,
    /// Directories excluded from the scan.
    pub skip: Vec<String>,
    /// Directories always loaded, before the scan, skip list notwithstanding.
    pub include: Vec<String>,
    /// File holding the `BOOST_VERSION` constant.
    pub version_file: String,
    pub release_notes_base: String,
    /// Templates rendered in place, in order.
    pub pages: Vec<String>,
    pub charset: Option<Charset>,
    pub overrides: Vec<Override>,
    pub fixups: Vec<Fixup>,
    pub release: Release,
    /// Keys of libraries new in this release.
    pub unreleased: Vec<String>,
    /// Extra top-level template variables.
    pub globals: BTreeMap<String, serde_json::Value>,
}

/// A character-encoding declaration to rewrite in every template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Charset {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Release {
    #[default]
    Stable,
    Development,
}

impl Release {
    pub fn is_develop(self) -> bool {
        self == Release::Development
    }
}

impl Default for Config {
    fn default() -> Self {
        let strings = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };

        Config {
            categories: CategoryRegistry::default(),
            libs_dir: "libs".into(),
            metadata_file: "meta/libraries.json".into(),
            path_prefix: "libs/".into(),
            skip: strings(&["libs/numeric"]),
            include: strings(&[
                "libs/numeric/conversion",
                "libs/numeric/interval",
                "libs/numeric/odeint",
                "libs/numeric/ublas",
            ]),
            version_file: "Jamroot".into(),
            release_notes_base: "https://www.boost.org/users/history/".into(),
            pages: strings(&["index.html", "libs/libraries.htm"]),
            charset: Some(Charset { from: "iso-8859-1".into(), to: "utf-8".into() }),
            overrides: default_overrides(),
            fixups: default_fixups(),
            release: Release::Stable,
            unreleased: vec![],
            globals: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Reads a configuration from the TOML file at `path`.
    pub fn read(path: &Path) -> Result<Config> {
        Toml::read(path)
    }

    pub fn from_toml(string: &str) -> Result<Config> {
        Toml::read(string)
    }
}

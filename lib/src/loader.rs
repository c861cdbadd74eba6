//! Collection of per-library metadata into a single catalog.

use std::path::Path;

use serde_json::Value;

use crate::catalog::{Catalog, RawRecord};
use crate::config::Config;
use crate::data::{Format, Json};
use crate::error::{Chainable, Result};

/// Reads the metadata of every library directory in a release tree.
#[derive(Debug, Clone, Copy)]
pub struct Loader<'a> {
    root: &'a Path,
    config: &'a Config,
}

impl<'a> Loader<'a> {
    pub fn new(root: &'a Path, config: &'a Config) -> Self {
        Loader { root, config }
    }

    /// The directories considered for loading, relative to the root, in load
    /// order: the include list first, then every subdirectory of the
    /// libraries directory in name order, minus the skip list. Each directory
    /// appears once.
    pub fn candidates(&self) -> Result<Vec<String>> {
        let libs = self.root.join(&self.config.libs_dir);
        if !libs.is_dir() {
            return err! {
                "libraries directory not found",
                "directory" => libs.display(),
            };
        }

        let mut candidates = self.config.include.clone();
        let walker = jwalk::WalkDir::new(&libs)
            .sort(true)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .skip_hidden(false)
            .parallelism(jwalk::Parallelism::Serial);

        for entry in walker {
            let entry = entry.chain_with(|| error! {
                "failed to scan libraries directory",
                "directory" => libs.display(),
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = format!("{}/{}", self.config.libs_dir, entry.file_name().to_string_lossy());
            if self.config.skip.contains(&dir) {
                tracing::debug!(directory = %dir, "skipping excluded directory");
                continue;
            }

            if !candidates.contains(&dir) {
                candidates.push(dir);
            }
        }

        Ok(candidates)
    }

    /// Loads every candidate directory's metadata file. Directories without
    /// one are skipped. A later record with an already-loaded key replaces
    /// the earlier one.
    pub fn load(&self) -> Result<Catalog<RawRecord>> {
        let mut catalog = Catalog::new();
        for dir in self.candidates()? {
            let path = self.root.join(&dir).join(&self.config.metadata_file);
            if !path.is_file() {
                tracing::debug!(directory = %dir, "no metadata file; skipping");
                continue;
            }

            let library_path = dir.strip_prefix(&*self.config.path_prefix).unwrap_or(&dir);
            for mut record in read_records(&path)? {
                record.library_path = library_path.to_string();
                let key = record.key.clone();
                if let Some(previous) = catalog.insert(key, record) {
                    tracing::warn!(
                        library = %previous.key,
                        replaced = %previous.library_path,
                        by = %library_path,
                        "duplicate library key"
                    );
                }
            }
        }

        tracing::info!(libraries = catalog.len(), "loaded library metadata");
        Ok(catalog)
    }
}

/// Parses a metadata file holding either one record object or an array of
/// them. `library_path` is left empty.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let entries = match Json::read::<_, Value>(path)? {
        Value::Array(entries) => entries,
        Value::Object(map) => vec![Value::Object(map)],
        _ => return err! {
            "metadata must be a JSON object or an array of objects",
            "file path" => path.display(),
        },
    };

    entries.into_iter()
        .enumerate()
        .map(|(i, entry)| serde_json::from_value::<RawRecord>(entry).chain_with(|| error! {
            "invalid library record",
            "file path" => path.display(),
            "index" => i,
        }))
        .collect()
}

use std::path::Path;

use serde::Serialize;

use crate::data::Source;
use crate::error::{Chainable, Result};

/// The release version, as declared by the build's version marker:
///
/// ```text
/// constant BOOST_VERSION : 1.85.0 ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseVersion {
    /// The version as written, e.g. `1.85.0`.
    pub version: String,
    /// The version with `.` replaced by `_`, e.g. `1_85_0`.
    pub version_underscored: String,
    pub release_notes_url: String,
}

impl ReleaseVersion {
    /// Reads the version marker from the file at `path`.
    pub fn read(path: &Path, release_notes_base: &str) -> Result<Self> {
        let content = path.read()?;
        Self::parse(&content, release_notes_base).chain_with(|| error! {
            "invalid version marker file",
            "file path" => path.display(),
        })
    }

    /// Finds the first `constant BOOST_VERSION : <value> ;` line in `content`.
    pub fn parse(content: &str, release_notes_base: &str) -> Result<Self> {
        let version = content.lines()
            .find_map(|line| match line.split_whitespace().collect::<Vec<_>>()[..] {
                ["constant", "BOOST_VERSION", ":", version, ";"] => Some(version),
                _ => None,
            });

        let Some(version) = version else {
            return err!("missing `constant BOOST_VERSION : <version> ;` declaration");
        };

        let version_underscored = version.replace('.', "_");
        Ok(ReleaseVersion {
            release_notes_url: format!("{release_notes_base}version_{version_underscored}.html"),
            version: version.to_string(),
            version_underscored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.boost.org/users/history/";

    #[test]
    fn parse_marker() {
        let jamroot = "import path ;\n\nconstant BOOST_VERSION : 1.85.0 ;\nconstant BOOST_JAMROOT_MODULE : $(__name__) ;\n";
        let version = ReleaseVersion::parse(jamroot, BASE).unwrap();
        assert_eq!(version.version, "1.85.0");
        assert_eq!(version.version_underscored, "1_85_0");
        assert_eq!(version.release_notes_url, "https://www.boost.org/users/history/version_1_85_0.html");
    }

    #[test]
    fn tolerates_spacing() {
        let version = ReleaseVersion::parse("  constant  BOOST_VERSION\t:  1.86.0  ;", BASE).unwrap();
        assert_eq!(version.version, "1.86.0");
    }

    #[test]
    fn malformed_marker() {
        for content in ["", "constant BOOST_VERSION 1.85.0 ;", "constant BOOST_VERSION : 1.85.0", "constant BOOST_VERSION : ;"] {
            assert!(ReleaseVersion::parse(content, BASE).is_err(), "{content:?}");
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Jamroot");
        let error = ReleaseVersion::read(&path, BASE).unwrap_err();
        assert!(error.to_string().contains("Jamroot"));
    }

    #[test]
    fn file_without_marker_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Jamroot");
        std::fs::write(&path, "project boost ;\n").unwrap();

        let error = ReleaseVersion::read(&path, BASE).unwrap_err();
        assert_eq!(error.message(), "invalid version marker file");
        assert!(error.to_string().contains("Jamroot"));
    }
}

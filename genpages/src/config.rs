use std::path::Path;

use pagegen::{Config, Release};
use pagegen::error::Result;

pub const CONFIG_FILE: &str = "genpages.toml";

/// Reads `explicit` if given, or else `genpages.toml` at `root` if there is
/// one, or else uses the built-in configuration. `develop` forces a
/// development release.
pub fn discover(root: &Path, explicit: Option<&Path>, develop: bool) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::read(path)?,
        None => match root.join(CONFIG_FILE) {
            path if path.is_file() => Config::read(&path)?,
            _ => Config::default(),
        },
    };

    if develop {
        config.release = Release::Development;
    }

    tracing::debug!(release = ?config.release, pages = ?config.pages, "configuration");
    Ok(config)
}

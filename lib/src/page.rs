//! Post-render corrections and output of rendered pages.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::Sink;
use crate::error::Result;

/// A literal find-and-replace correction applied to rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fixup {
    pub find: String,
    pub replace: String,
}

impl Fixup {
    pub fn new(find: &str, replace: &str) -> Self {
        Fixup { find: find.into(), replace: replace.into() }
    }
}

/// Drops attribution fragments that upstream descriptions carry into the
/// rendered author column.
pub fn default_fixups() -> Vec<Fixup> {
    vec![
        Fixup::new(
            "Help for non-conforming standard libraries, from Ralf Grosse-Kunstleve and Jens Maurer",
            "Help for non-conforming standard libraries",
        ),
        Fixup::new(
            "Portable networking and other low-level I/O, including sockets, timers, hostname \
             resolution, socket iostreams, serial ports, file descriptors and Windows HANDLEs, \
             from Chris Kohlhoff",
            "Portable networking and other low-level I/O, including sockets, timers, hostname \
             resolution, socket iostreams, serial ports, file descriptors and Windows HANDLEs",
        ),
    ]
}

/// Applies every fixup, in order, to every occurrence in `content`.
pub fn apply_fixups(content: &str, fixups: &[Fixup]) -> String {
    fixups.iter()
        .filter(|fixup| !fixup.find.is_empty())
        .fold(content.to_string(), |content, fixup| content.replace(&fixup.find, &fixup.replace))
}

/// A fully rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The template's path relative to the release root, as configured.
    pub name: String,
    /// Where the template was read from.
    pub path: PathBuf,
    pub content: String,
}

/// Where rendered pages go.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Overwrite each template with its rendered page.
    #[default]
    InPlace,
    /// Print every page to standard output.
    Stdout,
}

impl Output {
    pub fn write(self, pages: &[Page]) -> Result<()> {
        for page in pages {
            match self {
                Output::InPlace => page.path.write(&page.content)?,
                Output::Stdout => io::stdout().write(&page.content)?,
            }

            tracing::info!(page = %page.name, bytes = page.content.len(), output = ?self, "wrote page");
        }

        Ok(())
    }
}

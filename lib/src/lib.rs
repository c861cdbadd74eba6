//! A library for rendering library catalog pages from per-library metadata.
//!
//! # Overview
//!
//! A release tree holds a directory per library, each with a small JSON
//! metadata file, alongside page templates written in a lightweight
//! section-marker syntax. `pagegen` turns those into finished HTML pages in a
//! strictly linear run:
//!
//! 1. **Load**: every library directory's metadata file is parsed into a
//!    [`Catalog`](catalog::Catalog) of [`RawRecord`](catalog::RawRecord)s.
//! 2. **Normalize**: derived fields are computed for every record and manual
//!    overrides are applied, yielding [`LibraryRecord`](catalog::LibraryRecord)s.
//! 3. **Classify**: libraries are grouped by registry category and sorted by
//!    name.
//! 4. **Render**: each template is transpiled into engine syntax and rendered,
//!    then post-render fixups are applied.
//! 5. **Write**: pages overwrite their templates, or go to standard output.
//!
//! Any failure before step 5 leaves every file untouched.
//!
//! ```rust,no_run
//! use pagegen::{Config, Output, Pipeline};
//!
//! # fn main() -> pagegen::error::Result<()> {
//! Pipeline::new("/path/to/release", Config::default()).run(Output::InPlace)?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod error;
pub mod data;
pub mod catalog;
pub mod loader;
pub mod normalize;
pub mod templating;
pub mod version;
pub mod page;
pub mod config;
pub mod pipeline;

pub use config::{Config, Release};
pub use page::Output;
pub use pipeline::Pipeline;

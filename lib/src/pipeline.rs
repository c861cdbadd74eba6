use std::path::{Path, PathBuf};

use crate::catalog::{classify, Catalog};
use crate::config::Config;
use crate::data::Source;
use crate::error::{Chainable, Result};
use crate::loader::Loader;
use crate::normalize::Normalizer;
use crate::page::{apply_fixups, Output, Page};
use crate::templating::{Context, Engine};
use crate::templating::minijinja::MiniJinjaEngine;
use crate::templating::transpile::Transpiler;
use crate::version::ReleaseVersion;

/// One run over a release tree: load, normalize, classify, render, write.
///
/// Nothing is written until every page has rendered.
#[derive(Debug)]
pub struct Pipeline<E = MiniJinjaEngine> {
    root: PathBuf,
    config: Config,
    engine: E,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Pipeline::with_engine(root, config, MiniJinjaEngine::new())
    }
}

impl<E: Engine> Pipeline<E> {
    pub fn with_engine(root: impl Into<PathBuf>, config: Config, engine: E) -> Self {
        Pipeline { root: root.into(), config, engine }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The release tree's normalized catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let raw = Loader::new(&self.root, &self.config).load()?;
        Ok(Normalizer::new(&self.config.overrides).normalize(raw))
    }

    pub fn version(&self) -> Result<ReleaseVersion> {
        let path = self.root.join(&self.config.version_file);
        ReleaseVersion::read(&path, &self.config.release_notes_base)
    }

    /// Renders every configured page without writing any of them.
    pub fn render(&self) -> Result<Vec<Page>> {
        let version = self.version()?;
        let catalog = self.catalog()?;
        let classification = classify(&self.config.categories, &catalog);
        let context = Context::new(&catalog, &classification, &version, &self.config.globals)
            .develop(self.config.release.is_develop())
            .unreleased(&self.config.unreleased);

        let mut transpiler = Transpiler::new()
            .flag("is_develop", context.is_develop)
            .flag("unreleased_lib_count", context.unreleased_lib_count > 0);

        if let Some(charset) = &self.config.charset {
            transpiler = transpiler.charset(&charset.from, &charset.to);
        }

        let pages = self.config.pages.iter()
            .map(|name| -> Result<Page> {
                let path = self.root.join(name);
                let template = path.as_path().read()?;
                let template = transpiler.transpile(&template).chain_with(|| error! {
                    "invalid page template",
                    "file path" => path.display(),
                })?;

                let rendered = self.engine.render(name, &template, &context)?;
                let content = apply_fixups(&rendered, &self.config.fixups);
                Ok(Page { name: name.clone(), path, content })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            version = %version.version,
            libraries = catalog.len(),
            pages = pages.len(),
            "rendered pages"
        );

        Ok(pages)
    }

    /// Renders every page, then writes them all to `output`.
    pub fn run(&self, output: Output) -> Result<()> {
        let pages = self.render()?;
        output.write(&pages)
    }
}

//! Test doubles for the external collaborators: the stylesheet compiler, the
//! CSS generator and the resolver.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use indexmap::IndexMap;
use stylable_core::plugin::{
  CompiledModule, CssGenerator, CssGeneratorFactory, FsResolver, SheetResolver, SheetResolverRef,
  StylesheetCompiler,
};
use stylable_core::types::{IntegrationOptions, Sheet};
use stylable_filesystem::InMemoryFileSystem;

/// Compiler double. By default it derives the namespace from the module's
/// file stem; sheets and asset mappings can be pinned per resource path.
#[derive(Debug, Default)]
pub(crate) struct StubCompiler {
  sheets: HashMap<PathBuf, Sheet>,
  assets: HashMap<PathBuf, IndexMap<PathBuf, PathBuf>>,
  failure: Option<String>,
}

impl StubCompiler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_sheet(mut self, path: impl Into<PathBuf>, sheet: Sheet) -> Self {
    self.sheets.insert(path.into(), sheet);
    self
  }

  pub fn with_assets(mut self, path: impl Into<PathBuf>, pairs: &[(&str, &str)]) -> Self {
    self.assets.insert(
      path.into(),
      pairs
        .iter()
        .map(|(from, to)| (PathBuf::from(from), PathBuf::from(to)))
        .collect(),
    );
    self
  }

  pub fn failing_with(mut self, message: impl Into<String>) -> Self {
    self.failure = Some(message.into());
    self
  }
}

#[async_trait]
impl StylesheetCompiler for StubCompiler {
  async fn transform(
    &self,
    _source: &str,
    resource_path: &Path,
    _containing_dir: &Path,
    _resolver: &dyn SheetResolver,
    _project_root: &Path,
    options: &IntegrationOptions,
  ) -> Result<CompiledModule, anyhow::Error> {
    if let Some(message) = &self.failure {
      return Err(anyhow!("{message}"));
    }

    let sheet = self.sheets.get(resource_path).cloned().unwrap_or_else(|| {
      let stem = resource_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
      // Mirrors *.st.css naming: the stem of "button.st.css" is "button.st".
      Sheet::new(stem.trim_end_matches(".st"))
    });
    let asset_mapping = self
      .assets
      .get(resource_path)
      .cloned()
      .unwrap_or_default();
    let code = format!(
      "module.exports[\"root\"] = \"{}{}root\";",
      sheet.namespace, options.ns_delimiter
    );

    Ok(CompiledModule {
      sheet,
      code,
      asset_mapping,
    })
  }
}

/// Generator double that records one deterministic chunk per added sheet.
#[derive(Debug, Default)]
pub(crate) struct RecordingGenerator {
  buffer: Vec<String>,
}

impl CssGenerator for RecordingGenerator {
  fn add_sheet(&mut self, sheet: &Sheet) -> Result<(), anyhow::Error> {
    self.buffer.push(generator_chunk(&sheet.namespace));
    Ok(())
  }

  fn buffer(&self) -> &[String] {
    &self.buffer
  }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingGeneratorFactory;

impl CssGeneratorFactory for RecordingGeneratorFactory {
  fn create_generator(
    &self,
    _resolver: SheetResolverRef,
    _options: &IntegrationOptions,
  ) -> Box<dyn CssGenerator> {
    Box::new(RecordingGenerator::default())
  }
}

/// The chunk [`RecordingGenerator`] produces for a namespace.
pub(crate) fn generator_chunk(namespace: &str) -> String {
  format!(".{namespace} {{}}")
}

/// An [`FsResolver`] over a fresh in-memory filesystem rooted at `/src`.
pub(crate) fn fs_resolver() -> (FsResolver, Arc<InMemoryFileSystem>) {
  let fs = Arc::new(InMemoryFileSystem::new());
  let resolver = FsResolver::new("out", "/src", fs.clone());
  (resolver, fs)
}

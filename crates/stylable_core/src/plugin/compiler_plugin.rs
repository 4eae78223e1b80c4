use std::fmt::Debug;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::plugin::SheetResolver;
use crate::types::{IntegrationOptions, Sheet};

/// Package declared as a build dependency for every transformed module, so
/// that upgrading the compiler invalidates incremental rebuilds.
pub const COMPILER_PACKAGE: &str = "stylable";

/// Everything one module transform produces.
#[derive(Debug)]
pub struct CompiledModule {
  /// The compiled sheet record.
  pub sheet: Sheet,
  /// Generated JS module code for the stylesheet.
  pub code: String,
  /// Original asset path mapped to its intended output path, for every asset
  /// the stylesheet references.
  pub asset_mapping: IndexMap<PathBuf, PathBuf>,
}

/// The external stylesheet compiler.
///
/// Compiles one source module into a namespaced sheet, the JS module code
/// that carries its exports, and the asset mapping fragment for any images or
/// fonts the stylesheet references.
#[async_trait]
pub trait StylesheetCompiler: Debug + Send + Sync {
  async fn transform(
    &self,
    source: &str,
    resource_path: &Path,
    containing_dir: &Path,
    resolver: &dyn SheetResolver,
    project_root: &Path,
    options: &IntegrationOptions,
  ) -> Result<CompiledModule, anyhow::Error>;
}

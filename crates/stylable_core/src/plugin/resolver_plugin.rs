use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use stylable_filesystem::{FileSystemRef, Metadata};

pub type SheetResolverRef = Arc<dyn SheetResolver + Send + Sync>;

/// Capability interface for module resolution and asset I/O.
///
/// Satisfied either by a filesystem-backed implementation ([`FsResolver`]) or
/// by one provided by the host build tool.
#[async_trait]
pub trait SheetResolver: Debug + Send + Sync {
  /// Resolve a module path to its source text.
  fn resolve_module(&self, path: &Path) -> Result<String, anyhow::Error>;

  /// Stat an asset path. Emission uses this to skip directories.
  async fn stat(&self, path: &Path) -> io::Result<Box<dyn Metadata>>;

  /// Read an asset's full contents.
  async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

  /// The filesystem handle backing this resolver.
  fn file_system(&self) -> FileSystemRef;
}

/// Filesystem-backed [`SheetResolver`] carrying the default asset prefix and
/// the build's root directory.
#[derive(Clone, Debug)]
pub struct FsResolver {
  default_prefix: String,
  project_root: PathBuf,
  fs: FileSystemRef,
}

impl FsResolver {
  pub fn new(
    default_prefix: impl Into<String>,
    project_root: impl Into<PathBuf>,
    fs: FileSystemRef,
  ) -> Self {
    Self {
      default_prefix: default_prefix.into(),
      project_root: project_root.into(),
      fs,
    }
  }

  pub fn default_prefix(&self) -> &str {
    &self.default_prefix
  }

  pub fn project_root(&self) -> &Path {
    &self.project_root
  }
}

#[async_trait]
impl SheetResolver for FsResolver {
  fn resolve_module(&self, path: &Path) -> Result<String, anyhow::Error> {
    let source = self.fs.read_to_string(path)?;
    Ok(source)
  }

  async fn stat(&self, path: &Path) -> io::Result<Box<dyn Metadata>> {
    self.fs.metadata(path)
  }

  async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
    self.fs.read(path)
  }

  fn file_system(&self) -> FileSystemRef {
    self.fs.clone()
  }
}

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// FileSystem abstraction instance
///
/// This should be `OsFileSystem` for non-testing environments and
/// `InMemoryFileSystem` for testing.
pub type FileSystemRef = Arc<dyn FileSystem + Send + Sync>;

/// Trait abstracting file-system operations
pub trait FileSystem: std::fmt::Debug {
  fn cwd(&self) -> io::Result<PathBuf> {
    Err(io::Error::new(
      io::ErrorKind::Other,
      "Not implemented: FileSystem::cwd",
    ))
  }

  /// Create a directory and all of its missing parents
  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
  fn read_to_string(&self, path: &Path) -> io::Result<String>;
  fn metadata(&self, path: &Path) -> io::Result<Box<dyn Metadata>>;
  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

  fn is_file(&self, path: &Path) -> bool {
    self.metadata(path).map(|m| m.is_file()).unwrap_or(false)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.metadata(path).map(|m| m.is_dir()).unwrap_or(false)
  }
}

/// The subset of `std::fs::Metadata` the integration relies on.
///
/// `Send + Sync` so stat results can cross task boundaries during concurrent
/// asset emission.
pub trait Metadata: Send + Sync {
  fn is_dir(&self) -> bool;
  fn is_file(&self) -> bool;
  fn len(&self) -> u64;
}

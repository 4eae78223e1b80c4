use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::file_system::{FileSystem, Metadata};

#[derive(Clone, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn cwd(&self) -> io::Result<PathBuf> {
    std::env::current_dir()
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn metadata(&self, path: &Path) -> io::Result<Box<dyn Metadata>> {
    let metadata = fs::metadata(path)?;
    Ok(Box::new(OsMetadata::from(metadata)))
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }
}

pub struct OsMetadata {
  inner: fs::Metadata,
}

impl From<fs::Metadata> for OsMetadata {
  fn from(value: fs::Metadata) -> Self {
    Self { inner: value }
  }
}

impl Metadata for OsMetadata {
  fn is_dir(&self) -> bool {
    self.inner.is_dir()
  }

  fn is_file(&self) -> bool {
    self.inner.is_file()
  }

  fn len(&self) -> u64 {
    self.inner.len()
  }
}

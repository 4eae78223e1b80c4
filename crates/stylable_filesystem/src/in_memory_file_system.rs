use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::file_system::{FileSystem, Metadata};

/// In memory implementation of a file-system entry
#[derive(Debug)]
enum InMemoryFileSystemEntry {
  File { contents: Vec<u8> },
  Directory,
}

/// In memory implementation of the `FileSystem` trait, for testing purposes.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, InMemoryFileSystemEntry>>,
}

impl InMemoryFileSystem {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a file and directory entries for all of its parents.
  pub fn write_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
    let path = path.into();
    let mut files = self.files.write();

    let mut dir = path.parent();
    while let Some(parent) = dir {
      if parent.as_os_str().is_empty() {
        break;
      }
      files.insert(parent.to_path_buf(), InMemoryFileSystemEntry::Directory);
      dir = parent.parent();
    }

    files.insert(
      path,
      InMemoryFileSystemEntry::File {
        contents: contents.into(),
      },
    );
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> io::Result<PathBuf> {
    Ok(PathBuf::from("/"))
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    let mut files = self.files.write();
    let mut dir = Some(path);
    while let Some(current) = dir {
      if current.as_os_str().is_empty() {
        break;
      }
      files.insert(current.to_path_buf(), InMemoryFileSystemEntry::Directory);
      dir = current.parent();
    }
    Ok(())
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    let files = self.files.read();
    match files.get(path) {
      None => Err(io::Error::new(io::ErrorKind::NotFound, "File not found")),
      Some(InMemoryFileSystemEntry::File { contents }) => Ok(contents.clone()),
      Some(InMemoryFileSystemEntry::Directory) => Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "Path is a directory",
      )),
    }
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let bytes = self.read(path)?;
    String::from_utf8(bytes).map_err(|_| io::Error::other("Unable to read file as string"))
  }

  fn metadata(&self, path: &Path) -> io::Result<Box<dyn Metadata>> {
    let files = self.files.read();
    match files.get(path) {
      None => Err(io::Error::new(io::ErrorKind::NotFound, "File not found")),
      Some(entry) => Ok(Box::new(InMemoryMetadata {
        inner_is_dir: matches!(entry, InMemoryFileSystemEntry::Directory),
        inner_len: match entry {
          InMemoryFileSystemEntry::File { contents } => contents.len() as u64,
          InMemoryFileSystemEntry::Directory => 0,
        },
      })),
    }
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    self.write_file(path.to_path_buf(), contents.to_vec());
    Ok(())
  }
}

struct InMemoryMetadata {
  inner_is_dir: bool,
  inner_len: u64,
}

impl Metadata for InMemoryMetadata {
  fn is_dir(&self) -> bool {
    self.inner_is_dir
  }

  fn is_file(&self) -> bool {
    !self.inner_is_dir
  }

  fn len(&self) -> u64 {
    self.inner_len
  }
}

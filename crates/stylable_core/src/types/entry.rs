use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Entry name the host assigns when its `entry` option is not a named map.
pub const DEFAULT_ENTRY_NAME: &str = "bundle";

/// The constituent module(s) configured for one entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EntryFiles {
  Single(PathBuf),
  Multiple(Vec<PathBuf>),
}

/// A named root of the application's module graph, as configured in the host
/// build. Produces one JS bundle and one companion CSS bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
  pub name: String,
  pub files: EntryFiles,
}

impl Entry {
  pub fn new(name: impl Into<String>, files: EntryFiles) -> Self {
    Self {
      name: name.into(),
      files,
    }
  }

  /// The module treated as this entry's representative. When multiple files
  /// are configured only the last one counts, mirroring the host's handling
  /// of array-shaped entries.
  pub fn representative(&self) -> Option<&Path> {
    match &self.files {
      EntryFiles::Single(file) => Some(file),
      EntryFiles::Multiple(files) => files.last().map(PathBuf::as_path),
    }
  }
}

/// The shapes the host accepts for its `entry` configuration option.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HostEntryConfig {
  Single(PathBuf),
  Files(Vec<PathBuf>),
  Named(IndexMap<String, EntryFiles>),
}

impl HostEntryConfig {
  /// Normalizes the host configuration into named entry descriptors. Unnamed
  /// forms get the host's default entry name.
  pub fn into_entries(self) -> Vec<Entry> {
    match self {
      HostEntryConfig::Single(file) => {
        vec![Entry::new(DEFAULT_ENTRY_NAME, EntryFiles::Single(file))]
      }
      HostEntryConfig::Files(files) => {
        vec![Entry::new(DEFAULT_ENTRY_NAME, EntryFiles::Multiple(files))]
      }
      HostEntryConfig::Named(entries) => entries
        .into_iter()
        .map(|(name, files)| Entry::new(name, files))
        .collect(),
    }
  }
}

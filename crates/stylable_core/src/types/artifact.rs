use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::Entry;

/// A build output registered with the host bundler, exposing its content and
/// byte length per the host's artifact protocol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleArtifact {
  contents: Arc<Vec<u8>>,
}

impl BundleArtifact {
  pub fn new(contents: impl Into<Vec<u8>>) -> Self {
    Self {
      contents: Arc::new(contents.into()),
    }
  }

  pub fn source(&self) -> &[u8] {
    &self.contents
  }

  pub fn size(&self) -> usize {
    self.contents.len()
  }
}

impl From<String> for BundleArtifact {
  fn from(value: String) -> Self {
    Self::new(value.into_bytes())
  }
}

/// The slice of the host bundler's compilation object this integration
/// interacts with: the configured entries and the artifact map the bundler
/// has produced so far.
#[derive(Debug, Default)]
pub struct Compilation {
  pub project_root: PathBuf,
  pub entries: Vec<Entry>,
  assets: RwLock<HashMap<String, BundleArtifact>>,
}

impl Compilation {
  pub fn new(project_root: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
    Self {
      project_root: project_root.into(),
      entries,
      assets: RwLock::default(),
    }
  }

  pub fn asset(&self, name: &str) -> Option<BundleArtifact> {
    self.assets.read().get(name).cloned()
  }

  /// Registers a build artifact. Re-registering a name replaces the previous
  /// artifact, matching the host's asset map semantics.
  pub fn emit_asset(&self, name: impl Into<String>, artifact: BundleArtifact) {
    self.assets.write().insert(name.into(), artifact);
  }

  pub fn asset_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.assets.read().keys().cloned().collect();
    names.sort();
    names
  }
}

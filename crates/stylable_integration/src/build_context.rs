use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use stylable_core::types::Sheet;

/// Accumulation state for one build.
///
/// Created when a build starts and discarded when it ends, so no state can
/// leak between builds even when watch mode overlaps them. The host may
/// interleave transform calls arbitrarily; both registries sit behind one
/// mutex and every mutation is applied as a single indivisible step.
#[derive(Debug, Default)]
pub struct BuildContext {
  state: Mutex<BuildState>,
}

#[derive(Debug, Default)]
struct BuildState {
  /// Every sheet compiled during this build, in transform invocation order.
  /// Append-only; no de-duplication.
  used_sheets: Vec<Arc<Sheet>>,
  /// Original asset path mapped to its intended output path. Last writer
  /// wins on key collisions.
  project_assets: IndexMap<PathBuf, PathBuf>,
}

impl BuildContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records one successful transform: the compiled sheet and its asset
  /// mapping fragment, merged as one atomic step.
  pub(crate) fn record_transform(
    &self,
    sheet: Arc<Sheet>,
    asset_mapping: IndexMap<PathBuf, PathBuf>,
  ) {
    let mut state = self.state.lock();
    state.project_assets.extend(asset_mapping);
    state.used_sheets.push(sheet);
  }

  /// The sheets compiled so far, in transform invocation order.
  pub fn used_sheets(&self) -> Vec<Arc<Sheet>> {
    self.state.lock().used_sheets.clone()
  }

  /// Snapshot of the accumulated asset mapping.
  pub fn project_assets(&self) -> IndexMap<PathBuf, PathBuf> {
    self.state.lock().project_assets.clone()
  }

  pub fn is_empty(&self) -> bool {
    let state = self.state.lock();
    state.used_sheets.is_empty() && state.project_assets.is_empty()
  }

  /// Clears both registries.
  ///
  /// Runs exactly once per build, after bundle assembly and asset emission
  /// have both consumed their state. Never runs on the failure path, where
  /// the contents are kept for diagnostics.
  pub fn reset(&self) {
    let mut state = self.state.lock();
    state.used_sheets = Vec::new();
    state.project_assets = IndexMap::new();
  }
}

use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the integration stages.
///
/// Compile failures are local to one module and leave the build context
/// untouched. Asset resolution failures abort the whole emit phase.
#[derive(Debug, Error)]
pub enum IntegrationError {
  /// The external stylesheet compiler rejected a module.
  #[error("failed to compile stylesheet {}: {message}", path.display())]
  Compile { path: PathBuf, message: String },

  /// An asset could not be stat'ed or read during emission.
  #[error("failed to resolve asset {}", path.display())]
  AssetResolution {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// An entry's bundled output was missing from the build's artifacts.
  #[error("no bundled output named {name} was produced for this build")]
  MissingBundle { name: String },
}

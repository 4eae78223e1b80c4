use std::path::Path;

use anyhow::Context;
use stylable_core::types::Compilation;
use stylable_filesystem::FileSystemRef;

/// Writes every artifact registered on a compilation out to a file system.
///
/// The in-memory artifact map is the primary sink during a build; this is the
/// final step for hosts that want the output tree on disk. Target directories
/// are created recursively before each write.
#[tracing::instrument(level = "debug", skip_all, fields(output_dir = %output_dir.display()))]
pub fn write_artifacts(
  compilation: &Compilation,
  fs: &FileSystemRef,
  output_dir: &Path,
) -> anyhow::Result<()> {
  for name in compilation.asset_names() {
    let Some(artifact) = compilation.asset(&name) else {
      continue;
    };
    let target = output_dir.join(&name);

    if let Some(parent) = target.parent() {
      fs.create_dir_all(parent)
        .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs.write(&target, artifact.source())
      .with_context(|| format!("failed to write artifact {}", target.display()))?;

    tracing::debug!(artifact = %name, bytes = artifact.size(), "wrote artifact");
  }

  Ok(())
}

use std::path::{Component, Path};
use std::sync::Arc;

use stylable_core::error::IntegrationError;
use stylable_core::plugin::SheetResolverRef;
use stylable_core::types::{BundleArtifact, Compilation, IntegrationOptions};

use crate::build_context::BuildContext;

/// Derives the artifact key for an asset target path.
///
/// Target paths are virtual paths under the configured output prefix; the
/// prefix component is stripped so the key is relative to the build output.
pub(crate) fn artifact_key(target: &Path, default_prefix: &str) -> String {
  let mut components = target.components();
  match components.next() {
    Some(Component::Normal(first)) if first == default_prefix => {
      components.as_path().to_string_lossy().into_owned()
    }
    _ => target.to_string_lossy().into_owned(),
  }
}

/// The asset emission stage.
///
/// Consumes the accumulated asset mapping and materializes every referenced
/// file into the compilation's artifact map. All pairs run concurrently; the
/// stage completes only once every task has settled, and the first failure
/// fails the whole emit phase. Directories are never materialized.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn emit_assets(
  context: &BuildContext,
  compilation: &Arc<Compilation>,
  resolver: SheetResolverRef,
  options: &IntegrationOptions,
) -> anyhow::Result<()> {
  let project_assets = context.project_assets();
  let mut tasks = tokio::task::JoinSet::<anyhow::Result<()>>::new();

  for (original_path, target_path) in project_assets {
    let resolver = resolver.clone();
    let compilation = compilation.clone();
    let key = artifact_key(&target_path, &options.default_prefix);

    tasks.spawn(async move {
      let metadata = resolver.stat(&original_path).await.map_err(|source| {
        IntegrationError::AssetResolution {
          path: original_path.clone(),
          source,
        }
      })?;

      // We don't write empty directories
      if metadata.is_dir() {
        return Ok(());
      }

      let contents = resolver.read_file(&original_path).await.map_err(|source| {
        IntegrationError::AssetResolution {
          path: original_path.clone(),
          source,
        }
      })?;

      tracing::debug!(
        original = %original_path.display(),
        target = %key,
        bytes = contents.len(),
        "emitted asset"
      );
      compilation.emit_asset(key, BundleArtifact::new(contents));
      Ok(())
    });
  }

  // Every task settles before the stage reports; artifacts registered by
  // tasks that succeeded before a failure stay registered.
  let mut failure: Option<anyhow::Error> = None;
  while let Some(joined) = tasks.join_next().await {
    let result = match joined {
      Ok(result) => result,
      Err(join_error) => Err(join_error.into()),
    };
    if let Err(err) = result {
      if failure.is_none() {
        failure = Some(err);
      }
    }
  }

  match failure {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

use std::path::Path;
use std::sync::Arc;

use stylable_core::plugin::{CssGeneratorFactory, SheetResolverRef, StylesheetCompiler};
use stylable_core::types::{Compilation, IntegrationOptions};

use crate::build_context::BuildContext;
use crate::bundle::assemble_css_bundles;
use crate::emit::emit_assets;
use crate::transform::{transform_module, TransformOutput};

/// The stylable build integration plugin.
///
/// One instance serves one build: the host calls [`StylablePlugin::transform`]
/// once per stylesheet module while it builds the module graph, then
/// [`StylablePlugin::emit`] once after it has produced the final per-entry
/// bundles.
#[derive(Debug)]
pub struct StylablePlugin {
  options: IntegrationOptions,
  compiler: Arc<dyn StylesheetCompiler>,
  generator_factory: Arc<dyn CssGeneratorFactory>,
  resolver: SheetResolverRef,
  context: BuildContext,
}

impl StylablePlugin {
  pub fn new(
    options: IntegrationOptions,
    compiler: Arc<dyn StylesheetCompiler>,
    generator_factory: Arc<dyn CssGeneratorFactory>,
    resolver: SheetResolverRef,
  ) -> Self {
    Self {
      options,
      compiler,
      generator_factory,
      resolver,
      context: BuildContext::new(),
    }
  }

  pub fn options(&self) -> &IntegrationOptions {
    &self.options
  }

  pub fn build_context(&self) -> &BuildContext {
    &self.context
  }

  /// The module-transform hook, invoked by the host once per stylesheet
  /// module in whatever order it traverses the graph.
  pub async fn transform(
    &self,
    source: &str,
    resource_path: &Path,
    containing_dir: &Path,
    project_root: &Path,
  ) -> anyhow::Result<TransformOutput> {
    transform_module(
      &self.context,
      self.compiler.as_ref(),
      source,
      resource_path,
      containing_dir,
      self.resolver.as_ref(),
      project_root,
      &self.options,
    )
    .await
  }

  /// The emit hook, invoked by the host once per build after bundling.
  ///
  /// Assembles the per-entry CSS bundles, materializes the referenced assets
  /// and finally clears the build context. When either stage fails the
  /// context is left intact so its contents stay available for diagnostics.
  pub async fn emit(&self, compilation: &Arc<Compilation>) -> anyhow::Result<()> {
    assemble_css_bundles(
      &self.context,
      compilation,
      self.generator_factory.as_ref(),
      self.resolver.clone(),
      &self.options,
    )?;

    emit_assets(&self.context, compilation, self.resolver.clone(), &self.options).await?;

    self.context.reset();
    Ok(())
  }
}

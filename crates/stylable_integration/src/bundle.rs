use std::path::PathBuf;

use indexmap::IndexMap;
use stylable_core::error::IntegrationError;
use stylable_core::plugin::{CssGeneratorFactory, SheetResolverRef};
use stylable_core::types::{BundleArtifact, Compilation, Entry, IntegrationOptions};

use crate::build_context::BuildContext;
use crate::marker::bundle_contains_sheet;

/// Collapses the configured entries to one representative module per entry
/// name. Array-shaped entries keep only their last element.
pub(crate) fn normalize_entries(entries: &[Entry]) -> IndexMap<String, PathBuf> {
  entries
    .iter()
    .filter_map(|entry| {
      entry
        .representative()
        .map(|file| (entry.name.clone(), file.to_path_buf()))
    })
    .collect()
}

/// The bundle assembly stage.
///
/// For each entry, scans the already-bundled JS output for surviving sheet
/// markers, feeds exactly the matching sheets to a per-entry CSS generator
/// and registers the joined result as the `<entry>.css` artifact.
#[tracing::instrument(level = "debug", skip_all)]
pub fn assemble_css_bundles(
  context: &BuildContext,
  compilation: &Compilation,
  generator_factory: &dyn CssGeneratorFactory,
  resolver: SheetResolverRef,
  options: &IntegrationOptions,
) -> anyhow::Result<()> {
  let entries = normalize_entries(&compilation.entries);
  let used_sheets = context.used_sheets();

  for (entry_name, representative) in &entries {
    tracing::debug!(
      entry = %entry_name,
      representative = %representative.display(),
      "assembling css bundle"
    );

    let bundle_name = format!("{entry_name}.js");
    let bundle = compilation
      .asset(&bundle_name)
      .ok_or(IntegrationError::MissingBundle { name: bundle_name })?;
    let bundle_text = String::from_utf8_lossy(bundle.source()).into_owned();

    let mut generator = generator_factory.create_generator(resolver.clone(), options);

    // Later-transformed sheets sit deeper in the import graph and must be
    // emitted first so the cascade matches import order.
    for sheet in used_sheets.iter().rev() {
      if bundle_contains_sheet(&bundle_text, &sheet.namespace) {
        generator.add_sheet(sheet)?;
      }
    }

    let css = generator.buffer().join("\n");
    tracing::debug!(entry = %entry_name, bytes = css.len(), "registered css artifact");
    compilation.emit_asset(format!("{entry_name}.css"), BundleArtifact::from(css));
  }

  Ok(())
}

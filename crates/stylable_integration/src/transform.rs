use std::path::{Path, PathBuf};
use std::sync::Arc;

use stylable_core::error::IntegrationError;
use stylable_core::plugin::{CompiledModule, SheetResolver, StylesheetCompiler, COMPILER_PACKAGE};
use stylable_core::types::IntegrationOptions;

use crate::build_context::BuildContext;
use crate::marker::used_sheet_marker;

/// Result of transforming one stylesheet module.
#[derive(Debug)]
pub struct TransformOutput {
  /// Generated JS module code with the reachability marker appended.
  pub code: String,
  /// Files whose change must re-trigger this module's transform, i.e. every
  /// sheet-level import.
  pub invalidate_on_file_change: Vec<PathBuf>,
  /// Packages whose upgrade must re-trigger this module's transform.
  pub invalidate_on_package_change: Vec<String>,
}

/// The per-module transform stage.
///
/// Compiles the module, appends its sheet to the usage registry, merges its
/// asset contributions and tags the generated code with the sheet's marker.
/// A compile failure propagates without mutating the build context.
#[tracing::instrument(level = "debug", skip_all, fields(resource_path = %resource_path.display()))]
pub async fn transform_module(
  context: &BuildContext,
  compiler: &dyn StylesheetCompiler,
  source: &str,
  resource_path: &Path,
  containing_dir: &Path,
  resolver: &dyn SheetResolver,
  project_root: &Path,
  options: &IntegrationOptions,
) -> anyhow::Result<TransformOutput> {
  let CompiledModule {
    sheet,
    code,
    asset_mapping,
  } = compiler
    .transform(
      source,
      resource_path,
      containing_dir,
      resolver,
      project_root,
      options,
    )
    .await
    .map_err(|err| IntegrationError::Compile {
      path: resource_path.to_path_buf(),
      message: format!("{err:#}"),
    })?;

  let code = format!("{code}{}", used_sheet_marker(&sheet.namespace));
  let invalidate_on_file_change = sheet
    .imports
    .iter()
    .map(|import| import.from.clone())
    .collect();

  tracing::debug!(
    namespace = %sheet.namespace,
    assets = asset_mapping.len(),
    "recorded compiled stylesheet"
  );
  context.record_transform(Arc::new(sheet), asset_mapping);

  Ok(TransformOutput {
    code,
    invalidate_on_file_change,
    invalidate_on_package_change: vec![COMPILER_PACKAGE.to_string()],
  })
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use stylable_core::types::{Sheet, SheetImport};

  use super::*;
  use crate::testing::{fs_resolver, StubCompiler};

  #[tokio::test]
  async fn appends_marker_and_records_the_sheet() {
    let context = BuildContext::new();
    let compiler = StubCompiler::new();
    let (resolver, _fs) = fs_resolver();
    let options = IntegrationOptions::default();

    let output = transform_module(
      &context,
      &compiler,
      ".root { color: red }",
      Path::new("/src/button.st.css"),
      Path::new("/src"),
      &resolver,
      Path::new("/src"),
      &options,
    )
    .await
    .unwrap();

    assert!(output
      .code
      .ends_with("\n//*stylable*button*stylable*"));
    assert_eq!(output.invalidate_on_package_change, vec!["stylable"]);

    let sheets = context.used_sheets();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].namespace, "button");
  }

  #[tokio::test]
  async fn declares_every_sheet_import_for_invalidation() {
    let context = BuildContext::new();
    let compiler = StubCompiler::new().with_sheet(
      "/src/button.st.css",
      Sheet::with_imports(
        "button",
        vec![
          SheetImport {
            from: "/src/base.st.css".into(),
          },
          SheetImport {
            from: "/src/theme.st.css".into(),
          },
        ],
      ),
    );
    let (resolver, _fs) = fs_resolver();
    let options = IntegrationOptions::default();

    let output = transform_module(
      &context,
      &compiler,
      ".root {}",
      Path::new("/src/button.st.css"),
      Path::new("/src"),
      &resolver,
      Path::new("/src"),
      &options,
    )
    .await
    .unwrap();

    assert_eq!(
      output.invalidate_on_file_change,
      vec![
        PathBuf::from("/src/base.st.css"),
        PathBuf::from("/src/theme.st.css")
      ]
    );
  }

  #[tokio::test]
  async fn transforming_the_same_module_twice_records_two_sheets() {
    let context = BuildContext::new();
    let compiler = StubCompiler::new();
    let (resolver, _fs) = fs_resolver();
    let options = IntegrationOptions::default();

    for _ in 0..2 {
      transform_module(
        &context,
        &compiler,
        ".root {}",
        Path::new("/src/button.st.css"),
        Path::new("/src"),
        &resolver,
        Path::new("/src"),
        &options,
      )
      .await
      .unwrap();
    }

    assert_eq!(context.used_sheets().len(), 2);
  }

  #[tokio::test]
  async fn compile_failure_leaves_the_context_untouched() {
    let context = BuildContext::new();
    let compiler = StubCompiler::new().failing_with("unexpected token");
    let (resolver, _fs) = fs_resolver();
    let options = IntegrationOptions::default();

    let err = transform_module(
      &context,
      &compiler,
      ".root {",
      Path::new("/src/broken.st.css"),
      Path::new("/src"),
      &resolver,
      Path::new("/src"),
      &options,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("/src/broken.st.css"));
    assert!(context.is_empty());
  }
}

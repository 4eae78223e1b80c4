use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One import declared by a compiled stylesheet.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SheetImport {
  /// Path of the imported stylesheet source.
  pub from: PathBuf,
}

/// The compiled representation of one source stylesheet.
///
/// Produced by the external stylesheet compiler. Immutable once it enters the
/// usage registry; a module transformed twice in one build contributes two
/// separate records.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Sheet {
  /// Unique identifier assigned to the compiled stylesheet. Used both for
  /// CSS scoping and as the reachability marker payload.
  pub namespace: String,
  /// Sheet-level imports, in source order.
  pub imports: Vec<SheetImport>,
}

impl Sheet {
  pub fn new(namespace: impl Into<String>) -> Self {
    Self {
      namespace: namespace.into(),
      imports: Vec::new(),
    }
  }

  pub fn with_imports(namespace: impl Into<String>, imports: Vec<SheetImport>) -> Self {
    Self {
      namespace: namespace.into(),
      imports,
    }
  }
}

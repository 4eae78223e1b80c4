use std::fmt::Debug;

use crate::plugin::SheetResolverRef;
use crate::types::{IntegrationOptions, Sheet};

/// Accumulates the CSS output buffer for one entry.
///
/// One generator instance is scoped to one entry; the assembly stage joins
/// its buffered chunks with newline separators to produce the entry's CSS.
pub trait CssGenerator: Debug {
  /// Add a reachable sheet to this entry's output.
  fn add_sheet(&mut self, sheet: &Sheet) -> Result<(), anyhow::Error>;

  /// The CSS chunks buffered so far, in the order they were added.
  fn buffer(&self) -> &[String];
}

/// Creates one [`CssGenerator`] per entry during bundle assembly.
pub trait CssGeneratorFactory: Debug + Send + Sync {
  fn create_generator(
    &self,
    resolver: SheetResolverRef,
    options: &IntegrationOptions,
  ) -> Box<dyn CssGenerator>;
}

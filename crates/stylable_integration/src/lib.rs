//! Build-pipeline integration for the stylable stylesheet language.
//!
//! The pipeline has two phases. During module transforms every compiled
//! stylesheet is recorded in a per-build [`build_context::BuildContext`] and
//! its generated code is tagged with a detectable marker. When the host
//! bundler finalizes a build, [`bundle`] scans each entry's bundled output
//! for surviving markers and assembles a CSS bundle for exactly the sheets
//! that were not tree-shaken away, then [`emit`] materializes every asset
//! those sheets reference.

pub mod build_context;
pub mod bundle;
pub mod emit;
pub mod marker;
pub mod plugin;
pub mod sink;
pub mod transform;

#[cfg(test)]
pub(crate) mod testing;

pub use build_context::BuildContext;
pub use plugin::StylablePlugin;

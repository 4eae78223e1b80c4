use serde::Deserialize;

/// Recognized integration options together with their built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrationOptions {
  /// Separator placed between a sheet's namespace and a local class name in
  /// generated selectors.
  pub ns_delimiter: String,
  /// Leading path component under which compiled assets are targeted. It is
  /// stripped off a target path when deriving the artifact key.
  pub default_prefix: String,
}

impl Default for IntegrationOptions {
  fn default() -> Self {
    Self {
      ns_delimiter: "__".into(),
      default_prefix: "out".into(),
    }
  }
}

impl IntegrationOptions {
  /// Built-in defaults with any caller-supplied overrides applied on top.
  pub fn merged(overrides: IntegrationOptionsOverrides) -> Self {
    let defaults = Self::default();
    Self {
      ns_delimiter: overrides.ns_delimiter.unwrap_or(defaults.ns_delimiter),
      default_prefix: overrides.default_prefix.unwrap_or(defaults.default_prefix),
    }
  }
}

/// Caller-supplied option overrides, typically deserialized from the host's
/// loader configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationOptionsOverrides {
  pub ns_delimiter: Option<String>,
  pub default_prefix: Option<String>,
}

const MARKER_DELIMITER: &str = "*stylable*";

/// Builds the reachability marker appended to a transformed module's
/// generated code.
///
/// The token rides along as a trailing line comment, so it never changes the
/// module's runtime semantics. It must remain a literal substring of the
/// final bundle text: detection is a plain substring search, and minification
/// that strips line comments will defeat it.
pub fn used_sheet_marker(namespace: &str) -> String {
  format!("\n//{MARKER_DELIMITER}{namespace}{MARKER_DELIMITER}")
}

/// True when the marker for `namespace` survived into `bundle_text`.
pub fn bundle_contains_sheet(bundle_text: &str, namespace: &str) -> bool {
  bundle_text.contains(&used_sheet_marker(namespace))
}

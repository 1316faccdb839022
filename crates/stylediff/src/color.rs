//! The color-bearing property heuristic.
//!
//! An override stylesheet may be loaded with lower specificity than the rules
//! it overrides expect, so color-affecting declarations are always carried in
//! the diff, even when the value is unchanged. Which properties count is a
//! plain string match on the property name; values are never inspected.

use std::sync::LazyLock;

use regex::Regex;

/// Property-name fragments that may carry a color.
static COLOR_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("color|background|border|text|outline").expect("valid regex"));

/// Structural suffixes that disqualify a fragment when they follow it directly.
const STRUCTURAL_SUFFIXES: &[&str] = &[
    "-width",
    "-radius",
    "-offset",
    "-style",
    "-align",
    "-overflow",
    "-transform",
];

/// Returns `true` if `property` is treated as color-bearing.
///
/// A property qualifies if it contains `color`, `background`, `border`, `text`
/// or `outline` at an occurrence that is not immediately followed by one of
/// the structural suffixes (`-width`, `-radius`, `-offset`, `-style`,
/// `-align`, `-overflow`, `-transform`). Matching is case-sensitive and
/// unanchored, so vendor-prefixed names qualify too.
///
/// ```
/// use stylediff::is_color_property;
///
/// assert!(is_color_property("background-color"));
/// assert!(is_color_property("border-left"));
/// assert!(!is_color_property("border-radius"));
/// assert!(!is_color_property("margin-top"));
/// ```
pub fn is_color_property(property: &str) -> bool {
    // The fragments never overlap one another, so scanning non-overlapping
    // matches visits every candidate position.
    COLOR_FAMILY.find_iter(property).any(|m| {
        let rest = &property[m.end()..];
        !STRUCTURAL_SUFFIXES
            .iter()
            .any(|suffix| rest.starts_with(suffix))
    })
}

//! Term cleaning — strip bracketed annotations and split variant lists.
//!
//! A denomination such as `car (vehicle) | auto [colloq.]` carries two term
//! variants and two annotations. Annotation removal is non-greedy and
//! non-recursive: each `( … )` or `[ … ]` pair is removed on its own, and an
//! opening bracket with no closing partner is left untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Separator between term variants inside one denomination.
pub const VARIANT_SEPARATOR: char = '|';

/// Parenthesized or bracketed annotation, with any whitespace before it.
static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)|\s*\[.*?\]").unwrap());

/// Remove annotations from `raw` and split it into term variants.
///
/// Never yields an empty string; a term made only of annotations yields
/// nothing at all.
pub fn clean_and_split(raw: &str) -> Vec<String> {
    let cleaned = RE_ANNOTATION.replace_all(raw, "");
    cleaned
        .trim()
        .split(VARIANT_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

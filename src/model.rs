//! Data model — glossary records as read from the source document, and the
//! format-agnostic entries handed to the renderers.

use std::collections::BTreeMap;

/// One `fitxa` element of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Identifier, either from the `num` attribute or positional (`e<N>`).
    pub id: String,
    /// Thematic area; `None` when absent or blank.
    pub area: Option<String>,
    pub definitions: Vec<Definition>,
    pub denominations: Vec<Denomination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Lowercased language code.
    pub lang: String,
    /// Trimmed text with line breaks flattened to spaces.
    pub text: String,
}

/// One raw term declaration. `text` may hold several variants and
/// annotations; see [`crate::clean`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denomination {
    pub lang: String,
    pub text: String,
    /// Part-of-speech tag (`categoria`), e.g. "n m".
    pub category: String,
    /// Role (`tipus`), e.g. "principal".
    pub term_type: String,
    /// Normative tag (`jerarquia`), e.g. "terme pral.".
    pub hierarchy: String,
}

/// A term variant that survived filtering and cleaning.
///
/// Classification fields are `None` when empty in the source or when their
/// include flag is off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTerm {
    pub term: String,
    pub category: Option<String>,
    pub term_type: Option<String>,
    pub hierarchy: Option<String>,
}

/// The unit handed to the renderers: one exportable concept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub id: String,
    pub area: Option<String>,
    /// Terms per language, in document order.
    pub terms: BTreeMap<String, Vec<ExtractedTerm>>,
    /// At most one definition per language.
    pub definitions: BTreeMap<String, String>,
}

impl ExtractedEntry {
    pub fn terms_in(&self, lang: &str) -> &[ExtractedTerm] {
        self.terms.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn definition_in(&self, lang: &str) -> Option<&str> {
        self.definitions.get(lang).map(String::as_str)
    }
}

/// Optional fields copied into the output. They never affect filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncludeFlags {
    pub area: bool,
    pub definition: bool,
    pub category: bool,
    pub term_type: bool,
    pub hierarchy: bool,
}

impl IncludeFlags {
    /// Number of enabled flags, i.e. optional tabular columns.
    pub fn count(&self) -> usize {
        [
            self.area,
            self.definition,
            self.category,
            self.term_type,
            self.hierarchy,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

//! Tabular renderer — one tab-separated row per source/target term pair.
//!
//! Fields are written as-is: no quoting, no escaping. Line breaks were
//! already flattened when the document was read.
//!
//! Every source term is paired with every target term, so an entry with
//! m source and n target terms yields m × n rows. No cap is applied.

use crate::model::{ExtractedEntry, ExtractedTerm, IncludeFlags};
use crate::render::Renderer;

pub struct TsvRenderer {
    pub source: String,
    pub target: String,
    pub include: IncludeFlags,
    pub header: bool,
}

impl TsvRenderer {
    fn header_row(&self) -> Vec<&'static str> {
        let mut row = vec!["SL_Term", "TL_Term"];
        let optional = [
            (self.include.area, "Thematic_Area"),
            (self.include.definition, "SL_Definition"),
            (self.include.category, "Term_Category"),
            (self.include.term_type, "Term_Type"),
            (self.include.hierarchy, "Term_Hierarchy"),
        ];
        row.extend(optional.iter().filter(|(on, _)| *on).map(|(_, name)| *name));
        row
    }

    fn row<'a>(
        &self,
        entry: &'a ExtractedEntry,
        source: &'a ExtractedTerm,
        target: &'a ExtractedTerm,
    ) -> Vec<&'a str> {
        let mut row = vec![source.term.as_str(), target.term.as_str()];
        if self.include.area {
            row.push(entry.area.as_deref().unwrap_or(""));
        }
        if self.include.definition {
            row.push(entry.definition_in(&self.source).unwrap_or(""));
        }
        // classification columns describe the source term
        if self.include.category {
            row.push(source.category.as_deref().unwrap_or(""));
        }
        if self.include.term_type {
            row.push(source.term_type.as_deref().unwrap_or(""));
        }
        if self.include.hierarchy {
            row.push(source.hierarchy.as_deref().unwrap_or(""));
        }
        row
    }
}

impl Renderer for TsvRenderer {
    fn render(&self, entries: &[ExtractedEntry]) -> String {
        let mut out = String::new();
        if self.header {
            push_row(&mut out, &self.header_row());
        }

        let placeholder = [ExtractedTerm::default()];
        for entry in entries {
            let sources = non_empty_or(entry.terms_in(&self.source), &placeholder);
            let targets = non_empty_or(entry.terms_in(&self.target), &placeholder);
            for source in sources {
                for target in targets {
                    push_row(&mut out, &self.row(entry, source, target));
                }
            }
        }
        out
    }
}

fn non_empty_or<'a>(
    terms: &'a [ExtractedTerm],
    fallback: &'a [ExtractedTerm],
) -> &'a [ExtractedTerm] {
    if terms.is_empty() {
        fallback
    } else {
        terms
    }
}

fn push_row(out: &mut String, fields: &[&str]) {
    out.push_str(&fields.join("\t"));
    out.push('\n');
}

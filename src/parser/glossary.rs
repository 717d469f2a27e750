//! Glossary XML reader.
//!
//! `fitxa` elements may appear at any depth. Each one carries an optional
//! `num` identifier and direct children:
//!
//! ```text
//! <fitxa num="42">
//!   <areatematica>zoologia</areatematica>
//!   <definicio llengua="ca">Mamífer domèstic.</definicio>
//!   <denominacio llengua="ca" categoria="n m" tipus="principal" jerarquia="terme pral.">gos</denominacio>
//! </fitxa>
//! ```
//!
//! Missing pieces degrade to empty values; only a document that is not
//! well-formed XML is rejected.

use crate::languages::normalize_code;
use crate::model::{Definition, Denomination, GlossaryEntry};
use roxmltree::{Document, Node, ParsingOptions};

const ENTRY: &str = "fitxa";
const AREA: &str = "areatematica";
const DEFINITION: &str = "definicio";
const DENOMINATION: &str = "denominacio";

const ATTR_ID: &str = "num";
const ATTR_LANG: &str = "llengua";
const ATTR_CATEGORY: &str = "categoria";
const ATTR_TYPE: &str = "tipus";
const ATTR_HIERARCHY: &str = "jerarquia";

/// Parse a glossary document, returning its entries in document order.
pub fn parse(content: &str) -> Result<Vec<GlossaryEntry>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)?;

    let entries = doc
        .descendants()
        .filter(|n| n.has_tag_name(ENTRY))
        .enumerate()
        .map(|(i, node)| read_entry(node, i + 1))
        .collect();
    Ok(entries)
}

fn read_entry(node: Node, position: usize) -> GlossaryEntry {
    let id = node
        .attribute(ATTR_ID)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("e{}", position));

    let area = node
        .children()
        .find(|c| c.has_tag_name(AREA))
        .map(element_text)
        .filter(|a| !a.is_empty());

    let definitions = node
        .children()
        .filter(|c| c.has_tag_name(DEFINITION))
        .map(|c| Definition {
            lang: normalize_code(c.attribute(ATTR_LANG).unwrap_or("")),
            text: element_text(c),
        })
        .collect();

    let denominations = node
        .children()
        .filter(|c| c.has_tag_name(DENOMINATION))
        .map(|c| Denomination {
            lang: normalize_code(c.attribute(ATTR_LANG).unwrap_or("")),
            text: element_text(c),
            category: attribute(c, ATTR_CATEGORY),
            term_type: attribute(c, ATTR_TYPE),
            hierarchy: attribute(c, ATTR_HIERARCHY),
        })
        .collect();

    GlossaryEntry {
        id,
        area,
        definitions,
        denominations,
    }
}

/// Leading text of an element, trimmed, with line breaks flattened.
fn element_text(node: Node) -> String {
    flatten_line_breaks(node.text().unwrap_or("")).trim().to_string()
}

fn attribute(node: Node, name: &str) -> String {
    node.attribute(name).unwrap_or("").trim().to_string()
}

/// Tabular output cannot carry embedded line breaks.
pub fn flatten_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

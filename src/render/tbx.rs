//! TBX renderer — TermBase eXchange document, pretty-printed.
//!
//! The root element, header block and annotation types reproduce the
//! layout existing termbase tools already import:
//!
//! ```text
//! <martif type="TBX" version="2.0" ...>
//!   <martifHeader>...</martifHeader>
//!   <text>
//!     <body>
//!       <termEntry id="...">
//!         <descrip type="subject">...</descrip>
//!         <langSet xml:lang="..">
//!           <descrip type="definition">...</descrip>
//!           <tig><term>...</term><termNote type="partOfSpeech">...</termNote></tig>
//! ```

use crate::languages::LanguageSelection;
use crate::model::{ExtractedEntry, ExtractedTerm, IncludeFlags};
use crate::render::Renderer;

pub const TBX_NAMESPACE: &str = "urn:iso:std:iso:61440:TBX-core";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace table attached to the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    pub tbx: String,
    pub xml: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Namespaces {
            tbx: TBX_NAMESPACE.to_string(),
            xml: XML_NAMESPACE.to_string(),
        }
    }
}

pub struct TbxRenderer {
    namespaces: Namespaces,
    languages: LanguageSelection,
    include: IncludeFlags,
    title: String,
    creation_date: String,
}

impl TbxRenderer {
    pub fn new(
        namespaces: Namespaces,
        languages: LanguageSelection,
        include: IncludeFlags,
        source_name: &str,
        creation_date: String,
    ) -> Self {
        TbxRenderer {
            namespaces,
            languages,
            include,
            title: format!("TBX Conversion from {}", source_name),
            creation_date,
        }
    }

    fn render_header(&self, w: &mut XmlWriter) {
        w.open("martifHeader", &[]);
        w.open("fileDesc", &[]);
        w.text_element("titleStmt", &[], &self.title);
        w.empty("pubStmt", &[]);
        w.close("fileDesc");
        w.open("encodingDesc", &[]);
        w.empty("encoding", &[("ref", "UTF-8"), ("name", "UNICODE")]);
        w.close("encodingDesc");
        w.empty("creationDate", &[("date", self.creation_date.as_str())]);
        w.close("martifHeader");
    }

    fn render_entry(&self, w: &mut XmlWriter, entry: &ExtractedEntry) {
        w.open("termEntry", &[("id", entry.id.as_str())]);

        if self.include.area {
            if let Some(ref area) = entry.area {
                w.text_element("descrip", &[("type", "subject")], area);
            }
        }

        for lang in self.languages.ordered() {
            let terms = entry.terms_in(lang);
            let definition = if self.include.definition {
                entry.definition_in(lang)
            } else {
                None
            };
            if terms.is_empty() && definition.is_none() {
                continue;
            }

            w.open("langSet", &[("xml:lang", lang)]);
            if let Some(def) = definition {
                w.text_element("descrip", &[("type", "definition")], def);
            }
            for term in terms {
                self.render_term(w, term);
            }
            w.close("langSet");
        }

        w.close("termEntry");
    }

    fn render_term(&self, w: &mut XmlWriter, term: &ExtractedTerm) {
        w.open("tig", &[]);
        w.text_element("term", &[], &term.term);
        let notes = [
            (self.include.category, "partOfSpeech", &term.category),
            (self.include.term_type, "termType", &term.term_type),
            (self.include.hierarchy, "normativeAuthorization", &term.hierarchy),
        ];
        for (included, kind, value) in notes {
            if let (true, Some(value)) = (included, value) {
                w.text_element("termNote", &[("type", kind)], value);
            }
        }
        w.close("tig");
    }
}

impl Renderer for TbxRenderer {
    fn render(&self, entries: &[ExtractedEntry]) -> String {
        let mut w = XmlWriter::default();
        w.declaration();

        let mut root = vec![("type", "TBX"), ("version", "2.0")];
        if let Some(lang) = self.languages.primary() {
            root.push(("xml:lang", lang));
        }
        root.push(("xmlns", self.namespaces.tbx.as_str()));
        root.push(("xmlns:xml", self.namespaces.xml.as_str()));
        w.open("martif", &root);

        self.render_header(&mut w);

        w.open("text", &[]);
        if entries.is_empty() {
            w.empty("body", &[]);
        } else {
            w.open("body", &[]);
            for entry in entries {
                self.render_entry(&mut w, entry);
            }
            w.close("body");
        }
        w.close("text");

        w.close("martif");
        w.finish()
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Minimal indenting XML writer; two spaces per level.
#[derive(Default)]
struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    fn declaration(&mut self) {
        self.out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push_str(&format!("</{}>\n", name));
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.start_tag(name, attrs);
        self.out.push_str(" />\n");
    }

    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        self.start_tag(name, attrs);
        self.out.push_str(&format!(">{}</{}>\n", xml_escape(text), name));
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(name);
        for (key, value) in attrs {
            self.out.push_str(&format!(" {}=\"{}\"", key, xml_escape(value)));
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

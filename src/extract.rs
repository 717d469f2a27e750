//! Entry extraction — select, filter and clean the term variants of each
//! glossary entry and decide whether the entry is exported at all.
//!
//! Per entry:
//!
//! 1. **Area** — kept only when requested.
//! 2. **Definitions** — first non-empty definition per language of interest
//!    (or every definition, for sense fan-out).
//! 3. **Denominations** — each one in a validating language is checked
//!    against the filters (target-language ones only when
//!    [`Extractor::filter_target_terms`] is set); survivors are cleaned and
//!    split into term variants. A survivor in a validating language marks
//!    the entry valid.
//! 4. **Validity** — entries never marked valid, or left without a term in a
//!    validating language, are dropped whole.

use crate::clean::clean_and_split;
use crate::filter::Filters;
use crate::languages::LanguageSelection;
use crate::model::{ExtractedEntry, ExtractedTerm, GlossaryEntry, IncludeFlags};
use std::collections::BTreeMap;

/// Settings for one extraction pass.
#[derive(Debug, Clone)]
pub struct Extractor {
    pub languages: LanguageSelection,
    pub filters: Filters,
    pub include: IncludeFlags,
    /// Emit one entry per definition index instead of keeping only the first.
    pub one_entry_per_sense: bool,
    /// Also apply the filters to languages that cannot validate an entry
    /// (the target in pair mode). Off: target terms are exported as found.
    pub filter_target_terms: bool,
}

/// Result of extracting a whole document.
#[derive(Debug, Default)]
pub struct Extraction {
    pub entries: Vec<ExtractedEntry>,
    /// Source entries examined.
    pub scanned: usize,
    /// Source entries that produced at least one output entry.
    pub exported: usize,
}

impl Extractor {
    /// Extract every entry, preserving document order.
    pub fn extract_all(&self, entries: &[GlossaryEntry]) -> Extraction {
        let mut extracted = Vec::new();
        let mut exported = 0;
        for entry in entries {
            let out = self.extract(entry);
            if !out.is_empty() {
                exported += 1;
            }
            extracted.extend(out);
        }
        Extraction {
            entries: extracted,
            scanned: entries.len(),
            exported,
        }
    }

    /// Extract one entry. Empty when the entry does not qualify; more than
    /// one element only with sense fan-out.
    pub fn extract(&self, entry: &GlossaryEntry) -> Vec<ExtractedEntry> {
        let Some(terms) = self.collect_terms(entry) else {
            tracing::debug!(id = %entry.id, "entry skipped: no qualifying term");
            return Vec::new();
        };

        let area = if self.include.area {
            entry.area.clone()
        } else {
            None
        };

        let senses = self.collect_senses(entry);
        if senses.len() <= 1 {
            return vec![ExtractedEntry {
                id: entry.id.clone(),
                area,
                terms,
                definitions: senses.into_iter().next().unwrap_or_default(),
            }];
        }

        senses
            .into_iter()
            .enumerate()
            .map(|(i, definitions)| ExtractedEntry {
                id: format!("{}-{}", entry.id, i + 1),
                area: area.clone(),
                terms: terms.clone(),
                definitions,
            })
            .collect()
    }

    /// Filtered, cleaned terms per language, or `None` if the entry is not
    /// exportable.
    fn collect_terms(&self, entry: &GlossaryEntry) -> Option<BTreeMap<String, Vec<ExtractedTerm>>> {
        let mut terms: BTreeMap<String, Vec<ExtractedTerm>> = BTreeMap::new();
        let mut valid = false;

        for den in &entry.denominations {
            if !self.languages.is_of_interest(&den.lang) || den.text.is_empty() {
                continue;
            }
            let validating = self.languages.establishes_validity(&den.lang);
            if (validating || self.filter_target_terms)
                && !self
                    .filters
                    .passes(&den.category, &den.term_type, &den.hierarchy)
            {
                continue;
            }
            if validating {
                valid = true;
            }

            let variants = clean_and_split(&den.text);
            if variants.is_empty() {
                continue;
            }
            let list = terms.entry(den.lang.clone()).or_default();
            for term in variants {
                list.push(ExtractedTerm {
                    term,
                    category: project(self.include.category, &den.category),
                    term_type: project(self.include.term_type, &den.term_type),
                    hierarchy: project(self.include.hierarchy, &den.hierarchy),
                });
            }
        }

        let has_validating_term = terms
            .keys()
            .any(|lang| self.languages.establishes_validity(lang));
        if valid && has_validating_term {
            Some(terms)
        } else {
            None
        }
    }

    /// Definition maps, one per sense. Empty when definitions are excluded.
    fn collect_senses(&self, entry: &GlossaryEntry) -> Vec<BTreeMap<String, String>> {
        if !self.include.definition {
            return Vec::new();
        }

        let mut by_lang: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for def in &entry.definitions {
            if def.text.is_empty() || !self.languages.is_of_interest(&def.lang) {
                continue;
            }
            by_lang
                .entry(def.lang.as_str())
                .or_default()
                .push(def.text.as_str());
        }

        let count = if self.one_entry_per_sense {
            by_lang.values().map(Vec::len).max().unwrap_or(0)
        } else {
            by_lang.len().min(1)
        };

        (0..count)
            .map(|i| {
                by_lang
                    .iter()
                    .filter_map(|(lang, texts)| {
                        texts.get(i).map(|t| (lang.to_string(), t.to_string()))
                    })
                    .collect()
            })
            .collect()
    }
}

fn project(included: bool, value: &str) -> Option<String> {
    if included && !value.is_empty() {
        Some(value.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterSet;
    use crate::model::{Definition, Denomination};

    fn den(lang: &str, text: &str, category: &str, term_type: &str) -> Denomination {
        Denomination {
            lang: lang.into(),
            text: text.into(),
            category: category.into(),
            term_type: term_type.into(),
            hierarchy: String::new(),
        }
    }

    fn def(lang: &str, text: &str) -> Definition {
        Definition {
            lang: lang.into(),
            text: text.into(),
        }
    }

    fn dog() -> GlossaryEntry {
        GlossaryEntry {
            id: "1".into(),
            area: Some("zoologia".into()),
            definitions: vec![def("ca", "Mamífer domèstic."), def("es", "Mamífero doméstico.")],
            denominations: vec![den("ca", "gos", "n", "principal"), den("es", "perro", "", "")],
        }
    }

    fn pair() -> Extractor {
        Extractor {
            languages: LanguageSelection::pair("ca", "es"),
            filters: Filters::default(),
            include: IncludeFlags::default(),
            one_entry_per_sense: false,
            filter_target_terms: false,
        }
    }

    fn terms(entry: &ExtractedEntry, lang: &str) -> Vec<String> {
        entry.terms_in(lang).iter().map(|t| t.term.clone()).collect()
    }

    #[test]
    fn uncategorized_target_survives_a_category_filter() {
        let ex = Extractor {
            filters: Filters {
                category_prefixes: FilterSet::from_text("n"),
                ..Default::default()
            },
            ..pair()
        };
        let out = ex.extract(&dog());
        assert_eq!(out.len(), 1);
        assert_eq!(terms(&out[0], "ca"), vec!["gos"]);
        assert_eq!(terms(&out[0], "es"), vec!["perro"]);
    }

    #[test]
    fn target_filtering_drops_failing_target_terms() {
        let ex = Extractor {
            filters: Filters {
                category_prefixes: FilterSet::from_text("n"),
                ..Default::default()
            },
            filter_target_terms: true,
            ..pair()
        };
        let out = ex.extract(&dog());
        assert_eq!(out.len(), 1);
        assert_eq!(terms(&out[0], "ca"), vec!["gos"]);
        // no category on the es term, so the active axis rejects it
        assert!(terms(&out[0], "es").is_empty());

        let mut entry = dog();
        entry.denominations[1].category = "n".into();
        let out = ex.extract(&entry);
        assert_eq!(terms(&out[0], "es"), vec!["perro"]);
    }

    #[test]
    fn failing_source_term_drops_the_entry() {
        let ex = Extractor {
            filters: Filters {
                category_prefixes: FilterSet::from_text("v"),
                ..Default::default()
            },
            ..pair()
        };
        assert!(ex.extract(&dog()).is_empty());
    }

    #[test]
    fn target_alone_cannot_validate_in_pair_mode() {
        let entry = GlossaryEntry {
            id: "2".into(),
            denominations: vec![den("es", "perro", "n", "")],
            ..Default::default()
        };
        assert!(pair().extract(&entry).is_empty());
    }

    #[test]
    fn source_term_cleaned_to_nothing_drops_the_entry() {
        let entry = GlossaryEntry {
            id: "3".into(),
            denominations: vec![den("ca", "(nota)", "n", ""), den("es", "perro", "n", "")],
            ..Default::default()
        };
        assert!(pair().extract(&entry).is_empty());
    }

    #[test]
    fn variants_share_classification() {
        let entry = GlossaryEntry {
            id: "4".into(),
            denominations: vec![den("ca", "car (vehicle) | auto", "n m", "principal")],
            ..Default::default()
        };
        let ex = Extractor {
            include: IncludeFlags {
                category: true,
                term_type: true,
                ..Default::default()
            },
            ..pair()
        };
        let out = ex.extract(&entry);
        let list = out[0].terms_in("ca");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].term, "car");
        assert_eq!(list[1].term, "auto");
        for t in list {
            assert_eq!(t.category.as_deref(), Some("n m"));
            assert_eq!(t.term_type.as_deref(), Some("principal"));
            assert_eq!(t.hierarchy, None);
        }
    }

    #[test]
    fn excluded_fields_are_not_copied() {
        let out = pair().extract(&dog());
        assert_eq!(out[0].area, None);
        assert!(out[0].definitions.is_empty());
        assert_eq!(out[0].terms_in("ca")[0].category, None);
    }

    #[test]
    fn included_fields_are_copied() {
        let ex = Extractor {
            include: IncludeFlags {
                area: true,
                definition: true,
                ..Default::default()
            },
            ..pair()
        };
        let out = ex.extract(&dog());
        assert_eq!(out[0].area.as_deref(), Some("zoologia"));
        assert_eq!(out[0].definition_in("ca"), Some("Mamífer domèstic."));
        assert_eq!(out[0].definition_in("es"), Some("Mamífero doméstico."));
    }

    #[test]
    fn first_non_empty_definition_wins() {
        let mut entry = dog();
        entry.definitions = vec![def("ca", ""), def("ca", "primera"), def("ca", "segona")];
        let ex = Extractor {
            include: IncludeFlags {
                definition: true,
                ..Default::default()
            },
            ..pair()
        };
        let out = ex.extract(&entry);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
        assert_eq!(out[0].definition_in("ca"), Some("primera"));
    }

    #[test]
    fn sense_fan_out_emits_one_entry_per_definition() {
        let mut entry = dog();
        entry.definitions = vec![def("ca", "u"), def("es", "uno"), def("ca", "dos")];
        let ex = Extractor {
            include: IncludeFlags {
                definition: true,
                ..Default::default()
            },
            one_entry_per_sense: true,
            ..pair()
        };
        let out = ex.extract(&entry);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "1-1");
        assert_eq!(out[0].definition_in("ca"), Some("u"));
        assert_eq!(out[0].definition_in("es"), Some("uno"));
        assert_eq!(out[1].id, "1-2");
        assert_eq!(out[1].definition_in("ca"), Some("dos"));
        assert_eq!(out[1].definition_in("es"), None);
        assert_eq!(terms(&out[1], "ca"), vec!["gos"]);
    }

    #[test]
    fn single_sense_keeps_the_plain_identifier() {
        let ex = Extractor {
            include: IncludeFlags {
                definition: true,
                ..Default::default()
            },
            one_entry_per_sense: true,
            ..pair()
        };
        let out = ex.extract(&dog());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn set_mode_validates_on_any_listed_language() {
        let entry = GlossaryEntry {
            id: "5".into(),
            denominations: vec![
                den("ca", "gos", "v", ""),
                den("en", "dog", "n", ""),
                den("fr", "chien", "n", ""),
            ],
            ..Default::default()
        };
        let ex = Extractor {
            languages: LanguageSelection::set(["ca", "en"]),
            filters: Filters {
                category_prefixes: FilterSet::from_text("n"),
                ..Default::default()
            },
            ..pair()
        };
        let out = ex.extract(&entry);
        assert_eq!(out.len(), 1);
        assert!(terms(&out[0], "ca").is_empty());
        assert_eq!(terms(&out[0], "en"), vec!["dog"]);
        assert!(terms(&out[0], "fr").is_empty());
    }

    #[test]
    fn fanned_out_senses_count_once_as_exported() {
        let mut entry = dog();
        entry.definitions = vec![def("ca", "u"), def("ca", "dos")];
        let ex = Extractor {
            include: IncludeFlags {
                definition: true,
                ..Default::default()
            },
            one_entry_per_sense: true,
            ..pair()
        };
        let result = ex.extract_all(&[entry]);
        assert_eq!(result.scanned, 1);
        assert_eq!(result.exported, 1);
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let entry = GlossaryEntry {
            id: "6".into(),
            denominations: vec![den("ca", "a | b", "", ""), den("ca", "a", "", "")],
            ..Default::default()
        };
        let out = pair().extract(&entry);
        assert_eq!(terms(&out[0], "ca"), vec!["a", "b", "a"]);
    }

    #[test]
    fn extract_all_counts_scanned_entries() {
        let mut other = dog();
        other.id = "9".into();
        other.denominations[0].category = "v".into();
        let ex = Extractor {
            filters: Filters {
                category_prefixes: FilterSet::from_text("n"),
                ..Default::default()
            },
            ..pair()
        };
        let result = ex.extract_all(&[dog(), other, dog()]);
        assert_eq!(result.scanned, 3);
        assert_eq!(result.exported, 2);
        assert_eq!(result.entries.len(), 2);
        for entry in &result.entries {
            assert!(!entry.terms_in("ca").is_empty());
        }
    }
}

//! Filter normalization and the per-denomination filter predicate.
//!
//! A filter axis is either unconstrained (`None`) or a set of lowercase
//! tokens. Category filters match by prefix, type and hierarchy filters by
//! exact, case-insensitive membership.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Separators accepted in free-text filter input: commas and any whitespace.
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s]+").unwrap());

/// Normalized set of lowercase filter tokens. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet(BTreeSet<String>);

impl FilterSet {
    /// Normalize free text such as `"n, v\nadj"`.
    ///
    /// Returns `None` when the text holds no non-blank token.
    pub fn from_text(text: &str) -> Option<FilterSet> {
        Self::from_tokens(RE_SEPARATORS.split(text))
    }

    /// Normalize an already-tokenized list. Tokens are trimmed and lowercased
    /// but not split further, so `"terme pral."` stays one token.
    pub fn from_tokens<I, S>(tokens: I) -> Option<FilterSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if set.is_empty() {
            None
        } else {
            Some(FilterSet(set))
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// True if `value` starts with any token in the set.
    pub fn has_prefix_of(&self, value: &str) -> bool {
        self.0.iter().any(|prefix| value.starts_with(prefix.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The three independent filter axes applied to every denomination.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub category_prefixes: Option<FilterSet>,
    pub types: Option<FilterSet>,
    pub hierarchies: Option<FilterSet>,
}

impl Filters {
    /// Conjunction of every configured axis. An unconfigured axis accepts any
    /// value, including an empty one.
    pub fn passes(&self, category: &str, term_type: &str, hierarchy: &str) -> bool {
        if let Some(ref prefixes) = self.category_prefixes {
            let category = category.trim().to_lowercase();
            if category.is_empty() || !prefixes.has_prefix_of(&category) {
                return false;
            }
        }

        if let Some(ref types) = self.types {
            if !types.contains(&term_type.trim().to_lowercase()) {
                return false;
            }
        }

        if let Some(ref hierarchies) = self.hierarchies {
            if !hierarchies.contains(&hierarchy.trim().to_lowercase()) {
                return false;
            }
        }

        true
    }

    pub fn is_unconstrained(&self) -> bool {
        self.category_prefixes.is_none() && self.types.is_none() && self.hierarchies.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(text: &str) -> Option<FilterSet> {
        FilterSet::from_text(text)
    }

    #[test]
    fn free_text_splits_on_commas_spaces_and_newlines() {
        let f = set("N, v\nAdj  n").unwrap();
        assert_eq!(f.iter().collect::<Vec<_>>(), vec!["adj", "n", "v"]);
    }

    #[test]
    fn blank_input_is_unconstrained() {
        assert!(set("").is_none());
        assert!(set(" ,\n, ").is_none());
        assert!(FilterSet::from_tokens(Vec::<String>::new()).is_none());
        assert!(FilterSet::from_tokens(["  ", ""]).is_none());
    }

    #[test]
    fn tokens_are_not_split_again() {
        let f = FilterSet::from_tokens(["Terme Pral.", " sigla "]).unwrap();
        assert!(f.contains("terme pral."));
        assert!(f.contains("sigla"));
        assert!(!f.contains("terme"));
    }

    #[test]
    fn category_matches_by_prefix() {
        let filters = Filters {
            category_prefixes: set("n"),
            ..Default::default()
        };
        assert!(filters.passes("n m", "", ""));
        assert!(filters.passes(" N F ", "", ""));
        assert!(!filters.passes("v tr", "", ""));
        // an active category axis rejects a missing category
        assert!(!filters.passes("", "", ""));
    }

    #[test]
    fn type_and_hierarchy_need_exact_membership() {
        let filters = Filters {
            types: set("principal"),
            hierarchies: FilterSet::from_tokens(["terme pral."]),
            ..Default::default()
        };
        assert!(filters.passes("", "Principal", "terme pral."));
        assert!(!filters.passes("", "principal2", "terme pral."));
        assert!(!filters.passes("", "principal", "terme"));
        assert!(!filters.passes("", "", "terme pral."));
    }

    #[test]
    fn no_filters_accept_everything() {
        let filters = Filters::default();
        assert!(filters.is_unconstrained());
        assert!(filters.passes("", "", ""));
        assert!(filters.passes("adj", "equivalent", "sigla"));
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(tokens in prop::collection::vec("[ a-zA-Z.,]{0,8}", 0..6)) {
            let once = FilterSet::from_tokens(&tokens);
            let twice = once
                .as_ref()
                .and_then(|f| FilterSet::from_tokens(f.iter()));
            prop_assert_eq!(once, twice);

            let text = tokens.join(",");
            let once = FilterSet::from_text(&text);
            let twice = once
                .as_ref()
                .and_then(|f| FilterSet::from_text(&f.iter().collect::<Vec<_>>().join(" ")));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn passing_means_passing_every_axis(
            category in "[a-z ]{0,4}",
            term_type in "[a-z]{0,3}",
            hierarchy in "[a-z]{0,3}",
            cat_filter in "[a-z ]{0,4}",
            type_filter in "[a-z ]{0,4}",
            hier_filter in "[a-z ]{0,4}",
        ) {
            let all = Filters {
                category_prefixes: FilterSet::from_text(&cat_filter),
                types: FilterSet::from_text(&type_filter),
                hierarchies: FilterSet::from_text(&hier_filter),
            };
            let only = |f: Filters| f.passes(&category, &term_type, &hierarchy);
            let by_axis = only(Filters {
                category_prefixes: all.category_prefixes.clone(),
                ..Default::default()
            }) && only(Filters {
                types: all.types.clone(),
                ..Default::default()
            }) && only(Filters {
                hierarchies: all.hierarchies.clone(),
                ..Default::default()
            });
            prop_assert_eq!(all.passes(&category, &term_type, &hierarchy), by_axis);
        }
    }
}

//! Languages of interest and the rule deciding which of them make an entry
//! exportable.

/// Which languages are exported, and which ones can validate an entry.
///
/// In pair mode only a passing source-language denomination validates an
/// entry; in set mode any listed language does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSelection {
    Pair { source: String, target: String },
    /// Listed languages, kept in the order given so output is deterministic.
    Set(Vec<String>),
}

impl LanguageSelection {
    pub fn pair(source: &str, target: &str) -> Self {
        LanguageSelection::Pair {
            source: normalize_code(source),
            target: normalize_code(target),
        }
    }

    /// Build a set selection; blank codes and repeats are dropped.
    pub fn set<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut langs: Vec<String> = Vec::new();
        for code in codes {
            let code = normalize_code(code.as_ref());
            if !code.is_empty() && !langs.contains(&code) {
                langs.push(code);
            }
        }
        LanguageSelection::Set(langs)
    }

    pub fn is_of_interest(&self, lang: &str) -> bool {
        match self {
            LanguageSelection::Pair { source, target } => lang == source || lang == target,
            LanguageSelection::Set(langs) => langs.iter().any(|l| l == lang),
        }
    }

    /// Whether a passing denomination in `lang` makes the entry exportable.
    pub fn establishes_validity(&self, lang: &str) -> bool {
        match self {
            LanguageSelection::Pair { source, .. } => lang == source,
            LanguageSelection::Set(_) => self.is_of_interest(lang),
        }
    }

    pub fn requires_source_match(&self) -> bool {
        matches!(self, LanguageSelection::Pair { .. })
    }

    /// Languages in output order.
    pub fn ordered(&self) -> Vec<&str> {
        match self {
            LanguageSelection::Pair { source, target } => vec![source.as_str(), target.as_str()],
            LanguageSelection::Set(langs) => langs.iter().map(String::as_str).collect(),
        }
    }

    /// The `(source, target)` codes in pair mode.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match self {
            LanguageSelection::Pair { source, target } => Some((source.as_str(), target.as_str())),
            LanguageSelection::Set(_) => None,
        }
    }

    /// First language in output order; used as the document language.
    pub fn primary(&self) -> Option<&str> {
        self.ordered().into_iter().next()
    }
}

/// Language codes compare trimmed and lowercased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

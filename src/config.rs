//! Conversion settings, built by the CLI and checked before any input is
//! read.

use crate::error::{Error, Result};
use crate::filter::Filters;
use crate::languages::LanguageSelection;
use crate::model::IncludeFlags;
use crate::render::OutputFormat;
use std::fmt;
use std::path::PathBuf;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means standard output.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: Destination,
    pub format: OutputFormat,
    pub languages: LanguageSelection,
    pub filters: Filters,
    pub include: IncludeFlags,
    pub one_entry_per_sense: bool,
    /// Apply the filters to target-language terms as well.
    pub filter_target_terms: bool,
    /// Header row for tabular output.
    pub header: bool,
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<()> {
        match &self.languages {
            LanguageSelection::Pair { source, target } => {
                if source.is_empty() || target.is_empty() {
                    return Err(Error::Config(
                        "both a source and a target language code are required".into(),
                    ));
                }
                if source == target {
                    return Err(Error::Config(format!(
                        "source and target language are both '{}'",
                        source
                    )));
                }
            }
            LanguageSelection::Set(langs) => {
                if langs.is_empty() {
                    return Err(Error::Config("no language codes given".into()));
                }
            }
        }

        if self.format == OutputFormat::Tsv && self.languages.as_pair().is_none() {
            return Err(Error::Config(
                "tabular output needs a source and a target language (--sl/--tl)".into(),
            ));
        }
        Ok(())
    }
}

//! Renderer module — trait-based output format dispatch.
//!
//! Renderers are pure projections of extracted entries; all filtering has
//! already happened in [`crate::extract`].

pub mod tbx;
pub mod tsv;

use crate::error::{Error, Result};
use crate::languages::LanguageSelection;
use crate::model::{ExtractedEntry, IncludeFlags};
use std::str::FromStr;

/// Trait for rendering extracted entries into a specific output format.
pub trait Renderer {
    fn render(&self, entries: &[ExtractedEntry]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tbx,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tbx" | "xml" => Ok(OutputFormat::Tbx),
            "tsv" | "tab" | "txt" => Ok(OutputFormat::Tsv),
            other => Err(Error::Config(format!(
                "unknown format: {}. Use tbx or tsv",
                other
            ))),
        }
    }
}

/// Everything a renderer may need besides the entries themselves.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub languages: LanguageSelection,
    pub include: IncludeFlags,
    /// Shown in the TBX title; usually the input path.
    pub source_name: String,
    /// Emit a header row in tabular output.
    pub header: bool,
}

/// Create a renderer for the given format.
pub fn create_renderer(
    format: OutputFormat,
    settings: &RenderSettings,
) -> Result<Box<dyn Renderer>> {
    match format {
        OutputFormat::Tbx => Ok(Box::new(tbx::TbxRenderer::new(
            tbx::Namespaces::default(),
            settings.languages.clone(),
            settings.include,
            &settings.source_name,
            tbx::today(),
        ))),
        OutputFormat::Tsv => {
            let (source, target) = settings.languages.as_pair().ok_or_else(|| {
                Error::Config("tabular output needs a source and a target language".into())
            })?;
            Ok(Box::new(tsv::TsvRenderer {
                source: source.to_string(),
                target: target.to_string(),
                include: settings.include,
                header: settings.header,
            }))
        }
    }
}

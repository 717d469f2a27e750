//! gloss2tbx — convert XML terminology glossaries into TBX documents or
//! tab-separated tables.
//!
//! The conversion runs in one pass over the loaded document:
//!
//! 1. **Load** — parse the glossary into [`model::GlossaryEntry`] values
//! 2. **Extract** — filter denominations, clean and split terms, drop
//!    entries with no qualifying term ([`extract`])
//! 3. **Render** — project the surviving entries into the output format
//!    ([`render`])
//! 4. **Write** — the whole document at once, to a file or stdout

pub mod clean;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod languages;
pub mod model;
pub mod parser;
pub mod render;

use crate::config::{ConvertConfig, Destination};
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::render::RenderSettings;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Source entries read.
    pub scanned: usize,
    /// Source entries that made it into the output.
    pub exported: usize,
    /// Output entries written; exceeds `exported` when senses are split.
    pub written: usize,
}

/// Run a full conversion as described by `config`.
pub fn convert(config: &ConvertConfig) -> Result<Summary> {
    config.validate()?;

    // Renderer construction can also reject the configuration, so do it
    // before touching the input.
    let renderer = render::create_renderer(
        config.format,
        &RenderSettings {
            languages: config.languages.clone(),
            include: config.include,
            source_name: config.input.display().to_string(),
            header: config.header,
        },
    )?;

    let entries = parser::load(&config.input)?;
    tracing::info!(
        entries = entries.len(),
        "loaded {}",
        config.input.display()
    );

    if config.filters.is_unconstrained() {
        tracing::debug!("no filters active");
    }
    let extractor = Extractor {
        languages: config.languages.clone(),
        filters: config.filters.clone(),
        include: config.include,
        one_entry_per_sense: config.one_entry_per_sense,
        filter_target_terms: config.filter_target_terms,
    };
    let extraction = extractor.extract_all(&entries);

    let rendered = renderer.render(&extraction.entries);
    write_output(&config.output, &rendered)?;
    tracing::info!("wrote {}", config.output);

    Ok(Summary {
        scanned: extraction.scanned,
        exported: extraction.exported,
        written: extraction.entries.len(),
    })
}

fn write_output(dest: &Destination, content: &str) -> Result<()> {
    match dest {
        Destination::File(path) => fs::write(path, content).map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        }),
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| Error::WriteOutput {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}

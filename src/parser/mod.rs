//! Input loading — read the glossary document and parse it into entries.

pub mod glossary;

use crate::error::{Error, Result};
use crate::model::GlossaryEntry;
use std::fs;
use std::path::Path;

/// Read and parse a glossary file.
pub fn load(path: &Path) -> Result<Vec<GlossaryEntry>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    glossary::parse(&content).map_err(|e| Error::ParseInput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

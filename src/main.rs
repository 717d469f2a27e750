//! gloss2tbx — convert an XML terminology glossary into TBX or a
//! tab-separated table.
//!
//! ```text
//! gloss2tbx -i glossari.xml -o glossari.tbx --sl ca --tl es --include-definition
//! gloss2tbx -i glossari.xml -o - -f tsv --sl ca --tl es --category-starts n
//! gloss2tbx -i glossari.xml -o multi.tbx --langs ca,es,en --type-filter principal
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use gloss2tbx::config::{ConvertConfig, Destination};
use gloss2tbx::error::Error;
use gloss2tbx::filter::{FilterSet, Filters};
use gloss2tbx::languages::LanguageSelection;
use gloss2tbx::model::IncludeFlags;
use gloss2tbx::render::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gloss2tbx",
    about = "Convert XML terminology glossaries into TBX or tab-separated tables"
)]
struct Cli {
    /// Input glossary XML file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output file, or - for stdout
    #[arg(short = 'o', long)]
    output: String,

    /// Output format: tbx (default) or tsv
    #[arg(short = 'f', long, default_value = "tbx")]
    format: String,

    /// Source language code (e.g. ca). Only passing source terms make an entry exportable.
    #[arg(long, requires = "tl")]
    sl: Option<String>,

    /// Target language code (e.g. es)
    #[arg(long, requires = "sl")]
    tl: Option<String>,

    /// Export every listed language; a passing term in any of them makes an
    /// entry exportable. Comma or space separated, repeatable. TBX only.
    #[arg(long, num_args = 1.., value_delimiter = ',', conflicts_with_all = ["sl", "tl"])]
    langs: Vec<String>,

    /// Keep only denominations whose category starts with one of these prefixes (e.g. n v adj)
    #[arg(long, num_args = 1..)]
    category_starts: Vec<String>,

    /// Keep only denominations of these types (e.g. principal equivalent)
    #[arg(long, num_args = 1..)]
    type_filter: Vec<String>,

    /// Keep only denominations with these hierarchy tags (e.g. "terme pral." sigla)
    #[arg(long, num_args = 1..)]
    hierarchy_filter: Vec<String>,

    /// Include the thematic area
    #[arg(long)]
    include_area: bool,

    /// Include definitions
    #[arg(long)]
    include_definition: bool,

    /// Include the term category (part of speech)
    #[arg(long)]
    include_category: bool,

    /// Include the term type
    #[arg(long)]
    include_type: bool,

    /// Include the term hierarchy (normative authorization)
    #[arg(long)]
    include_hierarchy: bool,

    /// Emit one entry per definition instead of keeping only the first
    #[arg(long)]
    one_entry_per_sense: bool,

    /// Apply the filters to target-language terms too; by default only
    /// source terms are filtered in --sl/--tl mode
    #[arg(long)]
    filter_target_terms: bool,

    /// Write a header row (tsv only)
    #[arg(long)]
    header: bool,

    /// Log every skipped entry
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let summary = gloss2tbx::convert(&config)
        .with_context(|| format!("conversion of {} failed", config.input.display()))?;

    tracing::info!(
        "{} entries scanned, {} exported to {}",
        summary.scanned,
        summary.exported,
        config.output
    );
    if summary.written != summary.exported {
        tracing::info!("{} output entries after splitting senses", summary.written);
    }
    if summary.exported == 0 {
        if config.languages.requires_source_match() {
            tracing::warn!(
                "no entries were exported; check the filters and that the source language has passing terms"
            );
        } else {
            tracing::warn!("no entries were exported; check the filters and language codes");
        }
    }
    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn build_config(cli: &Cli) -> Result<ConvertConfig> {
    let format: OutputFormat = cli.format.parse()?;
    Ok(ConvertConfig {
        input: cli.input.clone(),
        output: Destination::from_arg(&cli.output),
        format,
        languages: language_selection(cli)?,
        filters: Filters {
            category_prefixes: FilterSet::from_tokens(&cli.category_starts),
            types: FilterSet::from_tokens(&cli.type_filter),
            hierarchies: FilterSet::from_tokens(&cli.hierarchy_filter),
        },
        include: IncludeFlags {
            area: cli.include_area,
            definition: cli.include_definition,
            category: cli.include_category,
            term_type: cli.include_type,
            hierarchy: cli.include_hierarchy,
        },
        one_entry_per_sense: cli.one_entry_per_sense,
        filter_target_terms: cli.filter_target_terms,
        header: cli.header,
    })
}

fn language_selection(cli: &Cli) -> Result<LanguageSelection, Error> {
    if !cli.langs.is_empty() {
        return Ok(LanguageSelection::set(
            cli.langs.iter().flat_map(|l| l.split_whitespace()),
        ));
    }
    match (&cli.sl, &cli.tl) {
        (Some(sl), Some(tl)) => Ok(LanguageSelection::pair(sl, tl)),
        _ => Err(Error::Config(
            "no languages given: use --sl and --tl, or --langs".into(),
        )),
    }
}

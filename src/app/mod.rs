use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{filter_products, resolve_query};
use crate::config::{CatalogConfig, Product};
use crate::tags::{Query, Tags};

/// Check tagged objects against a query.
///
/// Query tokens: `name` matches if any such tag is present (OR),
/// `+name` requires the tag and `-name` forbids it (AND).
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subject tags (comma separated or repeated)
    #[arg(short, long, value_delimiter = ',', conflicts_with = "catalog")]
    pub tags: Vec<String>,

    /// Query tokens: name, +name, -name (comma separated or repeated)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Catalog of tagged products (YAML, JSON or TOML)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Named query stored in the catalog
    #[arg(short, long, requires = "catalog")]
    pub preset: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Serialize)]
struct Decision<'a> {
    tags: &'a Tags,
    query: &'a Query,
    matched: bool,
}

/// Evaluate the CLI request and write the result to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.catalog {
        Some(path) => run_catalog(cli, path, out),
        None => run_single(cli, out),
    }
}

fn run_single<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let tags: Tags = cli.tags.iter().cloned().collect();
    let query = Query::parse(&cli.query);
    let matched = tags.is_tagged(&cli.query);

    tracing::info!(
        "Subject: {} tags, query: {} tokens ({} strict)",
        tags.as_slice().len(),
        cli.query.len(),
        query.strict_count()
    );

    match cli.format {
        OutputFormat::Text => writeln!(out, "{}", matched)?,
        OutputFormat::Json => {
            let decision = Decision {
                tags: &tags,
                query: &query,
                matched,
            };
            serde_json::to_writer(&mut *out, &decision)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_catalog<W: Write>(cli: &Cli, path: &Path, out: &mut W) -> Result<()> {
    let catalog = CatalogConfig::load(path)?;
    tracing::info!(
        "Catalog: {} products, {} stored queries from {:?}",
        catalog.products.len(),
        catalog.queries.len(),
        path
    );

    let query = resolve_query(&catalog, cli.preset.as_deref(), &cli.query)?;
    if query.is_empty() {
        tracing::info!("Catalog: empty query, every product matches");
    }

    let matched = filter_products(&catalog.products, &query);
    write_products(&matched, cli.format, out).context("CLI: Failed to write results")
}

fn write_products<W: Write>(products: &[&Product], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for product in products {
                match &product.description {
                    Some(description) => writeln!(out, "{}: {}", product.name, description)?,
                    None => writeln!(out, "{}", product.name)?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, products)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

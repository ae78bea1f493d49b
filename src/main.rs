// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facets CLI
//!
//! Loads a `{facets, items}` JSON dataset and either lists the facets or
//! replays a sequence of clicks, printing every outcome as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # List every facet with its criteria and initial counts
//! facets list data.json
//!
//! # Click criteria by ID or by facet=value
//! facets click data.json color=red 3
//!
//! # Treat the empty query as matching every item
//! facets --config config.json click data.json size=S
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use facet_search::{CriterionId, Dataset, EngineConfig, FacetEngine};

/// Faceted narrowing over a JSON dataset
#[derive(Parser)]
#[command(name = "facets")]
#[command(about = "Narrow a JSON dataset by facet criteria")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List facets with their criteria, sorted by text
    List {
        /// Dataset file
        data: PathBuf,
    },

    /// Apply clicks in order and print each outcome
    Click {
        /// Dataset file
        data: PathBuf,

        /// Criteria to click: a numeric ID or facet=value
        #[arg(required = true)]
        criteria: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::List { data } => {
            let engine = load_engine(&data, config)?;
            println!("{}", serde_json::to_string_pretty(&engine.facet_listing())?);
        }
        Commands::Click { data, criteria } => {
            let mut engine = load_engine(&data, config)?;
            for spec in &criteria {
                let id = parse_criterion(&engine, spec)?;
                match engine.apply_click(id) {
                    Ok(outcome) => println!("{}", serde_json::to_string_pretty(&outcome)?),
                    Err(err) => tracing::error!(criterion = %spec, %err, "click rejected"),
                }
            }
            let statistics = serde_json::to_string(engine.statistics())?;
            tracing::info!(%statistics, "session finished");
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

fn load_engine(path: &Path, config: EngineConfig) -> Result<FacetEngine> {
    let file = File::open(path).with_context(|| format!("opening dataset {}", path.display()))?;
    let dataset = Dataset::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    let engine = FacetEngine::from_dataset(&dataset, config)
        .with_context(|| format!("indexing dataset {}", path.display()))?;
    tracing::debug!(config = ?engine.config(), "engine ready");
    Ok(engine)
}

/// Resolve `42` or `facet=value` to a criterion ID.
fn parse_criterion(engine: &FacetEngine, spec: &str) -> Result<CriterionId> {
    if let Ok(raw) = spec.parse::<u32>() {
        return Ok(CriterionId::new(raw));
    }
    let Some((facet, text)) = spec.split_once('=') else {
        bail!("criterion '{}' is neither an ID nor facet=value", spec);
    };
    match engine.find_criterion(facet, text) {
        Some(id) => Ok(id),
        None => bail!("no criterion '{}' in facet '{}'", text, facet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_search::model::{Facet, Item};

    fn engine() -> FacetEngine {
        let items = vec![Item::new().with("color", "red"), Item::new().with("color", "a=b")];
        FacetEngine::new(vec![Facet::named("color")], &items, EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_criterion() {
        let engine = engine();
        assert_eq!(parse_criterion(&engine, "2").unwrap(), CriterionId::new(2));
        assert_eq!(parse_criterion(&engine, "color=red").unwrap(), CriterionId::new(1));
        // Only the first '=' separates facet from text
        assert_eq!(parse_criterion(&engine, "color=a=b").unwrap(), CriterionId::new(2));
    }

    #[test]
    fn test_parse_criterion_errors() {
        let engine = engine();
        assert!(parse_criterion(&engine, "red").is_err());
        assert!(parse_criterion(&engine, "color=blue").is_err());
        assert!(parse_criterion(&engine, "size=red").is_err());
    }

    #[test]
    fn test_unknown_id_is_left_to_the_engine() {
        let mut engine = engine();
        let id = parse_criterion(&engine, "99").unwrap();
        assert!(engine.apply_click(id).is_err());
        assert!(engine.compact_query().is_empty());
    }
}

//! famtree CLI: build a person's family graph from exported CRM data and
//! print it as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use famtree::decode::{EntityDecoder, HtmlDecoder, PassThrough};
use famtree::{Config, Dataset, GraphOptions};
use std::path::PathBuf;

/// Build a family graph reachable from one person.
#[derive(Parser, Debug)]
#[command(name = "famtree", version)]
struct Args {
    /// ID of the person to start from.
    #[arg(long)]
    person: i64,

    /// Config file (default: $FAMTREE_CONFIG or ./config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// People export (json/yaml); overrides data.people_path.
    #[arg(long)]
    people: Option<PathBuf>,

    /// Flat relationship list; overrides data.relationships_path.
    #[arg(long)]
    relationships: Option<PathBuf>,

    /// Relationship-type table; overrides data.relationship_types_path.
    #[arg(long)]
    types: Option<PathBuf>,

    /// Maximum hops from the start person; overrides graph.max_depth.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Keep HTML entities in names as exported.
    #[arg(long)]
    no_decode: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load_from(args.config.as_deref())?;

    // Logs go to stderr; stdout carries the graph
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.famtree.log_level.as_str()),
    )
    .init();

    if let Some(path) = args.people {
        config.data.people_path = Some(path);
    }
    if let Some(path) = args.relationships {
        config.data.relationships_path = Some(path);
    }
    if let Some(path) = args.types {
        config.data.relationship_types_path = Some(path);
    }
    if args.max_depth.is_some() {
        config.graph.max_depth = args.max_depth;
    }
    config.validate().context("Invalid command-line options")?;

    let dataset = Dataset::load(&config.data).context("Failed to load data files")?;

    let decoder: &dyn HtmlDecoder = if args.no_decode || !config.graph.decode_names {
        &PassThrough
    } else {
        &EntityDecoder
    };
    let options = GraphOptions {
        decoder,
        max_depth: config.graph.max_depth,
        ..GraphOptions::default()
    };

    let graph = dataset.build_graph(args.person, &options);
    if graph.is_empty() {
        log::warn!("Person {} not found in {} people", args.person, dataset.people.len());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };
    println!("{}", json);

    Ok(())
}

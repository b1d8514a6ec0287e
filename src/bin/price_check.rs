//! One-shot price check: totals a list file against a catalog without
//! starting the web server.

use anyhow::Context;
use clap::Parser;
use grocery_pricer::core::matcher::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_SIMILARITY_CUTOFF};
use grocery_pricer::core::parser::parse_grocery_list;
use grocery_pricer::core::render::{format_currency, line_text};
use grocery_pricer::core::LineResult;
use grocery_pricer::utils::logger;
use grocery_pricer::{CatalogLoader, LocalStorage, Matcher, PricingEngine};
use std::io::Read;

#[derive(Parser)]
#[command(name = "price_check")]
#[command(about = "Total a shopping list against a per-store price catalog")]
struct Args {
    /// Path to the catalog CSV file
    #[arg(long)]
    catalog: String,

    /// Store to price against
    #[arg(long)]
    store: String,

    /// Shopping list file (one "item, quantity" per line); stdin when omitted
    #[arg(long)]
    list: Option<String>,

    /// Maximum number of suggestions for an unmatched item
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,

    /// Similarity cutoff for fuzzy suggestions (0.0 - 1.0)
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_CUTOFF)]
    cutoff: f64,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let storage = LocalStorage::new(".".to_string());
    let loader = CatalogLoader::new(storage);
    let catalog = loader
        .load(&args.catalog)
        .await
        .with_context(|| format!("loading catalog '{}'", args.catalog))?;

    tracing::info!(
        "📦 Loaded {} catalog entries across {} stores",
        catalog.len(),
        catalog.store_count()
    );

    let text = match &args.list {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading list file '{}'", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading list from stdin")?;
            buffer
        }
    };

    let list = parse_grocery_list(&text);
    let engine = PricingEngine::new(Matcher::new(args.max_suggestions, args.cutoff));
    let result = engine.price(&catalog, &args.store, &list);

    println!("Results for {}", result.store);
    for line in &result.lines {
        if matches!(line, LineResult::Matched { .. }) {
            println!("  {}", line_text(line));
        }
    }
    println!("Total cost: {}", format_currency(result.total));

    let missing: Vec<&LineResult> = result
        .lines
        .iter()
        .filter(|line| matches!(line, LineResult::Unmatched { .. }))
        .collect();
    if !missing.is_empty() {
        println!("Missing items (not found):");
        for line in missing {
            println!("  {}", line_text(line));
        }
    }

    Ok(())
}

// SPDX-License-Identifier: Apache-2.0

//! merx command-line interface.
//!
//! Loads a product catalog from JSON, builds the in-memory engine, and runs
//! one command against it: `search`, `inspect`, or `suggest`.

use std::fs;
use std::time::Instant;

use clap::Parser;

use merx::{normalize, Product, SearchEngine, SearchHit, SearchOptions, StockStatus};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            code_limit,
            category,
            json,
        } => run_search(&file, &query, limit, code_limit, category, json),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Suggest { term } => run_suggest(term.as_deref()),
    };
    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Load and parse a catalog JSON file (an array of products).
fn load_catalog(path: &str) -> Result<Vec<Product>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

fn run_search(
    file: &str,
    query: &str,
    limit: usize,
    code_limit: usize,
    category: Option<String>,
    json: bool,
) -> Result<(), String> {
    let catalog = load_catalog(file)?;
    let mut engine = SearchEngine::from_catalog(catalog);

    let options = SearchOptions {
        category,
        max_code_results: code_limit,
        max_token_results: limit,
    };
    let started = Instant::now();
    let results = engine.search(query, &options);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        let payload = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", payload);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        let normalized = normalize(query);
        let related: Vec<&str> = normalized
            .split_whitespace()
            .flat_map(merx::suggestions)
            .collect();
        if !related.is_empty() {
            println!("Related terms: {}", related.join(", "));
        }
        return Ok(());
    }

    let mut open = false;
    if !results.code_hits.is_empty() {
        display::section_top("CODE MATCHES");
        for hit in &results.code_hits {
            print_hit(&engine, hit);
        }
        open = true;
    }
    if !results.token_hits.is_empty() {
        if open {
            display::section_mid("MATCHES");
        } else {
            display::section_top("MATCHES");
        }
        for hit in &results.token_hits {
            print_hit(&engine, hit);
        }
    }
    display::section_bot();
    println!(
        "  {} result(s) in {} ms",
        results.total(),
        display::timing_ms(elapsed_ms)
    );
    Ok(())
}

/// Two lines per hit: identity, then the match detail.
fn print_hit(engine: &SearchEngine, hit: &SearchHit) {
    let Some(product) = engine.product(hit.position) else {
        return;
    };
    let code = display::tint_bold(display::palette().bright_cyan, &product.code);
    let description = display::truncate_text(&product.description, 42);
    display::row(&format!(
        " {}  {} {}",
        display::pad_right(&code, 10),
        display::pad_right(&description, 42),
        display::stock_badge(StockStatus::classify(product.stock)),
    ));

    let mut detail = format!(
        "   {} {}",
        display::match_kind_label(hit.kind),
        display::score_value(hit.score),
    );
    if !hit.matched_keywords.is_empty() {
        detail.push_str(&format!("  {}", display::dim(&hit.matched_keywords.join(" "))));
    }
    if !product.storage_location.is_empty() {
        detail.push_str(&format!(
            "  {}",
            display::tint(display::palette().gray, &product.storage_location)
        ));
    }
    display::row(&detail);
}

fn run_inspect(file: &str) -> Result<(), String> {
    let catalog = load_catalog(file)?;
    let engine = SearchEngine::from_catalog(catalog);
    let stats = engine.stats();

    let mut in_stock = 0usize;
    let mut low_stock = 0usize;
    let mut out_of_stock = 0usize;
    for position in 0..engine.len() {
        if let Some(product) = engine.product(position) {
            match StockStatus::classify(product.stock) {
                StockStatus::InStock => in_stock += 1,
                StockStatus::LowStock => low_stock += 1,
                StockStatus::OutOfStock => out_of_stock += 1,
            }
        }
    }

    display::panel_top();
    display::panel_title("CATALOG");
    display::panel_divider();
    display::panel_row(&format!("  Products        {}", stats.products));
    display::panel_row(&format!("  Indexed words   {}", stats.indexed_words));
    display::panel_row(&format!("  Code prefixes   {}", stats.code_prefixes));
    display::panel_row(&format!(
        "  Stock           {} in / {} low / {} out",
        display::tint(display::palette().green, &in_stock.to_string()),
        display::tint(display::palette().yellow, &low_stock.to_string()),
        display::tint(display::palette().red, &out_of_stock.to_string()),
    ));
    display::panel_bot();

    let categories = engine.categories();
    if !categories.is_empty() {
        println!();
        display::section_top("CATEGORIES");
        for category in &categories {
            display::row(&format!(
                "  {}  {}",
                display::pad_left(&category.count.to_string(), 5),
                category.name
            ));
        }
        display::section_bot();
    }
    Ok(())
}

fn run_suggest(term: Option<&str>) -> Result<(), String> {
    match term {
        Some(raw) => {
            let normalized = normalize(raw);
            if normalized.is_empty() {
                return Err(format!("Nothing to expand in \"{}\"", raw));
            }
            let expanded = merx::expand_query(normalized.split_whitespace());
            display::section_top(&format!("EXPANSIONS: {}", normalized));
            for term in &expanded {
                display::row(&format!("  {}", term));
            }
            display::section_bot();
        }
        None => {
            display::section_top("COMMON TERMS");
            for (term, gloss) in merx::common_terms() {
                display::row(&format!(
                    "  {}  {}",
                    display::pad_right(&display::tint(display::palette().bright_cyan, term), 16),
                    gloss
                ));
            }
            display::section_bot();
        }
    }
    Ok(())
}

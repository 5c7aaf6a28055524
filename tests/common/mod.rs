//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use merx::{MatchKind, Product, SearchEngine, SearchOptions, SearchResults};

// Re-export canonical test utilities from merx::testing
pub use merx::testing::{make_product, make_product_in_category, make_stored_product};

// ============================================================================
// FIXTURE CATALOGS
// ============================================================================

/// The two-product walkthrough catalog used across suites.
pub fn small_catalog() -> Vec<Product> {
    vec![
        make_product("12345678", "Teava PPR 20mm", 5),
        make_product("87654321", "Robinet FI 1/2", 0),
    ]
}

/// A richer catalog: several categories, shared code prefixes, storage data,
/// and the full stock spread.
pub fn plumbing_catalog() -> Vec<Product> {
    let mut catalog = vec![
        make_product_in_category("10000001", "Teava PPR 20mm alba", 25, "Tevi"),
        make_product_in_category("10000002", "Teava PPR 25mm alba", 0, "Tevi"),
        make_product_in_category("10000003", "Teava cupru 22mm", 7, "Tevi"),
        make_product_in_category("20000001", "Robinet trecere FI 1/2 alama", 12, "Robineti"),
        make_product_in_category("20000002", "Robinet coltar FE 3/8", 3, "Robineti"),
        make_product_in_category("20000009", "Robinet sfera PVC", 0, "Robineti"),
        make_product_in_category("30000001", "Cot PPR 90 grade 20mm", 40, "Fitinguri"),
        make_product_in_category("30000002", "Mufa PPR 25mm", 15, "Fitinguri"),
        make_product_in_category("30000003", "Reductie PPR 25x20", 2, "Fitinguri"),
        make_product_in_category("40000001", "Garnitura cauciuc 1/2", 100, "Accesorii"),
        make_product_in_category("40000002", "Banda teflon 12m", 55, "Accesorii"),
        make_product_in_category("12345", "Niplu alama FI-FE 1/2", 9, "Fitinguri"),
        make_product_in_category("123456", "Surub inox M8", 30, "Accesorii"),
        make_product_in_category("99999999", "Spray curatare universal", 6, "Diverse"),
    ];
    // Storage data on a couple of products for the storage-field bonuses.
    catalog[0].storage_location = "R1-A1".to_string();
    catalog[0].storage_description = "Raft tevi PPR".to_string();
    catalog[11].storage_location = "R2-B3".to_string();
    catalog[11].storage_description = "Cutie nipluri".to_string();
    catalog
}

/// Build an engine over the plumbing catalog.
pub fn plumbing_engine() -> SearchEngine {
    SearchEngine::from_catalog(plumbing_catalog())
}

/// Search with default options.
pub fn search_default(engine: &mut SearchEngine, query: &str) -> SearchResults {
    engine.search(query, &SearchOptions::default())
}

/// Positions of the token hits, in rank order.
pub fn token_positions(results: &SearchResults) -> Vec<usize> {
    results.token_hits.iter().map(|hit| hit.position).collect()
}

/// Codes of the token hits resolved through the engine, in rank order.
pub fn token_codes(engine: &SearchEngine, results: &SearchResults) -> Vec<String> {
    results
        .token_hits
        .iter()
        .filter_map(|hit| engine.product(hit.position))
        .map(|product| product.code.clone())
        .collect()
}

/// Codes of the code hits resolved through the engine, in rank order.
pub fn code_codes(engine: &SearchEngine, results: &SearchResults) -> Vec<String> {
    results
        .code_hits
        .iter()
        .filter_map(|hit| engine.product(hit.position))
        .map(|product| product.code.clone())
        .collect()
}

// ============================================================================
// INVARIANT HELPERS
// ============================================================================

/// Assert the structural invariants every result set must satisfy.
pub fn assert_results_well_formed(engine: &SearchEngine, results: &SearchResults) {
    for hit in results.code_hits.iter().chain(results.token_hits.iter()) {
        assert!(
            hit.position < engine.len(),
            "INVARIANT VIOLATED: hit position {} out of range ({} products)",
            hit.position,
            engine.len()
        );
        assert!(
            hit.score > 0.0,
            "INVARIANT VIOLATED: non-positive score {} at position {}",
            hit.score,
            hit.position
        );
    }

    // Each group is sorted by score, best first.
    for (name, group) in [("code", &results.code_hits), ("token", &results.token_hits)] {
        for pair in group.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "INVARIANT VIOLATED: {} group not sorted: {} before {}",
                name,
                pair[0].score,
                pair[1].score
            );
        }
    }

    // Code-group kinds stay in the code tier, token-group kinds in theirs.
    for hit in &results.code_hits {
        assert!(
            matches!(hit.kind, MatchKind::CodeExact | MatchKind::CodePrefix),
            "INVARIANT VIOLATED: kind {:?} in code group",
            hit.kind
        );
    }
    for hit in &results.token_hits {
        assert!(
            matches!(
                hit.kind,
                MatchKind::Exact | MatchKind::Start | MatchKind::Contains
            ),
            "INVARIANT VIOLATED: kind {:?} in token group",
            hit.kind
        );
    }

    // No product surfaces in both groups.
    let code_positions: HashSet<usize> =
        results.code_hits.iter().map(|hit| hit.position).collect();
    for hit in &results.token_hits {
        assert!(
            !code_positions.contains(&hit.position),
            "INVARIANT VIOLATED: position {} appears in both groups",
            hit.position
        );
    }
}

// ============================================================================
// CATALOG FILES
// ============================================================================

/// Write a catalog to a temp JSON file.
///
/// Returns the TempDir (to keep it alive) and the file path.
pub fn write_catalog_file(catalog: &[Product]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("catalog.json");
    let payload = serde_json::to_string_pretty(catalog).expect("Failed to serialize catalog");
    fs::write(&path, payload).expect("Failed to write catalog file");
    (dir, path)
}

//! The code-prefix branch: exact-over-prefix ordering, stock tie-breaking,
//! limits, and deduplication against the token group.

use super::common::{
    assert_results_well_formed, code_codes, make_product, plumbing_engine, search_default,
    small_catalog,
};
use merx::{MatchKind, SearchEngine, SearchOptions};

#[test]
fn digit_leading_queries_fill_the_code_group() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "2000");

    assert_eq!(results.code_hits.len(), 3);
    for hit in &results.code_hits {
        assert_eq!(hit.kind, MatchKind::CodePrefix);
    }
    // Same prefix score for all three, so stock decides the order.
    assert_eq!(
        code_codes(&engine, &results),
        vec!["20000001", "20000002", "20000009"]
    );
    assert_results_well_formed(&engine, &results);
}

#[test]
fn letter_leading_queries_leave_the_code_group_empty() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "teava");
    assert!(results.code_hits.is_empty());
    assert!(!results.token_hits.is_empty());
}

#[test]
fn exact_code_match_outranks_every_prefix_match() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "12345");

    assert_eq!(code_codes(&engine, &results), vec!["12345", "123456"]);
    assert_eq!(results.code_hits[0].kind, MatchKind::CodeExact);
    assert_eq!(results.code_hits[1].kind, MatchKind::CodePrefix);
    // The same two products come back through the token search and must be
    // deduplicated out of the token group.
    assert!(results.token_hits.is_empty());
}

#[test]
fn exact_code_wins_even_when_out_of_stock() {
    let catalog = vec![
        make_product("555", "Adeziv", 0),
        make_product("5550", "Silicon", 99),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "555");

    assert_eq!(code_codes(&engine, &results), vec!["555", "5550"]);
    assert_eq!(results.code_hits[0].kind, MatchKind::CodeExact);
}

#[test]
fn code_limit_keeps_the_best_scored_hits() {
    let mut engine = plumbing_engine();
    let options = SearchOptions {
        max_code_results: 2,
        ..SearchOptions::default()
    };
    let results = engine.search("1000", &options);

    // All three 1000xxxx codes tie on score; stock picks the two kept.
    assert_eq!(code_codes(&engine, &results), vec!["10000001", "10000003"]);
}

#[test]
fn shorter_codes_score_ahead_on_equal_prefix() {
    // Prefix score carries a small length tiebreaker: the closer the code is
    // to the typed prefix, the higher it lands.
    let catalog = vec![
        make_product("123456789", "Lung", 5),
        make_product("12345", "Scurt", 5),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "123");

    assert_eq!(code_codes(&engine, &results), vec!["12345", "123456789"]);
}

#[test]
fn full_code_lookup_returns_one_exact_hit() {
    let mut engine = SearchEngine::from_catalog(small_catalog());
    let results = search_default(&mut engine, "12345678");

    assert_eq!(results.code_hits.len(), 1);
    assert_eq!(results.code_hits[0].kind, MatchKind::CodeExact);
    assert_eq!(results.code_hits[0].position, 0);
    assert!(results.token_hits.is_empty());
}

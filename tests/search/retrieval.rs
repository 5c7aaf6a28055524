//! Keyword retrieval: AND semantics, prefix broadening, digit containment,
//! category filtering, and match metadata.

use super::common::{
    assert_results_well_formed, plumbing_engine, search_default, token_codes, token_positions,
};
use merx::{MatchField, SearchOptions};

#[test]
fn every_keyword_must_match_the_same_product() {
    let mut engine = plumbing_engine();

    let both = search_default(&mut engine, "teava ppr");
    assert_eq!(token_positions(&both), vec![0, 1]);

    let narrowed = search_default(&mut engine, "teava cupru");
    assert_eq!(token_positions(&narrowed), vec![2]);
}

#[test]
fn keywords_matching_disjoint_products_yield_nothing() {
    let mut engine = plumbing_engine();
    // "teava" and "robinet" each match products, but never the same one;
    // synonym expansion does not bridge the intersection either.
    let results = search_default(&mut engine, "teava robinet");
    assert!(results.is_empty());
}

#[test]
fn prefixes_of_two_or_more_chars_broaden_retrieval() {
    let mut engine = plumbing_engine();

    let results = search_default(&mut engine, "tea");
    assert_eq!(token_positions(&results), vec![0, 2, 1]);

    // Single characters stay exact-only.
    let single = search_default(&mut engine, "t");
    assert!(single.is_empty());
}

#[test]
fn digit_keywords_match_inside_longer_numbers() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "20");

    // Digit-leading query: the code group takes the 20-prefixed codes.
    let code_positions: Vec<usize> = results.code_hits.iter().map(|h| h.position).collect();
    assert_eq!(code_positions.len(), 3);
    assert!(code_positions.contains(&3) && code_positions.contains(&4) && code_positions.contains(&5));

    // The token group keeps the products where "20" appears inside a word
    // ("20mm", "25x20"), minus those already surfaced as code matches.
    let token: Vec<usize> = token_positions(&results);
    assert_eq!(token.len(), 3);
    assert!(token.contains(&0) && token.contains(&6) && token.contains(&8));

    assert_results_well_formed(&engine, &results);
}

#[test]
fn category_filter_applies_before_ranking() {
    let mut engine = plumbing_engine();
    let options = SearchOptions {
        category: Some("Fitinguri".to_string()),
        ..SearchOptions::default()
    };
    let results = engine.search("ppr", &options);
    let positions = token_positions(&results);
    assert_eq!(positions.len(), 3);
    assert!(positions.contains(&6) && positions.contains(&7) && positions.contains(&8));
}

#[test]
fn storage_location_is_searchable() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "r2");
    assert_eq!(token_codes(&engine, &results), vec!["12345"]);
    assert_eq!(
        results.token_hits[0].matched_fields,
        vec![MatchField::StorageLocation]
    );
}

#[test]
fn storage_description_is_searchable() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "nipluri");
    assert_eq!(token_codes(&engine, &results), vec!["12345"]);
    assert_eq!(
        results.token_hits[0].matched_fields,
        vec![MatchField::StorageDescription]
    );
}

#[test]
fn hits_report_their_matched_keywords() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "teava ppr");
    let hit = &results.token_hits[0];
    assert_eq!(hit.matched_keywords, vec!["teava", "ppr"]);
}

#[test]
fn common_queries_produce_well_formed_results() {
    let mut engine = plumbing_engine();
    for query in [
        "teava", "robinet", "ppr 20", "1000", "12345", "fi", "cot 90", "alama 1/2", "tub", "20",
    ] {
        let results = search_default(&mut engine, query);
        assert_results_well_formed(&engine, &results);
    }
}

//! Degenerate inputs: the engine answers everything, panics on nothing.

use super::common::{
    make_product, plumbing_engine, search_default, token_positions,
};
use merx::{SearchEngine, SearchOptions};

#[test]
fn empty_catalog_answers_every_query_with_nothing() {
    let mut engine = SearchEngine::from_catalog(Vec::new());
    assert!(!engine.is_built());
    assert!(search_default(&mut engine, "teava").is_empty());
    assert!(search_default(&mut engine, "1234").is_empty());
    assert_eq!(engine.stats().products, 0);
}

#[test]
fn whitespace_and_punctuation_queries_return_empty() {
    let mut engine = plumbing_engine();
    assert!(search_default(&mut engine, "").is_empty());
    assert!(search_default(&mut engine, "   \t\n ").is_empty());
    assert!(search_default(&mut engine, "///").is_empty());
}

#[test]
fn diacritics_case_and_spacing_are_folded_away() {
    let mut engine = plumbing_engine();
    let results = search_default(&mut engine, "  ȚEAVĂ   ppr  ");
    assert_eq!(token_positions(&results), vec![0, 1]);
}

#[test]
fn punctuated_fractions_must_be_split_by_the_caller() {
    let mut engine = plumbing_engine();

    // "1/2" survives normalization as one keyword and no indexed word
    // carries the slash.
    assert!(search_default(&mut engine, "robinet 1/2").is_empty());

    // Spelled with spaces, the digit words line up with the index.
    let results = search_default(&mut engine, "robinet 1 2");
    assert_eq!(token_positions(&results), vec![3]);
}

#[test]
fn single_letter_queries_match_exact_words_only() {
    let mut engine = plumbing_engine();
    // No indexed word is "t"; one-char keywords get no prefix broadening.
    assert!(search_default(&mut engine, "t").is_empty());
}

#[test]
fn zero_limits_yield_empty_groups() {
    let mut engine = plumbing_engine();
    let options = SearchOptions {
        max_code_results: 0,
        max_token_results: 0,
        ..SearchOptions::default()
    };
    assert!(engine.search("teava", &options).is_empty());
    assert!(engine.search("2000", &options).is_empty());
}

#[test]
fn oversized_limits_are_harmless() {
    let mut engine = plumbing_engine();
    let options = SearchOptions {
        max_token_results: 10_000,
        ..SearchOptions::default()
    };
    let results = engine.search("teava", &options);
    assert_eq!(results.token_hits.len(), 3);
}

#[test]
fn empty_descriptions_stay_code_searchable() {
    let catalog = vec![make_product("44444", "", 5)];
    let mut engine = SearchEngine::from_catalog(catalog);

    let by_prefix = search_default(&mut engine, "4444");
    assert_eq!(by_prefix.code_hits.len(), 1);
    assert!(by_prefix.token_hits.is_empty());

    assert!(search_default(&mut engine, "adeziv").is_empty());
}

#[test]
fn duplicate_codes_each_get_their_own_hit() {
    let catalog = vec![
        make_product("77777", "Adeziv rapid", 2),
        make_product("77777", "Adeziv lent", 9),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "77777");

    assert_eq!(results.code_hits.len(), 2);
    // Equal exact scores, higher stock first.
    let positions: Vec<usize> = results.code_hits.iter().map(|hit| hit.position).collect();
    assert_eq!(positions, vec![1, 0]);
    assert!(results.token_hits.is_empty());
}

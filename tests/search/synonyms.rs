//! Synonym fallback retrieval: when it fires, what it finds, how it scores.

use super::common::{make_product, search_default, token_codes};
use merx::SearchEngine;

#[test]
fn fallback_is_skipped_when_direct_matches_exist() {
    let catalog = vec![
        make_product("111", "Teava PPR", 5),
        make_product("222", "Tub cupru", 5),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);

    // "tub" hits product 222 directly, so the synonym pass never runs and
    // the pipe product stays out of the results.
    let results = search_default(&mut engine, "tub");
    assert_eq!(token_codes(&engine, &results), vec!["222"]);

    // "conducta" matches nothing directly; its group reaches both.
    let results = search_default(&mut engine, "conducta");
    assert_eq!(token_codes(&engine, &results), vec!["111", "222"]);
}

#[test]
fn abbreviation_fallback_requires_every_phrase_word() {
    let catalog = vec![
        make_product("111", "Teava diametru nominal 50", 5),
        make_product("222", "Eticheta nominal", 5),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "dn");

    // "dn" expands to "diametru nominal"; a product carrying only one of
    // the two words does not qualify.
    assert_eq!(token_codes(&engine, &results), vec!["111"]);
    assert_eq!(results.token_hits[0].matched_keywords, vec!["dn"]);
}

#[test]
fn thread_abbreviations_reach_full_words_directly() {
    let catalog = vec![make_product("111", "Robinet filet interior 1/2", 5)];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "fi");

    assert_eq!(token_codes(&engine, &results), vec!["111"]);
    // base 10 + thread 75 + substring 50 + stock 50.
    assert_eq!(results.token_hits[0].score, 185.0);
}

#[test]
fn alias_shorthand_bridges_to_materials() {
    let catalog = vec![
        make_product("111", "Cot bronz 1/2", 5),
        make_product("222", "Cot alama 1/2", 5),
    ];
    let mut engine = SearchEngine::from_catalog(catalog);
    let results = search_default(&mut engine, "brz");

    assert_eq!(token_codes(&engine, &results), vec!["111"]);
}

#[test]
fn synonym_matches_score_below_direct_text() {
    let catalog = vec![make_product("111", "Teava PPR 20mm", 5)];
    let mut engine = SearchEngine::from_catalog(catalog);

    let indirect = search_default(&mut engine, "tub");
    // base 10 + synonym 20 + stock 50.
    assert_eq!(indirect.token_hits[0].score, 80.0);

    let direct = search_default(&mut engine, "teava");
    assert!(direct.token_hits[0].score > indirect.token_hits[0].score);
}

#[test]
fn multi_keyword_queries_fall_back_as_a_unit() {
    let catalog = vec![make_product("111", "Teava PPR verde", 5)];
    let mut engine = SearchEngine::from_catalog(catalog);

    // One keyword needs the fallback, the other matches directly; the
    // intersection still requires both.
    let results = search_default(&mut engine, "conducta ppr");
    assert_eq!(token_codes(&engine, &results), vec!["111"]);
    assert_eq!(
        results.token_hits[0].matched_keywords,
        vec!["conducta", "ppr"]
    );

    // A keyword with no expansion and no direct match sinks the query.
    let results = search_default(&mut engine, "conducta inexistent");
    assert!(results.is_empty());
}

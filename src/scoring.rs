// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Code identity dominates description text, description text dominates
//! storage hints, and stock only separates near-ties. The gaps between the
//! tiers are deliberately large so a pile of weak signals cannot outrank a
//! strong one: even a perfect-storm description match (boundary + starts +
//! thread bonus = 225) stays below a bare code-prefix match (500).
//!
//! # Constants
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | CODE_EXACT_SCORE | 1000 | Typing the full code is an unambiguous pick |
//! | CODE_PREFIX_SCORE | 500 | Dominates any description-only combination |
//! | CODE_CONTAINS_SCORE | 250 | Code fragment beats description matches |
//! | FUZZY_BASE_SCORE | 150 | A typo'd code still beats text matches... |
//! | FUZZY_DISTANCE_PENALTY | 25 | ...but degrades per edit |
//! | FUZZY_FLOOR_SCORE | 25 | Any accepted fuzzy match outranks a non-match |
//! | WORD_BOUNDARY_BONUS | 100 | Whole-word description hit |
//! | THREAD_BONUS | 75 | Thread-code queries ("fi") are high-intent |
//! | DESCRIPTION_STARTS_BONUS | 50 | Leading words carry the product name |
//! | DESCRIPTION_CONTAINS_BONUS | 50 | Raw substring fallback |
//! | SYNONYM_CONTAINS_BONUS | 20 | Indirect hit, kept below direct ones |
//! | STORAGE_*_BONUS | 10 / 5 | Warehouse hints, weakest signal |
//! | STOCK_AVAILABLE / HIGH_STOCK | 50 / +25 | Prefer sellable products |
//!
//! Per-query keyword preparation (expansions, thread flags) happens once in
//! [`prepare_keywords`]; the per-candidate path allocates nothing.

use std::cmp::Ordering;

use crate::fuzzy;
use crate::synonyms;
use crate::text;
use crate::types::{IndexedProduct, MatchField, MatchKind, SearchHit};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Every scored candidate starts here.
pub const BASE_SCORE: f64 = 10.0;

/// Keyword equals the product code.
pub const CODE_EXACT_SCORE: f64 = 1000.0;

/// Keyword is a proper prefix of the product code.
pub const CODE_PREFIX_SCORE: f64 = 500.0;

/// Keyword occurs inside the product code.
pub const CODE_CONTAINS_SCORE: f64 = 250.0;

/// Fuzzy code match at edit distance 1 scores `FUZZY_BASE_SCORE -
/// FUZZY_DISTANCE_PENALTY`; each further edit costs another penalty step.
pub const FUZZY_BASE_SCORE: f64 = 150.0;
pub const FUZZY_DISTANCE_PENALTY: f64 = 25.0;

/// Accepted fuzzy matches never score below this.
pub const FUZZY_FLOOR_SCORE: f64 = 25.0;

/// Keyword is a thread code ("fi", "fe", contains "filet") and the
/// description carries a thread marker.
pub const THREAD_BONUS: f64 = 75.0;

/// Keyword appears as a whole word in the description.
pub const WORD_BOUNDARY_BONUS: f64 = 100.0;

/// Description starts with the keyword (additional to containment).
pub const DESCRIPTION_STARTS_BONUS: f64 = 50.0;

/// Keyword appears in the description, but not on word boundaries.
pub const DESCRIPTION_CONTAINS_BONUS: f64 = 50.0;

/// A synonym of the keyword appears in the description (only counted when
/// the keyword itself does not).
pub const SYNONYM_CONTAINS_BONUS: f64 = 20.0;

/// Keyword appears in the storage location / storage description.
pub const STORAGE_LOCATION_BONUS: f64 = 10.0;
pub const STORAGE_DESCRIPTION_BONUS: f64 = 5.0;

/// Once per product: anything on the shelf, and comfortably stocked.
pub const STOCK_AVAILABLE_BONUS: f64 = 50.0;
pub const HIGH_STOCK_BONUS: f64 = 25.0;

/// Stock at or above this counts as comfortably stocked.
pub const HIGH_STOCK_THRESHOLD: u32 = 10;

// =============================================================================
// PER-QUERY KEYWORD PREPARATION
// =============================================================================

/// A query keyword with everything derivable from the query alone, computed
/// once per search invocation rather than per candidate.
#[derive(Debug, Clone)]
pub struct PreparedKeyword {
    pub text: String,
    /// Expansion terms beyond the keyword itself (synonyms, abbreviation,
    /// aliases), in stable order.
    pub expansions: Vec<String>,
    /// Thread-code keyword: "fe", "fi", or anything containing "filet".
    pub is_thread_term: bool,
}

/// Prepare normalized keywords for scoring.
pub fn prepare_keywords<'a, I>(keywords: I) -> Vec<PreparedKeyword>
where
    I: IntoIterator<Item = &'a str>,
{
    keywords
        .into_iter()
        .map(|kw| {
            let mut expansions = synonyms::expand_term(kw);
            expansions.retain(|term| term != kw);
            PreparedKeyword {
                text: kw.to_string(),
                expansions,
                is_thread_term: kw == "fe" || kw == "fi" || kw.contains("filet"),
            }
        })
        .collect()
}

// =============================================================================
// CODE MATCHING
// =============================================================================

/// Score the relation between a product code and one keyword.
///
/// Tiers: exact > prefix > substring > fuzzy > nothing. Fuzzy matching is
/// skipped for keywords shorter than [`fuzzy::MIN_FUZZY_KEYWORD_LEN`] and
/// bounded by the length-scaled tolerance.
pub fn score_code_match(code: &str, keyword: &str) -> f64 {
    if code == keyword {
        return CODE_EXACT_SCORE;
    }
    if code.starts_with(keyword) {
        return CODE_PREFIX_SCORE;
    }
    if code.contains(keyword) {
        return CODE_CONTAINS_SCORE;
    }
    let keyword_len = keyword.chars().count();
    if keyword_len < fuzzy::MIN_FUZZY_KEYWORD_LEN {
        return 0.0;
    }
    match fuzzy::levenshtein_within(code, keyword, fuzzy::max_edit_distance(keyword_len)) {
        Some(distance) => {
            (FUZZY_BASE_SCORE - FUZZY_DISTANCE_PENALTY * distance as f64).max(FUZZY_FLOOR_SCORE)
        }
        None => 0.0,
    }
}

/// Score a code-prefix-index hit for the code-query branch.
///
/// Within the prefix tier, shorter codes edge ahead (a closer match to what
/// was typed).
pub fn score_code_prefix_hit(code: &str, query: &str) -> (f64, MatchKind) {
    if code == query {
        (CODE_EXACT_SCORE, MatchKind::CodeExact)
    } else {
        (
            CODE_PREFIX_SCORE + 1.0 / code.len() as f64,
            MatchKind::CodePrefix,
        )
    }
}

// =============================================================================
// PRODUCT SCORING
// =============================================================================

/// The scorer's verdict on one candidate.
#[derive(Debug, Clone)]
pub struct ProductScore {
    pub score: f64,
    pub kind: MatchKind,
    pub matched_keywords: Vec<String>,
    pub matched_fields: Vec<MatchField>,
}

/// Score a retrieval-validated candidate against the prepared keywords.
///
/// Additive per keyword: code relation, thread bonus, description
/// containment (whole-word beats raw substring), a starts-with bonus on
/// top, synonym fallback when the raw keyword missed the description, then
/// storage hints. Stock bonuses are added once per product at the end.
pub fn score_product(indexed: &IndexedProduct, keywords: &[PreparedKeyword]) -> ProductScore {
    let mut score = BASE_SCORE;
    let mut kind = MatchKind::Contains;
    let mut matched_keywords = Vec::new();
    let mut matched_fields: Vec<MatchField> = Vec::new();
    let description = indexed.description_norm.as_str();

    for keyword in keywords {
        let kw = keyword.text.as_str();
        let mut keyword_matched = false;

        let code_score = score_code_match(&indexed.code_lower, kw);
        if code_score > 0.0 {
            score += code_score;
            push_field(&mut matched_fields, MatchField::Code);
            keyword_matched = true;
            if code_score >= CODE_EXACT_SCORE {
                kind = kind.min(MatchKind::Exact);
            } else if code_score >= CODE_PREFIX_SCORE {
                kind = kind.min(MatchKind::Start);
            }
        }

        if keyword.is_thread_term && has_thread_marker(description) {
            score += THREAD_BONUS;
            push_field(&mut matched_fields, MatchField::Description);
            keyword_matched = true;
        }

        let boundary_hit = text::contains_word(description, kw);
        let substring_hit = boundary_hit || description.contains(kw);
        if boundary_hit {
            score += WORD_BOUNDARY_BONUS;
        } else if substring_hit {
            score += DESCRIPTION_CONTAINS_BONUS;
        }
        if description.starts_with(kw) {
            score += DESCRIPTION_STARTS_BONUS;
            kind = kind.min(MatchKind::Start);
        }

        if substring_hit {
            push_field(&mut matched_fields, MatchField::Description);
            keyword_matched = true;
        } else {
            // First synonym only: one group, one bonus.
            for expansion in &keyword.expansions {
                if description.contains(expansion.as_str()) {
                    score += SYNONYM_CONTAINS_BONUS;
                    push_field(&mut matched_fields, MatchField::Description);
                    keyword_matched = true;
                    break;
                }
            }
        }

        if !indexed.storage_location_norm.is_empty()
            && indexed.storage_location_norm.contains(kw)
        {
            score += STORAGE_LOCATION_BONUS;
            push_field(&mut matched_fields, MatchField::StorageLocation);
            keyword_matched = true;
        }
        if !indexed.storage_description_norm.is_empty()
            && indexed.storage_description_norm.contains(kw)
        {
            score += STORAGE_DESCRIPTION_BONUS;
            push_field(&mut matched_fields, MatchField::StorageDescription);
            keyword_matched = true;
        }

        if keyword_matched {
            matched_keywords.push(keyword.text.clone());
        }
    }

    if indexed.product.stock > 0 {
        score += STOCK_AVAILABLE_BONUS;
        if indexed.product.stock >= HIGH_STOCK_THRESHOLD {
            score += HIGH_STOCK_BONUS;
        }
    }

    ProductScore {
        score,
        kind,
        matched_keywords,
        matched_fields,
    }
}

/// Does the description carry a whole-word thread marker (fe / fi / filet)?
fn has_thread_marker(description: &str) -> bool {
    text::contains_word(description, "fi")
        || text::contains_word(description, "fe")
        || text::contains_word(description, "filet")
}

fn push_field(fields: &mut Vec<MatchField>, field: MatchField) {
    if !fields.contains(&field) {
        fields.push(field);
    }
}

// =============================================================================
// RANKING
// =============================================================================

/// Total order over hits: score descending, stock descending, catalog
/// position ascending.
///
/// The final position tie-break makes ranking fully deterministic; without
/// it, equal-score-equal-stock products would surface in allocation order.
pub fn compare_hits(a: &SearchHit, b: &SearchHit, products: &[IndexedProduct]) -> Ordering {
    match b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal) {
        Ordering::Equal => {}
        order => return order,
    }
    let stock_a = products[a.position].product.stock;
    let stock_b = products[b.position].product.stock;
    match stock_b.cmp(&stock_a) {
        Ordering::Equal => {}
        order => return order,
    }
    a.position.cmp(&b.position)
}

// SPDX-License-Identifier: Apache-2.0

//! The search engine: catalog, index, and cache as one owned value.
//!
//! Everything mutable lives here. Swapping catalogs is `build` (full
//! replace: products, index, and cache go together), so a query can never
//! observe half-swapped state. `search` takes `&mut self` because it writes
//! the result cache; exclusive access is the concurrency model.
//!
//! Query pipeline:
//!
//! ```text
//! query ──▶ normalize ──▶ cache? ──▶ branch
//!                                     │
//!                  ┌──────────────────┴───────────────┐
//!            starts with digit                   otherwise
//!                  │                                  │
//!        code-prefix lookup                           │
//!        + token search                          token search
//!        + dedup                                      │
//!                  └──────────────────┬───────────────┘
//!                                     ▼
//!                        score ▶ rank ▶ truncate ▶ cache
//! ```
//!
//! Token retrieval is two-pass: direct matches first (exact word, word
//! prefix, digit containment), AND-intersected per keyword; only when that
//! intersection is empty does the synonym fallback re-run the intersection
//! with each keyword's expansions included.

use std::collections::HashSet;

use crate::cache::QueryCache;
use crate::index::CatalogIndex;
use crate::scoring;
use crate::synonyms;
use crate::text;
use crate::types::{
    CategoryCount, EngineStats, IndexedProduct, MatchField, Product, SearchHit, SearchOptions,
    SearchResults,
};

/// Scoring may stop once `limit * EARLY_STOP_FACTOR` candidates are scored.
/// The over-fetch leaves room for ranking to shuffle the tail.
pub const EARLY_STOP_FACTOR: usize = 3;

/// Categories with fewer products than this are noise in the overview.
pub const MIN_CATEGORY_COUNT: usize = 3;

/// An in-memory search engine over one product catalog.
///
/// Multiple catalogs mean multiple engines; there is no shared state.
#[derive(Debug, Default)]
pub struct SearchEngine {
    products: Vec<IndexedProduct>,
    index: CatalogIndex,
    cache: QueryCache,
}

impl SearchEngine {
    pub fn new() -> Self {
        SearchEngine::default()
    }

    /// Build an engine directly from a catalog.
    pub fn from_catalog(catalog: Vec<Product>) -> Self {
        let mut engine = SearchEngine::new();
        engine.build(catalog);
        engine
    }

    /// Index a catalog, replacing products, index, and cached results as a
    /// unit.
    pub fn build(&mut self, catalog: Vec<Product>) {
        self.products = catalog
            .into_iter()
            .map(IndexedProduct::from_product)
            .collect();
        self.index.build(&self.products);
        self.cache.clear();
    }

    /// Drop the catalog, the index, and the cache.
    pub fn clear(&mut self) {
        self.products.clear();
        self.index.clear();
        self.cache.clear();
    }

    /// Has a catalog been indexed?
    #[inline]
    pub fn is_built(&self) -> bool {
        !self.products.is_empty()
    }

    /// Number of products in the active catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The product at a hit's catalog position.
    pub fn product(&self, position: usize) -> Option<&Product> {
        self.products.get(position).map(|indexed| &indexed.product)
    }

    /// Engine statistics for inspection.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            products: self.products.len(),
            indexed_words: self.index.word_count(),
            code_prefixes: self.index.code_prefix_count(),
            cached_queries: self.cache.len(),
        }
    }

    /// Categories carrying at least [`MIN_CATEGORY_COUNT`] products, largest
    /// first (ties alphabetical).
    pub fn categories(&self) -> Vec<CategoryCount> {
        let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
        for indexed in &self.products {
            let category = indexed.product.category.trim();
            if !category.is_empty() {
                *counts.entry(category).or_default() += 1;
            }
        }
        let mut categories: Vec<CategoryCount> = counts
            .into_iter()
            .filter(|(_, count)| *count >= MIN_CATEGORY_COUNT)
            .map(|(name, count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect();
        categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        categories
    }

    /// Resolve a query against the active catalog.
    ///
    /// Total: bad input degrades to empty results. Digit-leading queries run
    /// both the code-prefix lookup and the token search, with code matches
    /// deduplicated out of the token group.
    pub fn search(&mut self, query: &str, options: &SearchOptions) -> SearchResults {
        if self.products.is_empty() {
            return SearchResults::empty();
        }
        let normalized = text::normalize(query);
        if normalized.is_empty() {
            return SearchResults::empty();
        }

        let cacheable = QueryCache::is_cacheable(&normalized);
        let cache_key = Self::cache_key(&normalized, options);
        if cacheable {
            if let Some(cached) = self.cache.get(&cache_key) {
                return cached;
            }
        }

        let mut results = SearchResults::empty();
        if text::starts_with_digit(&normalized) {
            results.code_hits = self.search_codes(&normalized, options.max_code_results);
        }
        results.token_hits = self.search_tokens(&normalized, options);

        if !results.code_hits.is_empty() {
            let surfaced: HashSet<usize> =
                results.code_hits.iter().map(|hit| hit.position).collect();
            results
                .token_hits
                .retain(|hit| !surfaced.contains(&hit.position));
        }

        if cacheable {
            self.cache.set(cache_key, results.clone());
        }
        results
    }

    // =========================================================================
    // CODE-QUERY BRANCH
    // =========================================================================

    /// Code-prefix lookup: one bucket read, then score, rank, truncate.
    ///
    /// The whole bucket is scored before truncation so an exact code match
    /// can never be cut off by catalog order.
    fn search_codes(&self, normalized: &str, limit: usize) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .index
            .code_prefix_positions(normalized)
            .iter()
            .map(|&position| {
                let (score, kind) =
                    scoring::score_code_prefix_hit(&self.products[position].code_lower, normalized);
                SearchHit {
                    position,
                    score,
                    kind,
                    matched_keywords: vec![normalized.to_string()],
                    matched_fields: vec![MatchField::Code],
                }
            })
            .collect();
        hits.sort_by(|a, b| scoring::compare_hits(a, b, &self.products));
        hits.truncate(limit);
        hits
    }

    // =========================================================================
    // TOKEN SEARCH
    // =========================================================================

    /// Keyword retrieval, scoring, and ranking.
    fn search_tokens(&self, normalized: &str, options: &SearchOptions) -> Vec<SearchHit> {
        let keywords: Vec<&str> = normalized.split_whitespace().collect();
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut candidates = self.intersect_candidates(&keywords, false);
        if candidates.is_empty() && keywords.iter().any(|kw| synonyms::expands(kw)) {
            candidates = self.intersect_candidates(&keywords, true);
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        // Candidate walk is in catalog order so the early stop is
        // deterministic across identically built engines.
        let mut positions: Vec<usize> = candidates.into_iter().collect();
        positions.sort_unstable();

        if let Some(category) = options.category.as_deref() {
            positions.retain(|&position| self.products[position].product.category == category);
        }

        let limit = options.max_token_results;
        let prepared = scoring::prepare_keywords(keywords.iter().copied());
        let mut hits = Vec::new();
        for position in positions {
            if hits.len() >= limit * EARLY_STOP_FACTOR {
                break;
            }
            let scored = scoring::score_product(&self.products[position], &prepared);
            hits.push(SearchHit {
                position,
                score: scored.score,
                kind: scored.kind,
                matched_keywords: scored.matched_keywords,
                matched_fields: scored.matched_fields,
            });
        }
        hits.sort_by(|a, b| scoring::compare_hits(a, b, &self.products));
        hits.truncate(limit);
        hits
    }

    /// AND-intersect per-keyword match sets, abandoning early when any
    /// keyword (or the running intersection) comes up empty.
    fn intersect_candidates(&self, keywords: &[&str], with_expansions: bool) -> HashSet<usize> {
        let mut intersection: Option<HashSet<usize>> = None;
        for keyword in keywords {
            let matches = if with_expansions {
                self.expanded_matches(keyword)
            } else {
                self.direct_matches(keyword)
            };
            if matches.is_empty() {
                return HashSet::new();
            }
            let merged = match intersection.take() {
                None => matches,
                Some(acc) => acc.intersection(&matches).copied().collect(),
            };
            if merged.is_empty() {
                return HashSet::new();
            }
            intersection = Some(merged);
        }
        intersection.unwrap_or_default()
    }

    /// Direct match set for one keyword: exact word, word-prefix (len >= 2),
    /// and digit containment (all-digit keywords, len >= 2).
    fn direct_matches(&self, keyword: &str) -> HashSet<usize> {
        let mut matches: HashSet<usize> =
            self.index.word_positions(keyword).iter().copied().collect();
        if keyword.chars().count() >= 2 {
            matches.extend(self.index.prefix_positions(keyword));
            if text::is_all_digits(keyword) {
                matches.extend(self.index.digit_positions(keyword));
            }
        }
        matches
    }

    /// Fallback match set: the direct matches plus every expansion of the
    /// keyword. Single-word expansions get the exact + prefix treatment;
    /// multi-word expansions ("filet interior") must match all their words.
    fn expanded_matches(&self, keyword: &str) -> HashSet<usize> {
        let mut matches = self.direct_matches(keyword);
        for term in synonyms::expand_term(keyword).iter().skip(1) {
            if term.contains(' ') {
                matches.extend(self.phrase_matches(term));
            } else {
                matches.extend(self.index.word_positions(term).iter().copied());
                if term.chars().count() >= 2 {
                    matches.extend(self.index.prefix_positions(term));
                }
            }
        }
        matches
    }

    /// Positions matching every word of a multi-word expansion.
    fn phrase_matches(&self, phrase: &str) -> HashSet<usize> {
        let mut intersection: Option<HashSet<usize>> = None;
        for word in phrase.split_whitespace() {
            let mut word_matches: HashSet<usize> =
                self.index.word_positions(word).iter().copied().collect();
            if word.chars().count() >= 2 {
                word_matches.extend(self.index.prefix_positions(word));
            }
            if word_matches.is_empty() {
                return HashSet::new();
            }
            intersection = Some(match intersection.take() {
                None => word_matches,
                Some(acc) => acc.intersection(&word_matches).copied().collect(),
            });
        }
        intersection.unwrap_or_default()
    }

    fn cache_key(normalized: &str, options: &SearchOptions) -> String {
        format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}",
            normalized,
            options.category.as_deref().unwrap_or(""),
            options.max_code_results,
            options.max_token_results
        )
    }
}

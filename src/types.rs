// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! These types define how products, their indexed shadows, and search results
//! fit together. Catalog order is load-bearing: every structure that refers
//! to a product does so by its position in the catalog `Vec`, and that
//! position doubles as the final ranking tie-break.
//!
//! # Invariants (ranking goes sideways without these)
//!
//! - **SearchHit**: `position < catalog.len()` - hits are only ever minted by
//!   the engine from positions it indexed.
//! - **IndexedProduct**: all `*_norm` fields are already normalized; the
//!   scorer never normalizes per candidate.
//! - **MatchKind**: the derived `Ord` puts stronger kinds first
//!   (`CodeExact < Contains`), so kind upgrades are `min` operations.

use serde::{Deserialize, Serialize};

use crate::text;

// =============================================================================
// CATALOG TYPES
// =============================================================================

/// A product record as loaded from the catalog.
///
/// `code` is unique per catalog (digits in practice, though nothing enforces
/// that). Everything except `code` and `description` is optional in the
/// source data, so the remaining fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub storage_location: String,
    #[serde(default)]
    pub storage_description: String,
    /// Unit of measure, display only ("buc", "ml", "m").
    #[serde(default)]
    pub unit: String,
    /// Optional precomputed search tokens from the catalog pipeline.
    #[serde(default)]
    pub tokens: Vec<String>,
}

/// A product plus everything the scorer needs, precomputed at index time.
///
/// There is exactly one indexed representation; the engine never branches on
/// "was this product pre-tokenized". Products that arrive with precomputed
/// tokens get them folded into `words` alongside the derived ones.
#[derive(Debug, Clone)]
pub struct IndexedProduct {
    pub product: Product,
    /// Lowercased code, the unit of code matching.
    pub code_lower: String,
    /// Normalized description.
    pub description_norm: String,
    /// Normalized storage location.
    pub storage_location_norm: String,
    /// Normalized storage description.
    pub storage_description_norm: String,
    /// Code + description + storage fields (+ precomputed tokens),
    /// normalized and space-joined. Tokenization source.
    pub searchable_text: String,
    /// Every indexed word of this product, deduplicated.
    pub words: std::collections::HashSet<String>,
}

impl IndexedProduct {
    /// Build the indexed representation of a product.
    pub fn from_product(product: Product) -> Self {
        let code_lower = product.code.to_lowercase();
        let description_norm = text::normalize(&product.description);
        let storage_location_norm = text::normalize(&product.storage_location);
        let storage_description_norm = text::normalize(&product.storage_description);

        let mut searchable_text = String::with_capacity(
            code_lower.len() + description_norm.len() + storage_location_norm.len() + 16,
        );
        searchable_text.push_str(&code_lower);
        for part in [
            &description_norm,
            &storage_location_norm,
            &storage_description_norm,
        ] {
            if !part.is_empty() {
                searchable_text.push(' ');
                searchable_text.push_str(part);
            }
        }
        for token in &product.tokens {
            let token_norm = text::normalize(token);
            if !token_norm.is_empty() {
                searchable_text.push(' ');
                searchable_text.push_str(&token_norm);
            }
        }

        let words = text::extract_words(&searchable_text).into_iter().collect();

        IndexedProduct {
            product,
            code_lower,
            description_norm,
            storage_location_norm,
            storage_description_norm,
            searchable_text,
            words,
        }
    }

    /// Stock classification for display.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.product.stock)
    }
}

/// Stock level classification.
///
/// Thresholds match the scoring bonuses: anything in stock gets a flat boost,
/// and crossing `HIGH_STOCK_THRESHOLD` earns a second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a raw stock count.
    #[inline]
    pub fn classify(stock: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < crate::scoring::HIGH_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// How a result matched the query.
///
/// The derived `Ord` is strongest-first (`CodeExact` < `Contains`), which is
/// backwards from score order on purpose: upgrading a hit's kind during
/// scoring is `kind = kind.min(candidate)`. Don't use `Ord` for ranking -
/// ranking is numeric score, see `scoring::compare_hits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    /// Query equals the product code (code-query branch).
    CodeExact,
    /// Query is a proper prefix of the product code (code-query branch).
    CodePrefix,
    /// A keyword equals the product code (token branch).
    Exact,
    /// Code prefix or description starts-with (token branch).
    Start,
    /// Everything else.
    Contains,
}

impl MatchKind {
    /// Kebab-case string form, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::CodeExact => "code-exact",
            MatchKind::CodePrefix => "code-prefix",
            MatchKind::Exact => "exact",
            MatchKind::Start => "start",
            MatchKind::Contains => "contains",
        }
    }
}

/// Which product field a keyword landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Code,
    Description,
    StorageLocation,
    StorageDescription,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Code => "code",
            MatchField::Description => "description",
            MatchField::StorageLocation => "storageLocation",
            MatchField::StorageDescription => "storageDescription",
        }
    }
}

/// A single ranked result.
///
/// Carries the catalog position rather than a product clone; resolve through
/// [`crate::SearchEngine::product`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Position in the catalog the engine was built from.
    pub position: usize,
    /// Relevance score (higher is better).
    pub score: f64,
    /// Strongest match signal seen while scoring.
    pub kind: MatchKind,
    /// Query keywords that contributed to the score.
    pub matched_keywords: Vec<String>,
    /// Product fields those keywords landed in, deduplicated.
    pub matched_fields: Vec<MatchField>,
}

/// The two result groups a search produces.
///
/// Code-shaped queries fill both groups; a product surfaced as a code match
/// is deduplicated out of the token group. Plain keyword queries leave
/// `code_hits` empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub code_hits: Vec<SearchHit>,
    pub token_hits: Vec<SearchHit>,
}

impl SearchResults {
    /// An empty result set (blank query, unbuilt engine, no matches).
    pub fn empty() -> Self {
        SearchResults::default()
    }

    /// Total hits across both groups.
    #[inline]
    pub fn total(&self) -> usize {
        self.code_hits.len() + self.token_hits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code_hits.is_empty() && self.token_hits.is_empty()
    }
}

/// Search knobs. `Default` gives the interactive-use configuration.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Restrict token matches to this (exact) category.
    pub category: Option<String>,
    /// Cap on the code-match group.
    pub max_code_results: usize,
    /// Cap on the token-match group.
    pub max_token_results: usize,
}

impl SearchOptions {
    pub const DEFAULT_CODE_RESULTS: usize = 5;
    pub const DEFAULT_TOKEN_RESULTS: usize = 20;
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            category: None,
            max_code_results: Self::DEFAULT_CODE_RESULTS,
            max_token_results: Self::DEFAULT_TOKEN_RESULTS,
        }
    }
}

// =============================================================================
// INTROSPECTION TYPES
// =============================================================================

/// A category and how many products carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Engine-level statistics, for the `inspect` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub products: usize,
    pub indexed_words: usize,
    pub code_prefixes: usize,
    pub cached_queries: usize,
}

//! Catalog index construction and lookups.
//!
//! Two structures built in one pass over the catalog:
//!
//! - **Word index**: normalized word → catalog positions containing it.
//!   The companion word set per position rides on
//!   [`IndexedProduct::words`](crate::IndexedProduct), built alongside.
//! - **Code-prefix index**: every prefix (length 1..=len) of every
//!   lowercased product code → positions, kept in catalog order. Makes
//!   numeric prefix queries a single lookup.
//!
//! # Invariants the engine leans on
//!
//! 1. Every word's position list is ascending with no duplicates (build
//!    walks the catalog in order, one insert per product).
//! 2. Code-prefix buckets preserve catalog order.
//! 3. `build` discards all prior state first; no entries from a previous
//!    catalog survive a rebuild.

use std::collections::HashMap;

use crate::types::IndexedProduct;

const NO_POSITIONS: &[usize] = &[];

/// The in-memory index over one catalog.
///
/// Holds positions (indices into the engine's catalog `Vec`), never product
/// data. Rebuilt from scratch on every catalog swap.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    /// word → ascending catalog positions.
    word_positions: HashMap<String, Vec<usize>>,
    /// code prefix → catalog positions in catalog order.
    code_prefixes: HashMap<String, Vec<usize>>,
    /// Number of products indexed.
    products: usize,
}

impl CatalogIndex {
    pub fn new() -> Self {
        CatalogIndex::default()
    }

    /// Index a catalog, replacing any previous contents.
    pub fn build(&mut self, products: &[IndexedProduct]) {
        self.clear();
        self.products = products.len();

        for (position, indexed) in products.iter().enumerate() {
            for word in &indexed.words {
                let positions = self.word_positions.entry(word.clone()).or_default();
                // One insert per product per word; words is a set already.
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }

            let code = &indexed.code_lower;
            for (end, _) in code.char_indices().skip(1) {
                self.code_prefixes
                    .entry(code[..end].to_string())
                    .or_default()
                    .push(position);
            }
            if !code.is_empty() {
                self.code_prefixes
                    .entry(code.clone())
                    .or_default()
                    .push(position);
            }
        }
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.word_positions.clear();
        self.code_prefixes.clear();
        self.products = 0;
    }

    /// Positions whose product contains exactly this word.
    #[inline]
    pub fn word_positions(&self, word: &str) -> &[usize] {
        self.word_positions
            .get(word)
            .map_or(NO_POSITIONS, Vec::as_slice)
    }

    /// Positions whose product contains a word strictly prefixed by
    /// `prefix` (the exact word itself is excluded; pair with
    /// [`word_positions`](Self::word_positions)).
    ///
    /// Scans the vocabulary; positions may repeat across matching words, so
    /// callers collect into a set.
    pub fn prefix_positions(&self, prefix: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        for (word, word_positions) in &self.word_positions {
            if word.len() > prefix.len() && word.starts_with(prefix) {
                positions.extend_from_slice(word_positions);
            }
        }
        positions
    }

    /// Positions whose product contains a word strictly containing the
    /// digit string `digits` (equality excluded). Supports partial
    /// dimension search: "20" reaches products indexed under "20mm".
    pub fn digit_positions(&self, digits: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        for (word, word_positions) in &self.word_positions {
            if word.len() > digits.len() && word.contains(digits) {
                positions.extend_from_slice(word_positions);
            }
        }
        positions
    }

    /// Positions whose code starts with `prefix`, in catalog order.
    #[inline]
    pub fn code_prefix_positions(&self, prefix: &str) -> &[usize] {
        self.code_prefixes
            .get(prefix)
            .map_or(NO_POSITIONS, Vec::as_slice)
    }

    /// Number of distinct indexed words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_positions.len()
    }

    /// Number of distinct code prefixes.
    #[inline]
    pub fn code_prefix_count(&self) -> usize {
        self.code_prefixes.len()
    }

    /// Number of products indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.products
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products == 0
    }
}

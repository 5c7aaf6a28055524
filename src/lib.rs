//! In-memory product catalog search for plumbing and installation supplies.
//!
//! This crate indexes a product catalog (codes, Romanian descriptions, stock,
//! storage data) and answers interactive queries: numeric code prefixes,
//! multi-keyword description searches, trade abbreviations ("fi" for interior
//! thread), and synonym-expanded lookups, ranked by an additive relevance
//! model with stock-aware tie-breaking.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐     ┌──────────────┐     ┌──────────────┐
//! │  text.rs  │────▶│   index.rs   │────▶│  engine.rs   │
//! │ (normalize,     │ (CatalogIndex:     │ (SearchEngine:
//! │  extract_words) │  words + code      │  retrieval,  │
//! │           │     │  prefixes)   │     │  ranking)    │
//! └───────────┘     └──────────────┘     └──────────────┘
//!       │                                       │
//!       ▼                                       ▼
//! ┌─────────────────────────────────┐    ┌─────────────┐
//! │ synonyms.rs / fuzzy.rs / scoring.rs │ │  cache.rs   │
//! │ (expansion, edit distance,      │    │ (FIFO + TTL)│
//! │  additive relevance model)      │    └─────────────┘
//! └─────────────────────────────────┘
//! ```
//!
//! # Module responsibilities
//!
//! | Module     | Responsibility                                    |
//! |------------|---------------------------------------------------|
//! | `text`     | Diacritics folding, word extraction               |
//! | `synonyms` | Trade vocabulary: groups, abbreviations, aliases  |
//! | `index`    | Word and code-prefix lookup tables                |
//! | `fuzzy`    | Bounded Levenshtein for near-miss code matching   |
//! | `scoring`  | Additive relevance model, ranking comparator      |
//! | `cache`    | Bounded FIFO result cache with TTL                |
//! | `engine`   | Query pipeline: retrieve, score, rank, cache      |
//!
//! # Usage
//!
//! ```ignore
//! use merx::{Product, SearchEngine, SearchOptions};
//!
//! let catalog: Vec<Product> = load_catalog()?;
//! let mut engine = SearchEngine::from_catalog(catalog);
//!
//! let results = engine.search("teava ppr 20", &SearchOptions::default());
//! for hit in &results.token_hits {
//!     println!("{:?}", engine.product(hit.position));
//! }
//! ```

mod cache;
mod engine;
mod fuzzy;
mod index;
mod scoring;
mod synonyms;
pub mod testing;
mod text;
mod types;

pub use cache::{QueryCache, CACHE_CAPACITY, CACHE_TTL, MIN_CACHED_QUERY_LEN};
pub use engine::{SearchEngine, EARLY_STOP_FACTOR, MIN_CATEGORY_COUNT};
pub use fuzzy::{levenshtein_within, max_edit_distance, MIN_FUZZY_KEYWORD_LEN};
pub use index::CatalogIndex;
pub use scoring::{
    compare_hits, prepare_keywords, score_product, PreparedKeyword, ProductScore,
    HIGH_STOCK_THRESHOLD,
};
pub use synonyms::{common_terms, expand_query, expand_term, expands, suggestions};
pub use text::{extract_words, normalize};
pub use types::{
    CategoryCount, EngineStats, IndexedProduct, MatchField, MatchKind, Product, SearchHit,
    SearchOptions, SearchResults, StockStatus,
};

//! Product Suggestion Ranking Engine
//!
//! Merges current-list items, aggregated purchase history, and the learning
//! signal into a single ranked, debounced, session-cached suggestion list
//! for a free-text query.

pub mod cache;
pub mod debounce;
mod engine;
pub mod scoring;
mod types;

pub use engine::{RankingOptions, SuggestionRankingEngine, SuggestionSources};
pub use scoring::ScoringWeights;
pub use types::{SuggestionItem, SuggestionKind};

/// Default score weights: `frequency*3 + recency*5 + learning*4`.
pub const DEFAULT_WEIGHTS: ScoringWeights =
    ScoringWeights { frequency: 3, recency: 5, learning: 4 };

/// Fixed score for active-list candidates.
pub const CURRENT_LIST_SCORE: i64 = 1;

/// Quiet period after the last keystroke before recomputation fires.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Queries shorter than this (after normalization) yield no suggestions.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Bound on memoized queries per session.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

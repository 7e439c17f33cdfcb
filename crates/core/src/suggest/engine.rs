//! The ranking engine: merges purchase history, the active list, and the
//! learning signal into one ranked suggestion sequence per settled query.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use chrono::Utc;

use crate::domain::item::Item;
use crate::history::learning::LearningFeedbackStore;
use crate::history::PurchaseHistory;
use crate::pricing::rules::Promotion;
use crate::pricing::{price_line, LinePricing};
use crate::text::normalize_name;

use super::cache::QueryCache;
use super::debounce::{Clock, Debouncer, SystemClock};
use super::scoring::{score_record, ScoringWeights};
use super::types::{SuggestionItem, SuggestionKind};
use super::{CURRENT_LIST_SCORE, DEFAULT_CACHE_CAPACITY, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN};

/// Read-only inputs for one suggestion computation, passed in explicitly so
/// the engine never holds ambient references to shared state.
#[derive(Clone, Copy)]
pub struct SuggestionSources<'a> {
    pub history: &'a PurchaseHistory,
    pub current_items: &'a [Item],
    pub learning: &'a LearningFeedbackStore,
}

/// Tunables for the ranking engine. Defaults match the module constants.
#[derive(Clone, Debug)]
pub struct RankingOptions {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub cache_capacity: usize,
    pub weights: ScoringWeights,
    /// Currency used when synthesizing price info for history candidates.
    pub currency: String,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            weights: ScoringWeights::default(),
            currency: "EUR".to_string(),
        }
    }
}

pub struct SuggestionRankingEngine<C: Clock = SystemClock> {
    clock: C,
    options: RankingOptions,
    query: String,
    effective_query: String,
    debouncer: Debouncer,
    cache: QueryCache,
}

impl SuggestionRankingEngine<SystemClock> {
    pub fn new(options: RankingOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> SuggestionRankingEngine<C> {
    pub fn with_clock(options: RankingOptions, clock: C) -> Self {
        let debouncer = Debouncer::new(options.debounce);
        let cache = QueryCache::new(options.cache_capacity);
        Self {
            clock,
            options,
            query: String::new(),
            effective_query: String::new(),
            debouncer,
            cache,
        }
    }

    /// Record a keystroke. Recomputation is deferred until the quiet period
    /// elapses; every call pushes the deadline out and discards the pending
    /// recomputation.
    pub fn search(&mut self, text: &str) {
        self.query = text.to_string();
        self.debouncer.arm(self.clock.now());
    }

    /// Drive the debounce boundary. Returns the ranked sequence exactly once
    /// per settled query, `None` while input is still in flight.
    pub fn poll(&mut self, sources: SuggestionSources<'_>) -> Option<Vec<SuggestionItem>> {
        if !self.debouncer.fire(self.clock.now()) {
            return None;
        }
        self.effective_query = self.query.clone();
        Some(self.compute(sources))
    }

    /// Compute suggestions for the current query immediately, bypassing the
    /// debounce. Used where there is no keystroke stream to settle.
    pub fn suggest_now(&mut self, sources: SuggestionSources<'_>) -> Vec<SuggestionItem> {
        self.debouncer.cancel();
        self.effective_query = self.query.clone();
        self.compute(sources)
    }

    /// Reset query state. The memo cache deliberately stays warm.
    pub fn clear(&mut self) {
        self.query.clear();
        self.effective_query.clear();
        self.debouncer.cancel();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn effective_query(&self) -> &str {
        &self.effective_query
    }

    fn compute(&mut self, sources: SuggestionSources<'_>) -> Vec<SuggestionItem> {
        let normalized_query = normalize_name(&self.effective_query);
        if normalized_query.chars().count() < self.options.min_query_len {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(&normalized_query) {
            tracing::trace!(query = %normalized_query, "suggestion cache hit");
            return cached.clone();
        }

        let now = Utc::now();

        // History candidates, keyed by id; on collision the higher score wins.
        let mut history_candidates: HashMap<String, SuggestionItem> = HashMap::new();
        let mut history_names: HashSet<String> = HashSet::new();
        for record in sources.history.records() {
            if !record.normalized_name.contains(&normalized_query) {
                continue;
            }
            let score = score_record(record, sources.learning, self.options.weights, now);
            let price_info = record.last_price.map(|unit_price| {
                price_line(&LinePricing {
                    qty: 1.0,
                    unit: record.unit.parse().unwrap_or_default(),
                    unit_price,
                    promo: Promotion::None,
                    currency: self.options.currency.clone(),
                })
            });
            let candidate = SuggestionItem {
                id: format!("hist-{}", record.name),
                kind: SuggestionKind::History,
                name: record.name.clone(),
                score,
                price_info,
            };
            history_names.insert(record.normalized_name.clone());
            match history_candidates.entry(candidate.id.clone()) {
                Entry::Occupied(mut slot) => {
                    // Two records sharing a display name: higher score wins.
                    if slot.get().score < candidate.score {
                        slot.insert(candidate);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
            }
        }

        let mut candidates: Vec<SuggestionItem> = history_candidates.into_values().collect();

        // Active-list items matching the query that history does not cover.
        for item in sources.current_items {
            let normalized_name = normalize_name(&item.name);
            if !normalized_name.contains(&normalized_query)
                || history_names.contains(&normalized_name)
            {
                continue;
            }
            candidates.push(SuggestionItem {
                id: format!("cur-{}", item.name),
                kind: SuggestionKind::Current,
                name: item.name.clone(),
                score: CURRENT_LIST_SCORE,
                price_info: item.price_info.clone(),
            });
        }

        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));

        // Offer to create a new item when nothing matches the query exactly.
        // Appended after the ranked matches: creating is the last resort.
        let trimmed_query = self.effective_query.trim();
        let query_exists = candidates
            .iter()
            .any(|candidate| normalize_name(&candidate.name) == normalized_query);
        if !query_exists && !trimmed_query.is_empty() {
            candidates.push(SuggestionItem {
                id: format!("create-{trimmed_query}"),
                kind: SuggestionKind::Create,
                name: trimmed_query.to_string(),
                score: 0,
                price_info: None,
            });
        }

        tracing::debug!(
            query = %normalized_query,
            candidates = candidates.len(),
            "suggestions computed"
        );
        self.cache.insert(normalized_query, candidates.clone());
        candidates
    }
}

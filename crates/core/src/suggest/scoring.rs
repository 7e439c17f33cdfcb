//! Scoring for history-sourced suggestion candidates.
//!
//! `score = frequency * 3 + recency_bucket * 5 + learning_bucket * 4`, with
//! bucketed bonuses for how recently a product was bought and how often a
//! suggestion for it was previously accepted.

use chrono::{DateTime, Utc};

use crate::domain::product::AggregatedProductRecord;
use crate::history::learning::LearningFeedbackStore;

/// Weights for the three ranking components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringWeights {
    pub frequency: i64,
    pub recency: i64,
    pub learning: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Bucketed bonus for purchase recency: 5 within a week, 3 within a month,
/// 1 within ninety days, else 0.
pub fn recency_score(last_purchased_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let days = (now - last_purchased_at).num_days();
    if days <= 7 {
        5
    } else if days <= 30 {
        3
    } else if days <= 90 {
        1
    } else {
        0
    }
}

/// Bucketed bonus for accepted-suggestion count: 5 from ten selections,
/// 3 from five, 1 from two, else 0.
pub fn learning_boost(selects: u32) -> i64 {
    if selects >= 10 {
        5
    } else if selects >= 5 {
        3
    } else if selects >= 2 {
        1
    } else {
        0
    }
}

/// Total score for one history record under the given weights.
pub fn score_record(
    record: &AggregatedProductRecord,
    learning: &LearningFeedbackStore,
    weights: ScoringWeights,
    now: DateTime<Utc>,
) -> i64 {
    let frequency = i64::from(record.frequency);
    let recency = recency_score(record.last_purchased_at, now);
    let boost = learning
        .get(&record.normalized_name)
        .map(|entry| learning_boost(entry.selects))
        .unwrap_or(0);

    frequency * weights.frequency + recency * weights.recency + boost * weights.learning
}

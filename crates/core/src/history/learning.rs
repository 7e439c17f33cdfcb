//! Selection-feedback counters used as a ranking signal.
//!
//! Pure counter semantics: no decay, no cap. The store lives for the
//! application's lifetime (persisted by the surrounding app) and is only
//! emptied by an explicit reset. Injected into the ranking engine rather
//! than living as an ambient global.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::normalize_name;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    pub selects: u32,
    pub last_select: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningFeedbackStore {
    counters: HashMap<String, LearningRecord>,
}

impl LearningFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the user accepted a suggestion for `name`. Keys are
    /// normalized, so `"Milk"` and `"milk"` share one counter.
    pub fn record_selection(&mut self, name: &str, now: DateTime<Utc>) {
        let key = normalize_name(name);
        if key.is_empty() {
            return;
        }
        let record = self
            .counters
            .entry(key)
            .or_insert(LearningRecord { selects: 0, last_select: None });
        record.selects += 1;
        record.last_select = Some(now);
    }

    /// Look up the counter for an already-normalized name.
    pub fn get(&self, normalized_name: &str) -> Option<&LearningRecord> {
        self.counters.get(normalized_name)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Drop every counter. The only way learning state is ever deleted.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}

//! Session memo cache for computed suggestion sequences.
//!
//! Keyed by normalized query text. Bounded: when the capacity is reached the
//! oldest inserted entry is evicted, so a long session of distinct queries
//! cannot grow memory without limit.

use std::collections::{HashMap, VecDeque};

use super::types::SuggestionItem;

#[derive(Clone, Debug)]
pub struct QueryCache {
    capacity: usize,
    entries: HashMap<String, Vec<SuggestionItem>>,
    insertion_order: VecDeque<String>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    pub fn get(&self, normalized_query: &str) -> Option<&Vec<SuggestionItem>> {
        self.entries.get(normalized_query)
    }

    pub fn insert(&mut self, normalized_query: String, suggestions: Vec<SuggestionItem>) {
        if self.entries.insert(normalized_query.clone(), suggestions).is_none() {
            self.insertion_order.push_back(normalized_query);
            while self.entries.len() > self.capacity {
                if let Some(oldest) = self.insertion_order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::QueryCache;
    use crate::suggest::types::{SuggestionItem, SuggestionKind};

    fn suggestion(name: &str) -> Vec<SuggestionItem> {
        vec![SuggestionItem {
            id: format!("hist-{name}"),
            kind: SuggestionKind::History,
            name: name.to_string(),
            score: 1,
            price_info: None,
        }]
    }

    #[test]
    fn stores_and_returns_entries_verbatim() {
        let mut cache = QueryCache::new(4);
        let items = suggestion("milk");
        cache.insert("milk".to_string(), items.clone());
        assert_eq!(cache.get("milk"), Some(&items));
        assert_eq!(cache.get("bread"), None);
    }

    #[test]
    fn evicts_oldest_entry_at_capacity() {
        let mut cache = QueryCache::new(2);
        cache.insert("a".to_string(), suggestion("a"));
        cache.insert("b".to_string(), suggestion("b"));
        cache.insert("c".to_string(), suggestion("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none(), "oldest entry should be evicted");
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn reinserting_a_key_does_not_duplicate_order_entries() {
        let mut cache = QueryCache::new(2);
        cache.insert("a".to_string(), suggestion("a"));
        cache.insert("a".to_string(), suggestion("a2"));
        cache.insert("b".to_string(), suggestion("b"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = QueryCache::new(2);
        cache.insert("a".to_string(), suggestion("a"));
        cache.clear();
        assert!(cache.is_empty());
    }
}

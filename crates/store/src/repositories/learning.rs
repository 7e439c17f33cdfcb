use trolley_core::LearningFeedbackStore;

use super::{decode, encode, RepositoryError};
use crate::kv::KvStore;

const TABLE: &str = "learning_counters";

pub trait LearningRepository {
    fn load(&self) -> Result<LearningFeedbackStore, RepositoryError>;
    fn save(&self, learning: &LearningFeedbackStore) -> Result<(), RepositoryError>;
}

pub struct KvLearningRepository<S> {
    store: S,
}

impl<S: KvStore> KvLearningRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KvStore> LearningRepository for KvLearningRepository<S> {
    fn load(&self) -> Result<LearningFeedbackStore, RepositoryError> {
        match self.store.get(TABLE)? {
            Some(raw) => decode(TABLE, &raw),
            None => Ok(LearningFeedbackStore::new()),
        }
    }

    fn save(&self, learning: &LearningFeedbackStore) -> Result<(), RepositoryError> {
        let document = encode(TABLE, learning)?;
        self.store.set(TABLE, &document)?;
        tracing::debug!(counters = learning.len(), "learning counters saved");
        Ok(())
    }
}

use trolley_core::ArchivedList;

use super::{decode, encode, RepositoryError};
use crate::kv::KvStore;

const TABLE: &str = "archived_lists";

pub trait ArchivedListRepository {
    /// Every archived list, in stored order. The aggregator orders by
    /// timestamp itself, so stored order carries no meaning.
    fn load_all(&self) -> Result<Vec<ArchivedList>, RepositoryError>;
    fn save_all(&self, lists: &[ArchivedList]) -> Result<(), RepositoryError>;
}

pub struct KvArchivedListRepository<S> {
    store: S,
}

impl<S: KvStore> KvArchivedListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KvStore> ArchivedListRepository for KvArchivedListRepository<S> {
    fn load_all(&self) -> Result<Vec<ArchivedList>, RepositoryError> {
        match self.store.get(TABLE)? {
            Some(raw) => decode(TABLE, &raw),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, lists: &[ArchivedList]) -> Result<(), RepositoryError> {
        let document = encode(TABLE, &lists)?;
        self.store.set(TABLE, &document)?;
        tracing::debug!(lists = lists.len(), "archived lists saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use trolley_core::{ArchivedList, Item, ItemId, ListId};

    use super::{ArchivedListRepository, KvArchivedListRepository, TABLE};
    use crate::kv::{KvStore, MemoryStore};

    fn sample_list() -> ArchivedList {
        ArchivedList {
            id: ListId("l1".to_string()),
            name: "weekly shop".to_string(),
            archived_at: Utc::now(),
            store_id: None,
            items: vec![Item {
                id: ItemId("i1".to_string()),
                name: "Milk".to_string(),
                checked: true,
                price_info: None,
                barcode: Some("40111".to_string()),
            }],
        }
    }

    #[test]
    fn missing_table_reads_as_empty() {
        let repo = KvArchivedListRepository::new(MemoryStore::new());
        assert!(repo.load_all().expect("load").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = KvArchivedListRepository::new(MemoryStore::new());
        let lists = vec![sample_list()];
        repo.save_all(&lists).expect("save");
        assert_eq!(repo.load_all().expect("load"), lists);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let store = MemoryStore::new();
        store.set(TABLE, "{\"version\":99,\"data\":[]}").expect("seed");
        let repo = KvArchivedListRepository::new(store);
        let error = repo.load_all().expect_err("version should be rejected");
        assert!(matches!(
            error,
            super::RepositoryError::UnsupportedVersion { found: 99, .. }
        ));
    }
}

//! Persistence boundary for the shopping-list core: named JSON blobs with a
//! repository seam per table. No storage vocabulary leaks into the core.

pub mod kv;
pub mod repositories;

pub use kv::{JsonFileStore, KvError, KvStore, MemoryStore};
pub use repositories::{
    ArchivedListRepository, KvArchivedListRepository, KvLearningRepository, LearningRepository,
    RepositoryError, SCHEMA_VERSION,
};

//! Repositories over the two persisted tables: archived lists and learning
//! counters. Both are key→JSON documents wrapped in a versioned envelope so
//! a future layout change fails loudly instead of misparsing.

mod archive;
mod learning;

pub use archive::{ArchivedListRepository, KvArchivedListRepository};
pub use learning::{KvLearningRepository, LearningRepository};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kv::KvError;

/// Current document layout version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] KvError),
    #[error("could not decode `{table}` document: {source}")]
    Decode { table: &'static str, source: serde_json::Error },
    #[error("could not encode `{table}` document: {source}")]
    Encode { table: &'static str, source: serde_json::Error },
    #[error("unsupported `{table}` document version {found} (expected {expected})")]
    UnsupportedVersion { table: &'static str, found: u32, expected: u32 },
}

impl From<RepositoryError> for trolley_core::ApplicationError {
    fn from(value: RepositoryError) -> Self {
        trolley_core::ApplicationError::Persistence(value.to_string())
    }
}

/// Versioned wrapper every persisted document lives in.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub version: u32,
    pub data: T,
}

pub(crate) fn decode<T: for<'de> Deserialize<'de>>(
    table: &'static str,
    raw: &str,
) -> Result<T, RepositoryError> {
    let envelope: Envelope<T> = serde_json::from_str(raw)
        .map_err(|source| RepositoryError::Decode { table, source })?;
    if envelope.version != SCHEMA_VERSION {
        return Err(RepositoryError::UnsupportedVersion {
            table,
            found: envelope.version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(envelope.data)
}

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

pub(crate) fn encode<T: Serialize>(table: &'static str, data: &T) -> Result<String, RepositoryError> {
    serde_json::to_string(&EnvelopeRef { version: SCHEMA_VERSION, data })
        .map_err(|source| RepositoryError::Encode { table, source })
}

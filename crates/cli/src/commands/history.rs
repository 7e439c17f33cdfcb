use std::path::Path;

use serde::Serialize;

use trolley_core::{aggregate, AggregatedProductRecord};
use trolley_store::{ArchivedListRepository, JsonFileStore, KvArchivedListRepository};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct HistoryPayload {
    lists: usize,
    products: usize,
    records: Vec<AggregatedProductRecord>,
}

/// Rebuild the aggregated product table from the archived-lists store.
pub fn run(data_dir: &Path) -> CommandResult {
    let repo = KvArchivedListRepository::new(JsonFileStore::new(data_dir));
    let lists = match repo.load_all() {
        Ok(lists) => lists,
        Err(error) => return CommandResult::failure("history", "persistence", error.to_string(), 3),
    };

    let history = aggregate(&lists);
    let mut records: Vec<AggregatedProductRecord> = history.records().cloned().collect();
    records.sort_by(|a, b| a.key.cmp(&b.key));

    CommandResult::success(
        "history",
        HistoryPayload { lists: lists.len(), products: records.len(), records },
    )
}

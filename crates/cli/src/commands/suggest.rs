use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use trolley_core::config::{AppConfig, LoadOptions};
use trolley_core::{aggregate, SuggestionItem, SuggestionRankingEngine, SuggestionSources};
use trolley_store::{
    ArchivedListRepository, JsonFileStore, KvArchivedListRepository, KvLearningRepository,
    LearningRepository,
};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct SuggestPayload {
    query: String,
    suggestions: Vec<SuggestionItem>,
    selection_recorded: Option<String>,
}

/// Run one query through aggregation and ranking. A one-shot process has no
/// keystroke stream, so the debounce is bypassed. `--select <name>` records
/// an accepted suggestion back into the learning store, the write the
/// surrounding app performs when the user taps a suggestion.
pub fn run(query: &str, data_dir: &Path, select: Option<&str>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("suggest", "config_validation", error.to_string(), 2)
        }
    };

    let list_repo = KvArchivedListRepository::new(JsonFileStore::new(data_dir));
    let learning_repo = KvLearningRepository::new(JsonFileStore::new(data_dir));

    let lists = match list_repo.load_all() {
        Ok(lists) => lists,
        Err(error) => return CommandResult::failure("suggest", "persistence", error.to_string(), 3),
    };
    let mut learning = match learning_repo.load() {
        Ok(learning) => learning,
        Err(error) => return CommandResult::failure("suggest", "persistence", error.to_string(), 3),
    };

    let history = aggregate(&lists);
    let mut engine = SuggestionRankingEngine::new(config.ranking_options());
    engine.search(query);
    let suggestions = engine.suggest_now(SuggestionSources {
        history: &history,
        current_items: &[],
        learning: &learning,
    });

    let selection_recorded = match select {
        Some(name) => {
            learning.record_selection(name, Utc::now());
            if let Err(error) = learning_repo.save(&learning) {
                return CommandResult::failure("suggest", "persistence", error.to_string(), 3);
            }
            Some(name.to_string())
        }
        None => None,
    };

    CommandResult::success(
        "suggest",
        SuggestPayload { query: query.to_string(), suggestions, selection_recorded },
    )
}

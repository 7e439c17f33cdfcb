//! End-to-end flow: archive lists, rebuild history, type a query, settle the
//! debounce, accept a suggestion, and watch the learning signal lift the
//! product on the next session.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};

use trolley_core::suggest::debounce::testing::ManualClock;
use trolley_core::{
    aggregate, ArchivedList, Item, ItemId, LearningFeedbackStore, ListId, RankingOptions, StoreId,
    SuggestionKind, SuggestionRankingEngine, SuggestionSources,
};

fn purchased(name: &str, barcode: Option<&str>) -> Item {
    Item {
        id: ItemId(format!("item-{name}")),
        name: name.to_string(),
        checked: true,
        price_info: None,
        barcode: barcode.map(str::to_string),
    }
}

fn archived(id: &str, days_ago: i64, items: Vec<Item>) -> ArchivedList {
    ArchivedList {
        id: ListId(id.to_string()),
        name: format!("weekly shop {id}"),
        archived_at: Utc::now() - ChronoDuration::days(days_ago),
        store_id: Some(StoreId("corner-market".to_string())),
        items,
    }
}

#[test]
fn archived_purchases_become_ranked_suggestions() {
    let lists = vec![
        archived("w1", 40, vec![purchased("Oat milk", Some("40111")), purchased("Bananas", None)]),
        archived("w2", 20, vec![purchased("Oat milk", Some("40111"))]),
        archived("w3", 3, vec![purchased("Oat milk", Some("40111")), purchased("Oat cookies", None)]),
    ];
    let history = aggregate(&lists);
    assert_eq!(history.len(), 3);

    let clock = ManualClock::start();
    let mut engine = SuggestionRankingEngine::with_clock(RankingOptions::default(), clock.clone());
    let mut learning = LearningFeedbackStore::new();

    let active_list: Vec<Item> = Vec::new();
    let sources =
        SuggestionSources { history: &history, current_items: &active_list, learning: &learning };

    // Typing burst: nothing fires until the quiet period elapses.
    engine.search("o");
    engine.search("oa");
    engine.search("oat");
    assert!(engine.poll(sources).is_none());
    clock.advance(Duration::from_millis(250));
    let suggestions = engine.poll(sources).expect("settled query");

    // Oat milk: frequency 3, bought 3 days ago => 3*3 + 5*5 = 34.
    // Oat cookies: frequency 1, bought 3 days ago => 1*3 + 5*5 = 28.
    assert_eq!(suggestions[0].name, "Oat milk");
    assert_eq!(suggestions[0].score, 34);
    assert_eq!(suggestions[0].kind, SuggestionKind::History);
    assert_eq!(suggestions[1].name, "Oat cookies");
    // No exact match for "oat": the create offer trails the real matches.
    assert_eq!(suggestions.last().unwrap().kind, SuggestionKind::Create);

    // The user accepts "Oat cookies" five times over the following sessions.
    for _ in 0..5 {
        learning.record_selection("Oat cookies", Utc::now());
    }

    // New session (fresh engine, so the memo cache is cold): the learning
    // boost now closes most of the frequency gap.
    let mut engine = SuggestionRankingEngine::with_clock(RankingOptions::default(), clock.clone());
    let sources =
        SuggestionSources { history: &history, current_items: &active_list, learning: &learning };
    engine.search("oat");
    let suggestions = engine.suggest_now(sources);
    let cookies = suggestions.iter().find(|s| s.name == "Oat cookies").expect("cookies");
    assert_eq!(cookies.score, 28 + 3 * 4, "five selections add a 3-bucket learning boost");
}

#[test]
fn barcode_identity_survives_renames_across_lists() {
    let lists = vec![
        archived("w1", 10, vec![purchased("oat milk 1l", Some("40111"))]),
        archived("w2", 1, vec![purchased("Oat Milk (1L)", Some("40111"))]),
    ];
    let history = aggregate(&lists);
    assert_eq!(history.len(), 1, "same barcode folds to one record");

    let record = history.get("40111").expect("record");
    assert_eq!(record.frequency, 2);
    assert_eq!(record.name, "Oat Milk (1L)", "display name follows the latest purchase");
}

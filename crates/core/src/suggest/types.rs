use serde::{Deserialize, Serialize};

use crate::domain::item::PriceInfo;

/// Where a suggestion came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Already on the active list.
    Current,
    /// Known from purchase history.
    History,
    /// Offer to create a brand-new item named after the query.
    Create,
}

/// One ranked suggestion. Transient: recomputed per query, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub name: String,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_info: Option<PriceInfo>,
}

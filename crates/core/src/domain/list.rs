use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::item::Item;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub String);

/// A shopping list frozen at archive time. Only checked items count as
/// purchases when the history table is rebuilt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchivedList {
    pub id: ListId,
    pub name: String,
    pub archived_at: DateTime<Utc>,
    pub store_id: Option<StoreId>,
    pub items: Vec<Item>,
}

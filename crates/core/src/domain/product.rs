use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::list::StoreId;

/// Deduplicated summary of every historical purchase of one product across
/// archived lists. Identity is the barcode when one was ever seen, otherwise
/// the normalized product name.
///
/// Rebuilt wholesale by the aggregator on every archive/restore transition;
/// the ranking engine only reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedProductRecord {
    pub key: String,
    pub name: String,
    pub normalized_name: String,
    pub barcode: Option<String>,
    pub store_id: Option<StoreId>,
    pub last_price: Option<f64>,
    pub unit: String,
    pub frequency: u32,
    pub last_purchased_at: DateTime<Utc>,
}

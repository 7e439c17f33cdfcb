//! Purchase-history aggregation.
//!
//! Folds the full set of archived lists into one deduplicated record per
//! product. Always a complete rebuild: callers re-run it on every
//! archive/restore transition instead of reconciling partial state, which
//! keeps the merge deterministic at the cost of O(total historical items).

pub mod learning;

use std::collections::HashMap;

use crate::domain::list::ArchivedList;
use crate::domain::product::AggregatedProductRecord;
use crate::text::normalize_name;

/// The rebuilt product-record table. Read-only for everyone except
/// [`aggregate`], which replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseHistory {
    records: HashMap<String, AggregatedProductRecord>,
}

impl PurchaseHistory {
    pub fn get(&self, key: &str) -> Option<&AggregatedProductRecord> {
        self.records.get(key)
    }

    pub fn records(&self) -> impl Iterator<Item = &AggregatedProductRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Identity key for one purchased item: barcode when present, otherwise the
/// normalized name.
fn identity_key(barcode: Option<&str>, normalized_name: &str) -> String {
    match barcode {
        Some(code) if !code.trim().is_empty() => code.trim().to_string(),
        _ => normalized_name.to_string(),
    }
}

/// Rebuild the aggregated product table from every checked item across the
/// supplied archived lists.
///
/// Lists are stably sorted by `archived_at` ascending before folding, so the
/// "last occurrence wins" fields (`name`, `store_id`, `last_price`, `unit`)
/// reflect the temporally last purchase even when the caller supplies lists
/// out of order. A barcode, once seen for a product, is never un-set.
pub fn aggregate(lists: &[ArchivedList]) -> PurchaseHistory {
    let mut ordered: Vec<&ArchivedList> = lists.iter().collect();
    ordered.sort_by_key(|list| list.archived_at);

    let mut records: HashMap<String, AggregatedProductRecord> = HashMap::new();
    for list in ordered {
        for item in list.items.iter().filter(|item| item.checked) {
            let normalized = normalize_name(&item.name);
            if normalized.is_empty() && item.barcode.is_none() {
                continue;
            }
            let key = identity_key(item.barcode.as_deref(), &normalized);
            let last_price = item.price_info.as_ref().map(|info| info.unit_price);
            let unit = item
                .price_info
                .as_ref()
                .map(|info| info.unit.as_str().to_string())
                .unwrap_or_else(|| "u".to_string());

            match records.get_mut(&key) {
                Some(record) => {
                    record.name = item.name.clone();
                    record.normalized_name = normalized;
                    record.barcode = record.barcode.take().or_else(|| item.barcode.clone());
                    record.store_id = list.store_id.clone();
                    record.last_price = last_price;
                    record.unit = unit;
                    record.frequency += 1;
                    record.last_purchased_at = record.last_purchased_at.max(list.archived_at);
                }
                None => {
                    records.insert(
                        key.clone(),
                        AggregatedProductRecord {
                            key,
                            name: item.name.clone(),
                            normalized_name: normalized,
                            barcode: item.barcode.clone(),
                            store_id: list.store_id.clone(),
                            last_price,
                            unit,
                            frequency: 1,
                            last_purchased_at: list.archived_at,
                        },
                    );
                }
            }
        }
    }

    tracing::debug!(lists = lists.len(), products = records.len(), "purchase history rebuilt");
    PurchaseHistory { records }
}

use serde::{Deserialize, Serialize};

use crate::pricing::rules::Promotion;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Unit a quantity is expressed in. Fractional quantities are valid for
/// weight and volume units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    #[default]
    #[serde(rename = "u")]
    Unit,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "l")]
    Litre,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Unit => "u",
            UnitType::Kilogram => "kg",
            UnitType::Litre => "l",
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "u" | "unit" | "units" => Ok(Self::Unit),
            "kg" => Ok(Self::Kilogram),
            "l" => Ok(Self::Litre),
            other => Err(format!("unsupported unit `{other}` (expected u|kg|l)")),
        }
    }
}

/// Priced snapshot of one list line. Attached to an item whenever quantity,
/// unit price, or promotion change; recomputed rather than mutated in place.
///
/// Derives `PartialEq` so callers can detect changes by value comparison
/// instead of comparing serialized text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub qty: f64,
    pub unit: UnitType,
    pub unit_price: f64,
    pub promo: Promotion,
    pub total: f64,
    pub savings: f64,
    pub summary: String,
    pub warning: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub checked: bool,
    pub price_info: Option<PriceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

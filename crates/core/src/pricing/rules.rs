//! Promotion rule registry.
//!
//! Each promotion is a named pricing transformation with an applicability
//! guard. The registry is closed: unknown wire keys fall back to
//! [`Promotion::None`] rather than being rejected, so stale or garbage keys
//! coming back from persisted items never fail a price calculation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Promotion {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "2x1")]
    TwoForOne,
    #[serde(rename = "3x2")]
    ThreeForTwo,
    #[serde(rename = "discount10")]
    Discount10,
    #[serde(rename = "discount20")]
    Discount20,
}

impl Promotion {
    /// Every known promotion, in display order.
    pub const ALL: [Promotion; 5] = [
        Promotion::None,
        Promotion::TwoForOne,
        Promotion::ThreeForTwo,
        Promotion::Discount10,
        Promotion::Discount20,
    ];

    /// Resolve a wire key. Unknown keys are treated as no promotion.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "2x1" => Self::TwoForOne,
            "3x2" => Self::ThreeForTwo,
            "discount10" => Self::Discount10,
            "discount20" => Self::Discount20,
            _ => Self::None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TwoForOne => "2x1",
            Self::ThreeForTwo => "3x2",
            Self::Discount10 => "discount10",
            Self::Discount20 => "discount20",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No promotion",
            Self::TwoForOne => "2 for 1",
            Self::ThreeForTwo => "3 for 2",
            Self::Discount10 => "10% off",
            Self::Discount20 => "20% off",
        }
    }

    /// Whether the promotion can apply at this quantity. Percentage discounts
    /// apply at any quantity; free-unit promotions need at least one complete
    /// group.
    pub fn is_applicable(&self, qty: f64) -> bool {
        match self {
            Self::None | Self::Discount10 | Self::Discount20 => true,
            Self::TwoForOne => qty >= 2.0,
            Self::ThreeForTwo => qty >= 3.0,
        }
    }

    /// Price `qty` units at `unit_price` under this promotion, assuming the
    /// guard holds. Non-negative for non-negative inputs.
    ///
    /// Free-unit promotions charge "payable units": one free unit per
    /// complete pair (2x1) or per complete triple (3x2), with any remainder
    /// charged in full.
    pub fn apply(&self, unit_price: f64, qty: f64) -> f64 {
        match self {
            Self::None => unit_price * qty,
            Self::TwoForOne => {
                let pairs = (qty / 2.0).floor();
                let remainder = qty % 2.0;
                (pairs + remainder) * unit_price
            }
            Self::ThreeForTwo => {
                let sets = (qty / 3.0).floor();
                let remainder = qty % 3.0;
                (sets * 2.0 + remainder) * unit_price
            }
            Self::Discount10 => unit_price * qty * 0.90,
            Self::Discount20 => unit_price * qty * 0.80,
        }
    }
}

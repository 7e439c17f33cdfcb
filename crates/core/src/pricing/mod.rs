//! Line-item pricing with discrete promotion semantics.
//!
//! Every data-quality problem degrades gracefully: NaN inputs produce a
//! zeroed result with a warning, inapplicable promotions fall back to the
//! undiscounted price with a warning, unknown promotion keys price as no
//! promotion. Nothing in this module returns an error.

pub mod input;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::domain::item::{PriceInfo, UnitType};
use self::rules::Promotion;

pub const INVALID_VALUES_WARNING: &str = "invalid values";

/// One line to price: quantity, unit price, and the selected promotion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePricing {
    pub qty: f64,
    pub unit: UnitType,
    pub unit_price: f64,
    pub promo: Promotion,
    pub currency: String,
}

pub trait PricingEngine: Send + Sync {
    fn price(&self, line: &LinePricing) -> PriceInfo;
}

#[derive(Default)]
pub struct PromotionPricingEngine;

impl PricingEngine for PromotionPricingEngine {
    fn price(&self, line: &LinePricing) -> PriceInfo {
        price_line(line)
    }
}

/// Price one line. Internal arithmetic stays at full floating precision;
/// rounding to 2 decimals happens only in the summary string, so repeated
/// recomputation on every keystroke never compounds rounding error.
pub fn price_line(line: &LinePricing) -> PriceInfo {
    if line.qty.is_nan() || line.unit_price.is_nan() {
        tracing::debug!(promo = line.promo.key(), "pricing skipped: non-numeric input");
        return PriceInfo {
            qty: line.qty,
            unit: line.unit,
            unit_price: line.unit_price,
            promo: line.promo,
            total: 0.0,
            savings: 0.0,
            summary: String::new(),
            warning: Some(INVALID_VALUES_WARNING.to_string()),
        };
    }

    let subtotal = line.qty * line.unit_price;
    let (total, warning) = if line.promo.is_applicable(line.qty) {
        (line.promo.apply(line.unit_price, line.qty), None)
    } else {
        // Still price the line as if no promotion were selected.
        (
            Promotion::None.apply(line.unit_price, line.qty),
            Some(format!(
                "promotion does not apply to the selected quantity ({})",
                format_qty(line.qty)
            )),
        )
    };

    let savings = (subtotal - total).max(0.0);
    let summary = summarize(line, total, warning.is_none());

    PriceInfo {
        qty: line.qty,
        unit: line.unit,
        unit_price: line.unit_price,
        promo: line.promo,
        total,
        savings,
        summary,
        warning,
    }
}

/// One-line human-readable recap, e.g.
/// `3 u × 2.00 EUR/u (2 for 1) = 4.00 EUR`.
fn summarize(line: &LinePricing, total: f64, promo_applied: bool) -> String {
    let promo_part = if promo_applied && line.promo != Promotion::None {
        format!(" ({})", line.promo.label())
    } else {
        String::new()
    };
    format!(
        "{} {} × {} {}/{}{} = {} {}",
        format_qty(line.qty),
        line.unit,
        format_amount(line.unit_price),
        line.currency,
        line.unit,
        promo_part,
        format_amount(total),
        line.currency,
    )
}

/// Display rounding for monetary amounts: exactly 2 decimals.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Display form for quantities: up to 2 decimals, trailing zeros trimmed.
pub fn format_qty(qty: f64) -> String {
    let text = format!("{qty:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::rules::Promotion;
    use super::{format_qty, price_line, LinePricing, PricingEngine, PromotionPricingEngine};
    use crate::domain::item::UnitType;

    fn line(qty: f64, unit_price: f64, promo: Promotion) -> LinePricing {
        LinePricing { qty, unit: UnitType::Unit, unit_price, promo, currency: "EUR".to_string() }
    }

    #[test]
    fn no_promotion_prices_quantity_times_unit_price() {
        let info = price_line(&line(3.0, 2.0, Promotion::None));
        assert_eq!(info.total, 6.0);
        assert_eq!(info.savings, 0.0);
        assert_eq!(info.warning, None);
    }

    #[test]
    fn two_for_one_gives_one_free_unit_per_pair() {
        let info = price_line(&line(3.0, 2.0, Promotion::TwoForOne));
        assert_eq!(info.total, 4.0);
        assert_eq!(info.savings, 2.0);
        assert_eq!(info.warning, None);
    }

    #[test]
    fn inapplicable_promotion_falls_back_to_undiscounted_total() {
        let info = price_line(&line(1.0, 2.0, Promotion::TwoForOne));
        assert_eq!(info.total, 2.0);
        assert_eq!(info.savings, 0.0);
        let warning = info.warning.expect("expected applicability warning");
        assert!(warning.contains("(1)"), "warning should name the quantity: {warning}");
    }

    #[test]
    fn three_for_two_charges_payable_units() {
        let info = price_line(&line(7.0, 1.0, Promotion::ThreeForTwo));
        assert_eq!(info.total, 5.0);
        assert_eq!(info.savings, 2.0);
    }

    #[test]
    fn ten_percent_discount_always_applies() {
        let info = price_line(&line(1.0, 10.0, Promotion::Discount10));
        assert_eq!(info.total, 9.0);
        assert!((info.savings - 1.0).abs() < 1e-9);
        assert_eq!(info.warning, None);
    }

    #[test]
    fn nan_input_yields_zeroed_warned_result() {
        let info = price_line(&line(f64::NAN, 2.0, Promotion::TwoForOne));
        assert_eq!(info.total, 0.0);
        assert_eq!(info.savings, 0.0);
        assert_eq!(info.warning.as_deref(), Some(super::INVALID_VALUES_WARNING));

        let info = price_line(&line(2.0, f64::NAN, Promotion::None));
        assert_eq!(info.total, 0.0);
        assert_eq!(info.warning.as_deref(), Some(super::INVALID_VALUES_WARNING));
    }

    #[test]
    fn savings_invariant_holds_across_inputs() {
        for promo in Promotion::ALL {
            for qty in [0.0, 1.0, 2.0, 3.0, 4.5, 7.0] {
                for price in [0.0, 0.99, 2.0, 10.0] {
                    let info = price_line(&line(qty, price, promo));
                    assert!(info.savings >= 0.0);
                    let expected = (qty * price - info.total).max(0.0);
                    assert!(
                        (info.savings - expected).abs() < 1e-9,
                        "{promo:?} qty={qty} price={price}"
                    );
                }
            }
        }
    }

    #[test]
    fn summary_rounds_only_at_display() {
        let info = price_line(&line(3.0, 0.333333, Promotion::None));
        // Internal total keeps full precision.
        assert!((info.total - 0.999999).abs() < 1e-9);
        assert!(info.summary.contains("= 1.00 EUR"), "summary: {}", info.summary);
    }

    #[test]
    fn summary_names_applied_promotion_only() {
        let applied = price_line(&line(2.0, 1.0, Promotion::TwoForOne));
        assert!(applied.summary.contains("(2 for 1)"));

        let fallback = price_line(&line(1.0, 1.0, Promotion::TwoForOne));
        assert!(!fallback.summary.contains("(2 for 1)"), "summary: {}", fallback.summary);
    }

    #[test]
    fn engine_trait_matches_free_function() {
        let engine = PromotionPricingEngine;
        let input = line(3.0, 2.0, Promotion::TwoForOne);
        assert_eq!(engine.price(&input), price_line(&input));
    }

    #[test]
    fn quantities_display_without_trailing_zeros() {
        assert_eq!(format_qty(3.0), "3");
        assert_eq!(format_qty(1.5), "1.5");
        assert_eq!(format_qty(0.25), "0.25");
    }
}

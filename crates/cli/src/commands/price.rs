use serde::Serialize;

use trolley_core::config::{AppConfig, LoadOptions};
use trolley_core::pricing::input::parse_real;
use trolley_core::{price_line, LinePricing, PriceInfo, Promotion, UnitType};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct PricePayload {
    price_info: PriceInfo,
}

/// Price one line item. Quantity and unit price accept locale-tolerant
/// strings (`"3,50"`), promotion keys fall back to `none` when unknown.
pub fn run(qty: &str, unit: &str, unit_price: &str, promo: &str, currency: Option<&str>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure("price", "config_validation", error.to_string(), 2),
    };

    let unit = match unit.parse::<UnitType>() {
        Ok(unit) => unit,
        Err(message) => return CommandResult::failure("price", "bad_unit", message, 2),
    };

    let line = LinePricing {
        qty: parse_real(qty, f64::NAN),
        unit,
        unit_price: parse_real(unit_price, f64::NAN),
        promo: Promotion::from_key(promo),
        currency: currency.map(str::to_string).unwrap_or(config.pricing.currency),
    };

    CommandResult::success("price", PricePayload { price_info: price_line(&line) })
}

use serde::Serialize;

use trolley_core::config::{AppConfig, LoadOptions};

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct ConfigPayload {
    pricing: PricingView,
    suggest: SuggestView,
    logging: LoggingView,
}

#[derive(Debug, Serialize)]
struct PricingView {
    currency: String,
}

#[derive(Debug, Serialize)]
struct SuggestView {
    debounce_ms: u64,
    min_query_len: usize,
    cache_capacity: usize,
    frequency_weight: i64,
    recency_weight: i64,
    learning_weight: i64,
}

#[derive(Debug, Serialize)]
struct LoggingView {
    level: String,
    format: String,
}

/// Show the effective configuration after defaults, file, and env layering.
pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("config", "config_validation", error.to_string(), 2)
        }
    };

    CommandResult::success(
        "config",
        ConfigPayload {
            pricing: PricingView { currency: config.pricing.currency },
            suggest: SuggestView {
                debounce_ms: config.suggest.debounce_ms,
                min_query_len: config.suggest.min_query_len,
                cache_capacity: config.suggest.cache_capacity,
                frequency_weight: config.suggest.frequency_weight,
                recency_weight: config.suggest.recency_weight,
                learning_weight: config.suggest.learning_weight,
            },
            logging: LoggingView {
                level: config.logging.level,
                format: format!("{:?}", config.logging.format).to_lowercase(),
            },
        },
    )
}

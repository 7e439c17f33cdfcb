pub mod config;
pub mod domain;
pub mod errors;
pub mod history;
pub mod pricing;
pub mod suggest;
pub mod text;

pub use config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::item::{Item, ItemId, PriceInfo, UnitType};
pub use domain::list::{ArchivedList, ListId, StoreId};
pub use domain::product::AggregatedProductRecord;
pub use errors::{ApplicationError, DomainError};
pub use history::learning::{LearningFeedbackStore, LearningRecord};
pub use history::{aggregate, PurchaseHistory};
pub use pricing::rules::Promotion;
pub use pricing::{price_line, LinePricing, PricingEngine, PromotionPricingEngine};
pub use suggest::{
    RankingOptions, ScoringWeights, SuggestionItem, SuggestionKind, SuggestionRankingEngine,
    SuggestionSources,
};
pub use text::normalize_name;

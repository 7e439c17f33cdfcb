use thiserror::Error;

use crate::config::ConfigError;

/// Failures inside the core domain. Data-quality conditions (bad numeric
/// input, inapplicable promotions, unknown keys) are deliberately *not*
/// errors; they surface as warning fields on the computed values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

use crate::strategy::expr::RuleError;
use thiserror::Error;

/// configuration problems, caught at construction time before a
/// single hand is simulated. nothing here is recoverable mid-run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy tag: {0}")]
    UnknownStrategy(String),

    #[error("unknown betting system tag: {0}")]
    UnknownBetting(String),

    #[error("unknown bonus strategy tag: {0}")]
    UnknownBonus(String),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("min {field} {min} exceeds max {value}")]
    InvertedLimits {
        field: &'static str,
        min: f64,
        value: f64,
    },

    #[error("paytable is missing a ratio for {0}")]
    MissingPayout(String),

    #[error("paytable lists {0} more than once")]
    DuplicatePayout(String),

    #[error("bonus strategy sets both a profit ratio and profit tiers; pick one")]
    AmbiguousBonus,

    #[error(transparent)]
    Rule(#[from] RuleError),
}

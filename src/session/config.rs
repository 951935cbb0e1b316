use crate::errors::ConfigError;
use crate::Chips;
use serde::{Deserialize, Serialize};

/// everything a single session needs to know about money and when
/// to walk away. limits are optional; an absent limit never stops
/// the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub bankroll: Chips,
    pub base_bet: Chips,
    pub min_bet: Chips,
    pub max_bet: Chips,
    pub min_bonus: Chips,
    pub max_bonus: Chips,
    /// stop once profit reaches this amount
    pub win_limit: Option<Chips>,
    /// stop once losses reach this amount, given positive
    pub loss_limit: Option<Chips>,
    pub max_hands: Option<usize>,
    /// cards burned off the top before each deal
    pub burn: usize,
    /// retain the per-hand audit rows in the result
    pub keep_records: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bankroll: 1_000.0,
            base_bet: 10.0,
            min_bet: 5.0,
            max_bet: 500.0,
            min_bonus: 1.0,
            max_bonus: 100.0,
            win_limit: None,
            loss_limit: None,
            max_hands: None,
            burn: 0,
            keep_records: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bankroll <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "bankroll",
                value: self.bankroll,
            });
        }
        if self.base_bet <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "base bet",
                value: self.base_bet,
            });
        }
        if self.min_bet <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "minimum bet",
                value: self.min_bet,
            });
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvertedLimits {
                field: "bet",
                min: self.min_bet,
                value: self.max_bet,
            });
        }
        if self.min_bonus < 0.0 {
            return Err(ConfigError::Negative {
                field: "minimum bonus",
                value: self.min_bonus,
            });
        }
        if self.min_bonus > self.max_bonus {
            return Err(ConfigError::InvertedLimits {
                field: "bonus",
                min: self.min_bonus,
                value: self.max_bonus,
            });
        }
        if let Some(limit) = self.win_limit {
            if limit <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: "win limit",
                    value: limit,
                });
            }
        }
        if let Some(limit) = self.loss_limit {
            if limit <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: "loss limit",
                    value: limit,
                });
            }
        }
        if let Some(0) = self.max_hands {
            return Err(ConfigError::NonPositive {
                field: "hand cap",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_money() {
        let config = SessionConfig {
            bankroll: 0.0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "bankroll", .. })
        ));
        let config = SessionConfig {
            base_bet: -5.0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_limits() {
        let config = SessionConfig {
            min_bet: 100.0,
            max_bet: 10.0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedLimits { field: "bet", .. })
        ));
    }

    #[test]
    fn rejects_degenerate_stops() {
        let config = SessionConfig {
            win_limit: Some(0.0),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
        let config = SessionConfig {
            max_hands: Some(0),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

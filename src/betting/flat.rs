use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// the same wager every hand
#[derive(Debug, Clone, Copy)]
pub struct Flat {
    amount: Chips,
}

impl Flat {
    pub fn new(amount: Chips) -> Result<Self, ConfigError> {
        if amount <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "flat bet",
                value: amount,
            });
        }
        Ok(Self { amount })
    }
}

impl BettingSystem for Flat {
    fn name(&self) -> &str {
        "flat"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(self.amount, context)
    }
    fn record(&mut self, _: Chips) {}
    fn reset(&mut self) {}
}

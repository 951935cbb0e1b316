use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// a fixed fraction of whatever bankroll is available right now.
/// stateless apart from its configuration; shrinks in drawdowns
/// and grows on a run automatically.
#[derive(Debug, Clone, Copy)]
pub struct Proportional {
    fraction: f64,
}

impl Proportional {
    pub fn new(fraction: f64) -> Result<Self, ConfigError> {
        if fraction <= 0.0 || fraction > 1.0 {
            return Err(ConfigError::NonPositive {
                field: "bet fraction",
                value: fraction,
            });
        }
        Ok(Self { fraction })
    }
}

impl BettingSystem for Proportional {
    fn name(&self) -> &str {
        "proportional"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(context.bankroll * self.fraction, context)
    }
    fn record(&mut self, _: Chips) {}
    fn reset(&mut self) {}
}

use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// the anti-martingale: double after every win, reset on a loss
/// or once the target winning streak is banked.
#[derive(Debug, Clone, Copy)]
pub struct Paroli {
    base: Chips,
    current: Chips,
    streak: u32,
    target: u32,
}

impl Paroli {
    pub fn new(base: Chips, target: u32) -> Result<Self, ConfigError> {
        if base <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paroli base",
                value: base,
            });
        }
        if target == 0 {
            return Err(ConfigError::NonPositive {
                field: "paroli target streak",
                value: 0.0,
            });
        }
        Ok(Self {
            base,
            current: base,
            streak: 0,
            target,
        })
    }
}

impl BettingSystem for Paroli {
    fn name(&self) -> &str {
        "paroli"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(self.current, context)
    }
    fn record(&mut self, net: Chips) {
        if net > 0.0 {
            self.streak += 1;
            if self.streak >= self.target {
                self.reset();
            } else {
                self.current *= 2.0;
            }
        } else if net < 0.0 {
            self.reset();
        }
    }
    fn reset(&mut self) {
        self.current = self.base;
        self.streak = 0;
    }
}

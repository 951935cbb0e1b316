use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// unit staircase: one unit up after a loss, one unit down after
/// a win, never below the base.
#[derive(Debug, Clone, Copy)]
pub struct DAlembert {
    base: Chips,
    unit: Chips,
    level: u32,
}

impl DAlembert {
    pub fn new(base: Chips, unit: Chips) -> Result<Self, ConfigError> {
        if base <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "dalembert base",
                value: base,
            });
        }
        if unit <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "dalembert unit",
                value: unit,
            });
        }
        Ok(Self {
            base,
            unit,
            level: 0,
        })
    }
}

impl BettingSystem for DAlembert {
    fn name(&self) -> &str {
        "dalembert"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(self.base + self.unit * self.level as Chips, context)
    }
    fn record(&mut self, net: Chips) {
        if net < 0.0 {
            self.level += 1;
        } else if net > 0.0 {
            self.level = self.level.saturating_sub(1);
        }
    }
    fn reset(&mut self) {
        self.level = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> BetContext {
        BetContext {
            bankroll: 10_000.0,
            min_bet: 1.0,
            max_bet: 1_000.0,
            base_bet: 5.0,
        }
    }

    #[test]
    fn steps_up_and_down() {
        let mut system = DAlembert::new(5.0, 1.0).unwrap();
        assert_eq!(system.bet(&context()), 5.0);
        system.record(-5.0);
        system.record(-6.0);
        assert_eq!(system.bet(&context()), 7.0);
        system.record(7.0);
        assert_eq!(system.bet(&context()), 6.0);
    }

    #[test]
    fn never_descends_below_base() {
        let mut system = DAlembert::new(5.0, 1.0).unwrap();
        system.record(5.0);
        system.record(5.0);
        assert_eq!(system.bet(&context()), 5.0);
    }
}

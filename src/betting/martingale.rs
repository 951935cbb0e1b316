use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// double after every loss, reset to base on any win.
/// a push leaves the progression where it is.
#[derive(Debug, Clone, Copy)]
pub struct Martingale {
    base: Chips,
    current: Chips,
}

impl Martingale {
    pub fn new(base: Chips) -> Result<Self, ConfigError> {
        if base <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "martingale base",
                value: base,
            });
        }
        Ok(Self {
            base,
            current: base,
        })
    }
}

impl BettingSystem for Martingale {
    fn name(&self) -> &str {
        "martingale"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(self.current, context)
    }
    fn record(&mut self, net: Chips) {
        if net < 0.0 {
            self.current *= 2.0;
        } else if net > 0.0 {
            self.current = self.base;
        }
    }
    fn reset(&mut self) {
        self.current = self.base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    fn context() -> BetContext {
        BetContext {
            bankroll: 10_000.0,
            min_bet: 1.0,
            max_bet: 100.0,
            base_bet: 5.0,
        }
    }

    #[test]
    fn doubles_on_losses() {
        let mut system = Martingale::new(5.0).unwrap();
        assert_eq!(system.bet(&context()), 5.0);
        system.record(-5.0);
        assert_eq!(system.bet(&context()), 10.0);
        system.record(-10.0);
        assert_eq!(system.bet(&context()), 20.0);
    }

    #[test]
    fn any_win_resets_to_base() {
        let mut system = Martingale::new(5.0).unwrap();
        system.record(-5.0);
        system.record(-10.0);
        system.record(1.0);
        assert_eq!(system.bet(&context()), 5.0);
    }

    #[test]
    fn push_leaves_progression_alone() {
        let mut system = Martingale::new(5.0).unwrap();
        system.record(-5.0);
        system.record(0.0);
        assert_eq!(system.bet(&context()), 10.0);
    }

    /// over a thousand synthetic outcomes the system resets to
    /// base immediately after every win and never requests a bet
    /// above the configured cap.
    #[test]
    fn reset_and_cap_property() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut system = Martingale::new(5.0).unwrap();
        let context = context();
        for _ in 0..1_000 {
            let bet = system.bet(&context);
            assert!(bet <= context.max_bet);
            assert!(bet >= context.min_bet);
            let won = rng.gen_bool(0.5);
            system.record(if won { bet } else { -bet });
            if won {
                assert_eq!(system.bet(&context), 5.0);
            }
        }
    }
}

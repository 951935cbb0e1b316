use super::system::{clamp, BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::Chips;

/// walk the fibonacci sequence: one step forward after a loss,
/// two steps back after a win.
#[derive(Debug, Clone, Copy)]
pub struct Fibonacci {
    base: Chips,
    index: usize,
}

impl Fibonacci {
    pub fn new(base: Chips) -> Result<Self, ConfigError> {
        if base <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "fibonacci base",
                value: base,
            });
        }
        Ok(Self { base, index: 0 })
    }

    fn multiplier(&self) -> Chips {
        let mut a = 1u64;
        let mut b = 1u64;
        for _ in 0..self.index {
            let next = a + b;
            a = b;
            b = next;
        }
        a as Chips
    }
}

impl BettingSystem for Fibonacci {
    fn name(&self) -> &str {
        "fibonacci"
    }
    fn bet(&mut self, context: &BetContext) -> Chips {
        clamp(self.base * self.multiplier(), context)
    }
    fn record(&mut self, net: Chips) {
        if net < 0.0 {
            self.index += 1;
        } else if net > 0.0 {
            self.index = self.index.saturating_sub(2);
        }
    }
    fn reset(&mut self) {
        self.index = 0;
    }
}

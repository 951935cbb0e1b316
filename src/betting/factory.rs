use super::dalembert::DAlembert;
use super::fibonacci::Fibonacci;
use super::flat::Flat;
use super::martingale::Martingale;
use super::paroli::Paroli;
use super::proportional::Proportional;
use super::system::BettingSystem;
use crate::errors::ConfigError;
use crate::Chips;

/// declarative betting-system selection; every worker builds its
/// own instance from the spec since systems carry mutable state.
#[derive(Debug, Clone)]
pub enum BettingSpec {
    Flat { amount: Chips },
    Proportional { fraction: f64 },
    Martingale { base: Chips },
    Paroli { base: Chips, target: u32 },
    DAlembert { base: Chips, unit: Chips },
    Fibonacci { base: Chips },
}

impl BettingSpec {
    pub fn build(&self) -> Result<Box<dyn BettingSystem>, ConfigError> {
        match self {
            BettingSpec::Flat { amount } => Ok(Box::new(Flat::new(*amount)?)),
            BettingSpec::Proportional { fraction } => {
                Ok(Box::new(Proportional::new(*fraction)?))
            }
            BettingSpec::Martingale { base } => Ok(Box::new(Martingale::new(*base)?)),
            BettingSpec::Paroli { base, target } => Ok(Box::new(Paroli::new(*base, *target)?)),
            BettingSpec::DAlembert { base, unit } => {
                Ok(Box::new(DAlembert::new(*base, *unit)?))
            }
            BettingSpec::Fibonacci { base } => Ok(Box::new(Fibonacci::new(*base)?)),
        }
    }
}

/// registry of betting systems by type tag, sized off the base bet
pub fn factory(tag: &str, base_bet: Chips) -> Result<BettingSpec, ConfigError> {
    match tag {
        "flat" => Ok(BettingSpec::Flat { amount: base_bet }),
        "proportional" => Ok(BettingSpec::Proportional { fraction: 0.01 }),
        "martingale" => Ok(BettingSpec::Martingale { base: base_bet }),
        "paroli" => Ok(BettingSpec::Paroli {
            base: base_bet,
            target: 3,
        }),
        "dalembert" => Ok(BettingSpec::DAlembert {
            base: base_bet,
            unit: base_bet,
        }),
        "fibonacci" => Ok(BettingSpec::Fibonacci { base: base_bet }),
        _ => Err(ConfigError::UnknownBetting(tag.to_string())),
    }
}

use super::baseline::{AlwaysPull, AlwaysRide};
use super::basic::Basic;
use super::bonus::{BonusStrategy, Flat, Never, Ratio, StreakRule, Tier, Tiered};
use super::rules::Rules;
use super::Strategy;
use crate::errors::ConfigError;
use crate::game::decision::Decision;
use crate::Chips;

/// declarative strategy selection, the shape a configuration
/// loader hands us. building is where rule expressions get parsed
/// and rejected, so a spec that builds once will build every time.
#[derive(Debug, Clone)]
pub enum StrategySpec {
    Basic,
    AlwaysRide,
    AlwaysPull,
    Rules {
        name: String,
        first: Vec<(String, Decision)>,
        first_default: Decision,
        second: Vec<(String, Decision)>,
        second_default: Decision,
    },
}

impl StrategySpec {
    pub fn build(&self) -> Result<Box<dyn Strategy>, ConfigError> {
        match self {
            StrategySpec::Basic => Ok(Box::new(Basic)),
            StrategySpec::AlwaysRide => Ok(Box::new(AlwaysRide)),
            StrategySpec::AlwaysPull => Ok(Box::new(AlwaysPull)),
            StrategySpec::Rules {
                name,
                first,
                first_default,
                second,
                second_default,
            } => {
                let first = first
                    .iter()
                    .map(|(s, d)| (s.as_str(), *d))
                    .collect::<Vec<_>>();
                let second = second
                    .iter()
                    .map(|(s, d)| (s.as_str(), *d))
                    .collect::<Vec<_>>();
                let rules =
                    Rules::parse(name, &first, *first_default, &second, *second_default)?;
                Ok(Box::new(rules))
            }
        }
    }
}

/// registry of the built-in strategies by type tag
pub fn factory(tag: &str) -> Result<StrategySpec, ConfigError> {
    match tag {
        "basic" => Ok(StrategySpec::Basic),
        "always-ride" => Ok(StrategySpec::AlwaysRide),
        "always-pull" => Ok(StrategySpec::AlwaysPull),
        _ => Err(ConfigError::UnknownStrategy(tag.to_string())),
    }
}

/// declarative bonus-strategy selection
#[derive(Debug, Clone)]
pub enum BonusSpec {
    Never,
    Flat {
        amount: Chips,
    },
    Ratio {
        ratio: f64,
    },
    Tiered {
        base: Chips,
        profit_ratio: Option<f64>,
        tiers: Vec<Tier>,
        streak: Option<StreakRule>,
    },
}

impl BonusSpec {
    pub fn build(&self) -> Result<Box<dyn BonusStrategy>, ConfigError> {
        match self {
            BonusSpec::Never => Ok(Box::new(Never)),
            BonusSpec::Flat { amount } => Ok(Box::new(Flat::new(*amount)?)),
            BonusSpec::Ratio { ratio } => Ok(Box::new(Ratio::new(*ratio)?)),
            BonusSpec::Tiered {
                base,
                profit_ratio,
                tiers,
                streak,
            } => Ok(Box::new(Tiered::new(
                *base,
                *profit_ratio,
                tiers.clone(),
                *streak,
            )?)),
        }
    }
}

/// registry of the built-in bonus strategies by type tag.
/// parameterized variants are reachable only through BonusSpec.
pub fn bonus_factory(tag: &str, base_bet: Chips) -> Result<BonusSpec, ConfigError> {
    match tag {
        "never" => Ok(BonusSpec::Never),
        "flat" => Ok(BonusSpec::Flat { amount: base_bet }),
        "ratio" => Ok(BonusSpec::Ratio { ratio: 1.0 }),
        _ => Err(ConfigError::UnknownBonus(tag.to_string())),
    }
}

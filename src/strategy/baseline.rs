use super::context::StrategyContext;
use super::Strategy;
use crate::evaluation::analysis::HandAnalysis;
use crate::game::decision::Decision;

/// upper variance bound: every bet stays in play
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysRide;

impl Strategy for AlwaysRide {
    fn name(&self) -> &str {
        "always-ride"
    }
    fn first(&self, _: &HandAnalysis, _: &StrategyContext) -> Decision {
        Decision::Ride
    }
    fn second(&self, _: &HandAnalysis, _: &StrategyContext) -> Decision {
        Decision::Ride
    }
}

/// lower variance bound: only the mandatory third bet plays
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysPull;

impl Strategy for AlwaysPull {
    fn name(&self) -> &str {
        "always-pull"
    }
    fn first(&self, _: &HandAnalysis, _: &StrategyContext) -> Decision {
        Decision::Pull
    }
    fn second(&self, _: &HandAnalysis, _: &StrategyContext) -> Decision {
        Decision::Pull
    }
}

use crate::Chips;

/// immutable snapshot handed to a strategy for one decision.
/// strategies never retain it.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext {
    pub bankroll: Chips,
    /// session profit so far, signed
    pub profit: Chips,
    /// consecutive wins (positive) or losses (negative)
    pub streak: i32,
    pub hands: usize,
    pub base_bet: Chips,
    pub min_bet: Chips,
    pub max_bet: Chips,
}

/// immutable snapshot handed to a bonus strategy before the deal
#[derive(Debug, Clone, Copy)]
pub struct BonusContext {
    pub bankroll: Chips,
    pub profit: Chips,
    pub streak: i32,
    pub hands: usize,
    pub base_bet: Chips,
    pub min_bonus: Chips,
    pub max_bonus: Chips,
}

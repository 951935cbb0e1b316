use crate::Chips;

/// what a betting system may see when sizing the next wager.
/// bankroll here is the amount actually available for this one
/// bet; a system must never request more.
#[derive(Debug, Clone, Copy)]
pub struct BetContext {
    pub bankroll: Chips,
    pub min_bet: Chips,
    pub max_bet: Chips,
    pub base_bet: Chips,
}

/// a bet-sizing policy with internal progression state. unlike
/// strategies these are stateful: record() moves the progression
/// along and reset() returns it to the starting position.
pub trait BettingSystem {
    fn name(&self) -> &str;
    /// size the next per-spot wager
    fn bet(&mut self, context: &BetContext) -> Chips;
    /// feed back the net result of the last hand
    fn record(&mut self, net: Chips);
    /// return the progression to its starting position
    fn reset(&mut self);
}

/// clamp into the table limits and the available bankroll
pub(crate) fn clamp(amount: Chips, context: &BetContext) -> Chips {
    amount
        .max(context.min_bet)
        .min(context.max_bet)
        .min(context.bankroll)
}

use super::decision::Decision;
use crate::cards::card::Card;
use crate::evaluation::ranking::Ranking;
use crate::evaluation::trio::TrioRanking;
use crate::Chips;
use serde::Serialize;

/// per-hand audit row. one of these is produced for every hand
/// played and never mutated afterwards; export layers choose how
/// to serialize it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandRecord {
    pub player: [Card; 3],
    pub community: [Card; 2],
    pub first: Decision,
    pub second: Decision,
    pub ranking: Ranking,
    pub bonus_ranking: Option<TrioRanking>,
    /// the per-spot base wager
    pub base_bet: Chips,
    pub bonus_bet: Chips,
    /// win/loss net of the main wagers: payouts on the bets left
    /// riding, minus the stakes of riding bets that lost
    pub main_net: Chips,
    pub bonus_net: Chips,
    pub net: Chips,
    pub bankroll_after: Chips,
}

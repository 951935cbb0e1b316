use crate::evaluation::ranking::Category;
use crate::game::record::HandRecord;
use crate::Chips;
use serde::Serialize;
use std::fmt;

/// which stop condition ended the session. conditions are checked
/// in a fixed order, so exactly one reason is ever recorded even
/// when several are satisfied by the same hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    WinLimit,
    LossLimit,
    MaxHands,
    InsufficientFunds,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::WinLimit => write!(f, "win limit"),
            StopReason::LossLimit => write!(f, "loss limit"),
            StopReason::MaxHands => write!(f, "hand cap"),
            StopReason::InsufficientFunds => write!(f, "insufficient funds"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    pub fn from_profit(profit: Chips) -> Self {
        if profit > 0.0 {
            Outcome::Win
        } else if profit < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Push
        }
    }
}

/// what one finished session looked like
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResult {
    pub id: usize,
    pub seed: u64,
    pub hands: usize,
    pub profit: Chips,
    pub final_balance: Chips,
    pub peak_balance: Chips,
    pub max_drawdown: Chips,
    pub max_drawdown_fraction: f64,
    pub stop: StopReason,
    pub outcome: Outcome,
    /// hands landed per five-card category, indexed by `Category`
    pub frequencies: [u64; Category::COUNT],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<HandRecord>>,
}

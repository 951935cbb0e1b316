use super::bankroll::Bankroll;
use super::config::SessionConfig;
use super::result::{Outcome, SessionResult, StopReason};
use crate::betting::system::{BetContext, BettingSystem};
use crate::errors::ConfigError;
use crate::evaluation::ranking::Category;
use crate::game::engine::Engine;
use crate::game::paytable::{BonusPaytable, Paytable};
use crate::game::state::GameError;
use crate::strategy::bonus::BonusStrategy;
use crate::strategy::context::{BonusContext, StrategyContext};
use crate::strategy::Strategy;
use rand::Rng;

/// one player, one bankroll, one run of hands until a stop
/// condition fires. consumes its strategy and betting system since
/// both carry per-session state.
pub struct Session {
    config: SessionConfig,
    engine: Engine,
    strategy: Box<dyn Strategy>,
    betting: Box<dyn BettingSystem>,
    bonus: Box<dyn BonusStrategy>,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        strategy: Box<dyn Strategy>,
        betting: Box<dyn BettingSystem>,
        bonus: Box<dyn BonusStrategy>,
    ) -> Result<Self, ConfigError> {
        Self::with_paytables(
            config,
            Paytable::standard(),
            BonusPaytable::standard(),
            strategy,
            betting,
            bonus,
        )
    }

    /// a session settled under caller-supplied paytables; new() is
    /// this with the standard tables.
    pub fn with_paytables(
        config: SessionConfig,
        paytable: Paytable,
        bonus_paytable: BonusPaytable,
        strategy: Box<dyn Strategy>,
        betting: Box<dyn BettingSystem>,
        bonus: Box<dyn BonusStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = Engine::new(paytable, bonus_paytable, config.burn);
        Ok(Self {
            config,
            engine,
            strategy,
            betting,
            bonus,
        })
    }

    /// play until a stop condition fires. funds for three minimum
    /// wagers are required before every deal; after every hand the
    /// limits are checked in order win, loss, hand cap, and the
    /// first satisfied one is recorded.
    pub fn run<R: Rng>(
        &mut self,
        rng: &mut R,
        id: usize,
        seed: u64,
    ) -> Result<SessionResult, GameError> {
        let mut bankroll = Bankroll::new(self.config.bankroll);
        let mut streak = 0i32;
        let mut hands = 0usize;
        let mut frequencies = [0u64; Category::COUNT];
        let mut records = self.config.keep_records.then(Vec::new);
        self.betting.reset();

        let stop = loop {
            if bankroll.balance() < self.config.min_bet * 3.0 {
                break StopReason::InsufficientFunds;
            }
            let base_bet = self.betting.bet(&BetContext {
                bankroll: bankroll.balance() / 3.0,
                min_bet: self.config.min_bet,
                max_bet: self.config.max_bet,
                base_bet: self.config.base_bet,
            });
            let bonus_bet = self.bonus.bet(&BonusContext {
                bankroll: bankroll.balance() - base_bet * 3.0,
                profit: bankroll.profit(),
                streak,
                hands,
                base_bet,
                min_bonus: self.config.min_bonus,
                max_bonus: self.config.max_bonus,
            });
            let context = StrategyContext {
                bankroll: bankroll.balance(),
                profit: bankroll.profit(),
                streak,
                hands,
                base_bet,
                min_bet: self.config.min_bet,
                max_bet: self.config.max_bet,
            };
            let record = self.engine.play(
                rng,
                self.strategy.as_ref(),
                &context,
                base_bet,
                bonus_bet,
            )?;

            bankroll.apply(record.net);
            self.betting.record(record.net);
            streak = if record.net > 0.0 {
                streak.max(0) + 1
            } else if record.net < 0.0 {
                streak.min(0) - 1
            } else {
                streak
            };
            hands += 1;
            frequencies[record.ranking.category().index()] += 1;
            if let Some(records) = records.as_mut() {
                records.push(record);
            }

            if let Some(limit) = self.config.win_limit {
                if bankroll.profit() >= limit {
                    break StopReason::WinLimit;
                }
            }
            if let Some(limit) = self.config.loss_limit {
                if bankroll.profit() <= -limit {
                    break StopReason::LossLimit;
                }
            }
            if let Some(cap) = self.config.max_hands {
                if hands >= cap {
                    break StopReason::MaxHands;
                }
            }
        };

        let profit = bankroll.profit();
        Ok(SessionResult {
            id,
            seed,
            hands,
            profit,
            final_balance: bankroll.balance(),
            peak_balance: bankroll.peak(),
            max_drawdown: bankroll.max_drawdown(),
            max_drawdown_fraction: bankroll.max_drawdown_fraction(),
            stop,
            outcome: Outcome::from_profit(profit),
            frequencies,
            records,
        })
    }
}

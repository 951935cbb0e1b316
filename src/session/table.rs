use super::bankroll::Bankroll;
use super::config::SessionConfig;
use super::result::{Outcome, SessionResult, StopReason};
use crate::betting::system::{BetContext, BettingSystem};
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::errors::ConfigError;
use crate::evaluation::ranking::Category;
use crate::game::engine::play_dealt;
use crate::game::paytable::{BonusPaytable, Paytable};
use crate::game::record::HandRecord;
use crate::game::state::GameError;
use crate::strategy::bonus::BonusStrategy;
use crate::strategy::context::{BonusContext, StrategyContext};
use crate::strategy::Strategy;
use rand::Rng;

/// one chair at a shared table: its own money, its own play style,
/// its own walk-away rules.
pub struct Seat {
    pub config: SessionConfig,
    pub strategy: Box<dyn Strategy>,
    pub betting: Box<dyn BettingSystem>,
    pub bonus: Box<dyn BonusStrategy>,
}

struct SeatState {
    bankroll: Bankroll,
    streak: i32,
    hands: usize,
    frequencies: [u64; Category::COUNT],
    records: Option<Vec<HandRecord>>,
    stop: Option<StopReason>,
}

/// several seats against one dealer. every round shares one
/// freshly shuffled deck and one pair of community cards; each
/// active seat receives its own three cards and settles on its own
/// bankroll. a stopped seat sits out for good while the rest keep
/// playing.
pub struct Table {
    seats: Vec<Seat>,
    paytable: Paytable,
    bonus_paytable: BonusPaytable,
    deck: Deck,
    burn: usize,
}

impl Table {
    pub fn new(seats: Vec<Seat>, burn: usize) -> Result<Self, ConfigError> {
        Self::with_paytables(seats, Paytable::standard(), BonusPaytable::standard(), burn)
    }

    /// a table settled under caller-supplied paytables
    pub fn with_paytables(
        seats: Vec<Seat>,
        paytable: Paytable,
        bonus_paytable: BonusPaytable,
        burn: usize,
    ) -> Result<Self, ConfigError> {
        for seat in &seats {
            seat.config.validate()?;
        }
        Ok(Self {
            seats,
            paytable,
            bonus_paytable,
            deck: Deck::new(),
            burn,
        })
    }

    /// play rounds until every seat has stopped. yields one result
    /// per seat, in seat order.
    pub fn run<R: Rng>(
        &mut self,
        rng: &mut R,
        seed: u64,
    ) -> Result<Vec<SessionResult>, GameError> {
        let mut states = self
            .seats
            .iter_mut()
            .map(|seat| {
                seat.betting.reset();
                SeatState {
                    bankroll: Bankroll::new(seat.config.bankroll),
                    streak: 0,
                    hands: 0,
                    frequencies: [0u64; Category::COUNT],
                    records: seat.config.keep_records.then(Vec::new),
                    stop: None,
                }
            })
            .collect::<Vec<_>>();

        loop {
            for (seat, state) in self.seats.iter().zip(states.iter_mut()) {
                if state.stop.is_none()
                    && state.bankroll.balance() < seat.config.min_bet * 3.0
                {
                    state.stop = Some(StopReason::InsufficientFunds);
                }
            }
            let active = (0..self.seats.len())
                .filter(|&i| states[i].stop.is_none())
                .collect::<Vec<_>>();
            if active.is_empty() {
                break;
            }

            self.deck.reset();
            self.deck.burn(self.burn, rng);
            let players = active
                .iter()
                .map(|_| {
                    [
                        self.deck.draw(rng),
                        self.deck.draw(rng),
                        self.deck.draw(rng),
                    ]
                })
                .collect::<Vec<[Card; 3]>>();
            let community = [self.deck.draw(rng), self.deck.draw(rng)];

            for (player, &i) in players.into_iter().zip(active.iter()) {
                let seat = &mut self.seats[i];
                let state = &mut states[i];
                let base_bet = seat.betting.bet(&BetContext {
                    bankroll: state.bankroll.balance() / 3.0,
                    min_bet: seat.config.min_bet,
                    max_bet: seat.config.max_bet,
                    base_bet: seat.config.base_bet,
                });
                let bonus_bet = seat.bonus.bet(&BonusContext {
                    bankroll: state.bankroll.balance() - base_bet * 3.0,
                    profit: state.bankroll.profit(),
                    streak: state.streak,
                    hands: state.hands,
                    base_bet,
                    min_bonus: seat.config.min_bonus,
                    max_bonus: seat.config.max_bonus,
                });
                let context = StrategyContext {
                    bankroll: state.bankroll.balance(),
                    profit: state.bankroll.profit(),
                    streak: state.streak,
                    hands: state.hands,
                    base_bet,
                    min_bet: seat.config.min_bet,
                    max_bet: seat.config.max_bet,
                };
                let record = play_dealt(
                    &self.paytable,
                    &self.bonus_paytable,
                    seat.strategy.as_ref(),
                    &context,
                    player,
                    community,
                    base_bet,
                    bonus_bet,
                )?;

                state.bankroll.apply(record.net);
                seat.betting.record(record.net);
                state.streak = if record.net > 0.0 {
                    state.streak.max(0) + 1
                } else if record.net < 0.0 {
                    state.streak.min(0) - 1
                } else {
                    state.streak
                };
                state.hands += 1;
                state.frequencies[record.ranking.category().index()] += 1;
                if let Some(records) = state.records.as_mut() {
                    records.push(record);
                }

                if let Some(limit) = seat.config.win_limit {
                    if state.bankroll.profit() >= limit {
                        state.stop = Some(StopReason::WinLimit);
                        continue;
                    }
                }
                if let Some(limit) = seat.config.loss_limit {
                    if state.bankroll.profit() <= -limit {
                        state.stop = Some(StopReason::LossLimit);
                        continue;
                    }
                }
                if let Some(cap) = seat.config.max_hands {
                    if state.hands >= cap {
                        state.stop = Some(StopReason::MaxHands);
                    }
                }
            }
        }

        Ok(states
            .into_iter()
            .enumerate()
            .map(|(id, state)| {
                let profit = state.bankroll.profit();
                SessionResult {
                    id,
                    seed,
                    hands: state.hands,
                    profit,
                    final_balance: state.bankroll.balance(),
                    peak_balance: state.bankroll.peak(),
                    max_drawdown: state.bankroll.max_drawdown(),
                    max_drawdown_fraction: state.bankroll.max_drawdown_fraction(),
                    stop: state.stop.unwrap_or(StopReason::InsufficientFunds),
                    outcome: Outcome::from_profit(profit),
                    frequencies: state.frequencies,
                    records: state.records,
                }
            })
            .collect())
    }
}

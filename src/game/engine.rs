use super::paytable::{BonusPaytable, Paytable};
use super::record::HandRecord;
use super::state::{GameError, HandState};
use crate::cards::deck::Deck;
use crate::evaluation::analysis::HandAnalysis;
use crate::evaluation::evaluator::evaluate;
use crate::evaluation::trio::evaluate_trio;
use crate::cards::card::Card;
use crate::strategy::context::StrategyContext;
use crate::strategy::Strategy;
use crate::Chips;
use rand::Rng;

/// per-hand orchestration: reset and burn the deck, deal, consult
/// the strategy at both decision points with a fresh analysis,
/// reveal, evaluate, settle. the bonus wager rides only on the
/// initial three cards and settles independently of the main game.
pub struct Engine {
    deck: Deck,
    paytable: Paytable,
    bonus_paytable: BonusPaytable,
    burn: usize,
}

impl Engine {
    pub fn new(paytable: Paytable, bonus_paytable: BonusPaytable, burn: usize) -> Self {
        Self {
            deck: Deck::new(),
            paytable,
            bonus_paytable,
            burn,
        }
    }

    /// play one complete hand. net for every wager is its payout
    /// when the ratio pays, otherwise the loss of its stake.
    pub fn play<R: Rng>(
        &mut self,
        rng: &mut R,
        strategy: &dyn Strategy,
        context: &StrategyContext,
        base_bet: Chips,
        bonus_bet: Chips,
    ) -> Result<HandRecord, GameError> {
        self.deck.reset();
        self.deck.burn(self.burn, rng);
        let player = [
            self.deck.draw(rng),
            self.deck.draw(rng),
            self.deck.draw(rng),
        ];
        let community = [self.deck.draw(rng), self.deck.draw(rng)];
        play_dealt(
            &self.paytable,
            &self.bonus_paytable,
            strategy,
            context,
            player,
            community,
            base_bet,
            bonus_bet,
        )
    }
}

/// drive one already-dealt hand through both decisions and settle
/// it. shared with the multi-seat table, where several hands share
/// one deck and one pair of community cards.
#[allow(clippy::too_many_arguments)]
pub(crate) fn play_dealt(
    paytable: &Paytable,
    bonus_paytable: &BonusPaytable,
    strategy: &dyn Strategy,
    context: &StrategyContext,
    player: [Card; 3],
    community: [Card; 2],
    base_bet: Chips,
    bonus_bet: Chips,
) -> Result<HandRecord, GameError> {
    let mut hand = HandState::deal(player, community);

    let analysis = HandAnalysis::from(hand.visible().as_slice());
    let first = strategy.first(&analysis, context);
    hand.decide_first(first)?;
    hand.reveal_first()?;

    let analysis = HandAnalysis::from(hand.visible().as_slice());
    let second = strategy.second(&analysis, context);
    hand.decide_second(second)?;
    hand.reveal_second()?;

    let five = hand.resolve()?;
    let strength = evaluate(&five);
    let ratio = paytable.ratio(strength.ranking().category());
    let per_bet = if ratio > 0.0 {
        ratio * base_bet
    } else {
        -base_bet
    };
    let main_net = per_bet * hand.active_bets() as Chips;

    let bonus_ranking = (bonus_bet > 0.0).then(|| evaluate_trio(&player));
    let bonus_net = match bonus_ranking {
        None => 0.0,
        Some(trio) => {
            let ratio = bonus_paytable.ratio(trio.category());
            if ratio > 0.0 {
                ratio * bonus_bet
            } else {
                -bonus_bet
            }
        }
    };

    let net = main_net + bonus_net;
    Ok(HandRecord {
        player,
        community,
        first,
        second,
        ranking: strength.ranking(),
        bonus_ranking,
        base_bet,
        bonus_bet,
        main_net,
        bonus_net,
        net,
        bankroll_after: context.bankroll + net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::decision::Decision;
    use crate::strategy::baseline::{AlwaysPull, AlwaysRide};
    use crate::strategy::basic::Basic;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn engine(burn: usize) -> Engine {
        Engine::new(Paytable::standard(), BonusPaytable::standard(), burn)
    }

    fn context() -> StrategyContext {
        StrategyContext {
            bankroll: 500.0,
            profit: 0.0,
            streak: 0,
            hands: 0,
            base_bet: 5.0,
            min_bet: 5.0,
            max_bet: 100.0,
        }
    }

    #[test]
    fn always_pull_risks_one_bet() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut engine = engine(0);
        for _ in 0..200 {
            let record = engine
                .play(rng, &AlwaysPull, &context(), 5.0, 0.0)
                .unwrap();
            assert_eq!(record.first, Decision::Pull);
            assert_eq!(record.second, Decision::Pull);
            if record.ranking.qualifies() {
                assert!(record.main_net > 0.0);
            } else {
                assert_eq!(record.main_net, -5.0);
            }
        }
    }

    #[test]
    fn always_ride_risks_three_bets() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut engine = engine(0);
        for _ in 0..200 {
            let record = engine.play(rng, &AlwaysRide, &context(), 5.0, 0.0).unwrap();
            if !record.ranking.qualifies() {
                assert_eq!(record.main_net, -15.0);
            }
        }
    }

    #[test]
    fn bonus_settles_independently() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut engine = engine(0);
        for _ in 0..200 {
            let record = engine.play(rng, &Basic, &context(), 5.0, 1.0).unwrap();
            let trio = record.bonus_ranking.expect("bonus was wagered");
            let ratio = BonusPaytable::standard().ratio(trio.category());
            if ratio > 0.0 {
                assert_eq!(record.bonus_net, ratio * 1.0);
            } else {
                assert_eq!(record.bonus_net, -1.0);
            }
            assert_eq!(record.net, record.main_net + record.bonus_net);
        }
    }

    #[test]
    fn no_bonus_bet_no_bonus_evaluation() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let mut engine = engine(0);
        let record = engine.play(rng, &Basic, &context(), 5.0, 0.0).unwrap();
        assert!(record.bonus_ranking.is_none());
        assert_eq!(record.bonus_net, 0.0);
    }

    #[test]
    fn burn_changes_the_deal_but_not_determinism() {
        let deal = |burn: usize, seed: u64| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut engine = engine(burn);
            engine.play(rng, &Basic, &context(), 5.0, 0.0).unwrap()
        };
        assert_eq!(deal(2, 9).player, deal(2, 9).player);
        assert_ne!(deal(0, 9).player, deal(2, 9).player);
    }
}

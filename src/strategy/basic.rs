use super::context::StrategyContext;
use super::Strategy;
use crate::cards::rank::Rank;
use crate::evaluation::analysis::{HandAnalysis, StraightDraw};
use crate::game::decision::Decision;

/// the mathematically derived ride/pull tables.
///
/// first decision (three cards), ride with:
///   - any made payout (tens-or-better pair or trips)
///   - three to a royal (suited, nothing under a ten)
///   - three suited in a row, 3-4-5 or higher
///   - three to a straight flush spread four with one high card
///   - three to a straight flush spread five with two high cards
///
/// second decision (four cards), ride with:
///   - any made payout
///   - four of one suit
///   - four to an open-ended straight
///   - four to an inside straight when all four are high
#[derive(Debug, Default, Clone, Copy)]
pub struct Basic;

impl Strategy for Basic {
    fn name(&self) -> &str {
        "basic"
    }

    fn first(&self, a: &HandAnalysis, _: &StrategyContext) -> Decision {
        let suited_run = a.straight_flush_draw && a.span == 2 && a.min_rank >= Rank::Three;
        let spread_four = a.straight_flush_draw && a.span == 3 && a.high_cards >= 1;
        let spread_five = a.straight_flush_draw && a.span == 4 && a.high_cards >= 2;
        if a.paying || a.royal_draw || suited_run || spread_four || spread_five {
            Decision::Ride
        } else {
            Decision::Pull
        }
    }

    fn second(&self, a: &HandAnalysis, _: &StrategyContext) -> Decision {
        let open = a.straight_draw == StraightDraw::Open;
        let inside_high = a.straight_draw == StraightDraw::Inside && a.high_cards == 4;
        if a.paying || a.flush_draw || open || inside_high {
            Decision::Ride
        } else {
            Decision::Pull
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;
    use crate::Chips;

    fn ctx() -> StrategyContext {
        StrategyContext {
            bankroll: 500.0,
            profit: 0.0,
            streak: 0,
            hands: 0,
            base_bet: 5.0,
            min_bet: 5.0,
            max_bet: 100.0 as Chips,
        }
    }

    fn analyze(s: &str) -> HandAnalysis {
        let cards = Vec::<Card>::from(Hand::from(s));
        HandAnalysis::from(cards.as_slice())
    }

    #[test]
    fn rides_made_hands() {
        assert_eq!(Basic.first(&analyze("Ts Th 4d"), &ctx()), Decision::Ride);
        assert_eq!(Basic.first(&analyze("7s 7h 7d"), &ctx()), Decision::Ride);
    }

    #[test]
    fn pulls_low_pair() {
        assert_eq!(Basic.first(&analyze("9s 9h 4d"), &ctx()), Decision::Pull);
    }

    #[test]
    fn rides_royal_draw() {
        assert_eq!(Basic.first(&analyze("Ts Js Qs"), &ctx()), Decision::Ride);
    }

    #[test]
    fn rides_suited_run_above_two() {
        assert_eq!(Basic.first(&analyze("3h 4h 5h"), &ctx()), Decision::Ride);
    }

    #[test]
    fn pulls_lowest_suited_runs() {
        // 2-3-4 and A-2-3 are the two suited runs the tables exclude
        assert_eq!(Basic.first(&analyze("2h 3h 4h"), &ctx()), Decision::Pull);
        assert_eq!(Basic.first(&analyze("Ah 2h 3h"), &ctx()), Decision::Pull);
    }

    #[test]
    fn rides_spread_four_with_high_card() {
        // 9-T-Q suited: spread four, one gap, one high card
        assert_eq!(Basic.first(&analyze("9s Ts Qs"), &ctx()), Decision::Ride);
    }

    #[test]
    fn pulls_spread_four_without_high_card() {
        assert_eq!(Basic.first(&analyze("4s 5s 7s"), &ctx()), Decision::Pull);
    }

    #[test]
    fn rides_spread_five_with_two_high_cards() {
        // T-J-A suited? that's a royal draw. T-Q-A suited likewise.
        // 9-J-K suited: spread five, two high cards
        assert_eq!(Basic.first(&analyze("9s Js Ks"), &ctx()), Decision::Ride);
    }

    #[test]
    fn pulls_unsuited_junk() {
        assert_eq!(Basic.first(&analyze("2s 7h Qd"), &ctx()), Decision::Pull);
    }

    #[test]
    fn second_rides_flush_draw() {
        assert_eq!(
            Basic.second(&analyze("2h 7h 9h Kh"), &ctx()),
            Decision::Ride
        );
    }

    #[test]
    fn second_rides_open_straight() {
        assert_eq!(
            Basic.second(&analyze("5s 6h 7d 8c"), &ctx()),
            Decision::Ride
        );
    }

    #[test]
    fn second_pulls_low_gutshot() {
        assert_eq!(
            Basic.second(&analyze("5s 6h 8d 9c"), &ctx()),
            Decision::Pull
        );
    }

    #[test]
    fn second_rides_high_gutshot() {
        // J-Q-K-A: every card high, inside draw
        assert_eq!(
            Basic.second(&analyze("Js Qh Kd Ac"), &ctx()),
            Decision::Ride
        );
    }

    #[test]
    fn second_pulls_low_pair() {
        assert_eq!(
            Basic.second(&analyze("9s 9h 4d 2c"), &ctx()),
            Decision::Pull
        );
    }
}

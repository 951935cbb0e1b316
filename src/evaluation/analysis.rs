use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use serde::Serialize;

/// shape of a straight draw. open draws can complete on either
/// end; inside draws (gutshots and ace-pinned runs) on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StraightDraw {
    None,
    Inside,
    Open,
}

/// draw-potential snapshot of a partial hand (3 or 4 visible
/// cards), recomputed fresh at each decision point. this is the
/// entire vocabulary a strategy gets to speak: made-hand flags
/// here must agree exactly with what the evaluators would say
/// about the same cards, or strategy and settlement drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAnalysis {
    /// number of visible cards, 3 or 4
    pub cards: usize,
    /// cards ranked ten through ace
    pub high_cards: usize,
    /// largest same-suit count
    pub max_suited: usize,
    /// every visible card shares one suit
    pub flush_draw: bool,
    pub straight_draw: StraightDraw,
    /// flush draw that is also some straight draw
    pub straight_flush_draw: bool,
    /// suited and nothing below a ten
    pub royal_draw: bool,
    /// distinct-rank spread, minimized over ace-high/ace-low readings
    pub span: usize,
    /// lowest rank with the ace always read high
    pub min_rank: Rank,
    /// highest paired rank, if any
    pub pair_rank: Option<Rank>,
    /// already locked in a main-game payout regardless of the
    /// cards to come: pair of tens+, two pair, trips or quads
    pub paying: bool,
}

impl From<&[Card]> for HandAnalysis {
    fn from(cards: &[Card]) -> Self {
        assert!(
            cards.len() == 3 || cards.len() == 4,
            "hand analysis requires 3 or 4 cards, got {}",
            cards.len()
        );
        let mut rank_counts = [0u8; Rank::COUNT];
        let mut suit_counts = [0u8; Suit::COUNT];
        for card in cards {
            rank_counts[u8::from(card.rank()) as usize] += 1;
            suit_counts[u8::from(card.suit()) as usize] += 1;
        }
        let high_cards = cards.iter().filter(|c| c.rank().is_high()).count();
        let max_suited = suit_counts.iter().copied().max().unwrap_or(0) as usize;
        let flush_draw = max_suited == cards.len();
        let pair_rank = (0..Rank::COUNT as u8)
            .rev()
            .find(|&i| rank_counts[i as usize] >= 2)
            .map(Rank::from);
        let pairs = rank_counts.iter().filter(|&&n| n >= 2).count();
        let trips = rank_counts.iter().any(|&n| n >= 3);
        let paying = trips || pairs >= 2 || pair_rank.map(|r| r.is_high()).unwrap_or(false);
        let distinct = (0..Rank::COUNT as u8)
            .filter(|&i| rank_counts[i as usize] > 0)
            .map(|i| i as i8)
            .collect::<Vec<i8>>();
        let straight_draw = if pair_rank.is_some() {
            StraightDraw::None
        } else {
            classify_draw(&distinct)
        };
        let span = minimal_span(&distinct);
        let min_rank = Rank::from(distinct[0] as u8);
        Self {
            cards: cards.len(),
            high_cards,
            max_suited,
            flush_draw,
            straight_draw,
            straight_flush_draw: flush_draw && straight_draw != StraightDraw::None,
            royal_draw: flush_draw && high_cards == cards.len(),
            span,
            min_rank,
            pair_rank,
            paying,
        }
    }
}

/// classify over both ace readings and keep the better shape
fn classify_draw(distinct: &[i8]) -> StraightDraw {
    readings(distinct)
        .into_iter()
        .map(|r| classify_reading(&r))
        .max()
        .unwrap_or(StraightDraw::None)
}

/// the distinct sorted rank indices, once with the ace high (12)
/// and once low (-1) when an ace is present
fn readings(distinct: &[i8]) -> Vec<Vec<i8>> {
    let high = distinct.to_vec();
    if distinct.contains(&(Rank::COUNT as i8 - 1)) {
        let mut low = vec![-1i8];
        low.extend(distinct.iter().copied().filter(|&i| i != Rank::COUNT as i8 - 1));
        vec![high, low]
    } else {
        vec![high]
    }
}

/// sorted distinct indices on the -1..=12 scale. a contiguous run
/// that can grow on both ends is open; anything else that still
/// fits inside some five-rank window is inside.
fn classify_reading(indices: &[i8]) -> StraightDraw {
    let n = indices.len() as i8;
    let lo = indices[0];
    let hi = indices[indices.len() - 1];
    let span = hi - lo;
    if span > 4 {
        StraightDraw::None
    } else if span == n - 1 {
        let below = lo > -1;
        let above = hi < Rank::COUNT as i8 - 1;
        if below && above {
            StraightDraw::Open
        } else {
            StraightDraw::Inside
        }
    } else {
        StraightDraw::Inside
    }
}

fn minimal_span(distinct: &[i8]) -> usize {
    readings(distinct)
        .into_iter()
        .map(|r| (r[r.len() - 1] - r[0]) as usize)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn analyze(s: &str) -> HandAnalysis {
        let cards = Vec::<Card>::from(Hand::from(s));
        HandAnalysis::from(cards.as_slice())
    }

    #[test]
    fn royal_draw() {
        let a = analyze("Ts Js Qs");
        assert!(a.royal_draw);
        assert!(a.flush_draw);
        assert!(a.straight_flush_draw);
        assert_eq!(a.straight_draw, StraightDraw::Open);
        assert_eq!(a.high_cards, 3);
    }

    #[test]
    fn paying_pair_of_tens() {
        let a = analyze("Ts Th 4d");
        assert!(a.paying);
        assert_eq!(a.pair_rank, Some(Rank::Ten));
        assert_eq!(a.straight_draw, StraightDraw::None);
    }

    #[test]
    fn low_pair_not_paying() {
        let a = analyze("9s 9h 4d");
        assert!(!a.paying);
        assert_eq!(a.pair_rank, Some(Rank::Nine));
    }

    #[test]
    fn two_low_pair_pays() {
        let a = analyze("9s 9h 4d 4c");
        assert!(a.paying);
        assert_eq!(a.pair_rank, Some(Rank::Nine));
    }

    #[test]
    fn trips_pay() {
        assert!(analyze("2s 2h 2d").paying);
    }

    #[test]
    fn open_straight_draw() {
        let a = analyze("5s 6h 7d 8c");
        assert_eq!(a.straight_draw, StraightDraw::Open);
        assert_eq!(a.span, 3);
    }

    #[test]
    fn inside_straight_draw() {
        let a = analyze("5s 6h 8d 9c");
        assert_eq!(a.straight_draw, StraightDraw::Inside);
        assert_eq!(a.span, 4);
    }

    #[test]
    fn broadway_run_is_inside() {
        // JQKA completes only with a ten
        let a = analyze("Js Qh Kd Ac");
        assert_eq!(a.straight_draw, StraightDraw::Inside);
    }

    #[test]
    fn wheel_run_is_inside() {
        // A23 grows only upward
        let a = analyze("As 2h 3d");
        assert_eq!(a.straight_draw, StraightDraw::Inside);
        assert_eq!(a.span, 2);
        assert_eq!(a.min_rank, Rank::Two);
    }

    #[test]
    fn low_run_is_open() {
        // 234 can catch an ace below or anything above
        let a = analyze("2s 3h 4d");
        assert_eq!(a.straight_draw, StraightDraw::Open);
        assert_eq!(a.min_rank, Rank::Two);
    }

    #[test]
    fn no_draw() {
        let a = analyze("2s 7h Qd");
        assert_eq!(a.straight_draw, StraightDraw::None);
        assert!(!a.straight_flush_draw);
    }

    #[test]
    fn suited_gap_is_straight_flush_draw() {
        let a = analyze("5h 6h 8h");
        assert!(a.flush_draw);
        assert!(a.straight_flush_draw);
        assert_eq!(a.straight_draw, StraightDraw::Inside);
        assert_eq!(a.span, 3);
    }

    #[test]
    #[should_panic]
    fn five_cards_rejected() {
        analyze("2s 3s 4s 5s 6s");
    }

    /// over every 3-card combination, the paying flag agrees with
    /// the three-card evaluator's made-hand classification.
    #[test]
    fn paying_agrees_with_trio_evaluator() {
        use crate::evaluation::trio::{evaluate_trio, TrioRanking};
        use itertools::Itertools;
        for combo in (0u8..52).combinations(3) {
            let cards = combo.into_iter().map(Card::from).collect::<Vec<Card>>();
            let made = match evaluate_trio(&cards) {
                TrioRanking::Pair(r) => r.is_high(),
                TrioRanking::ThreeOAK(_) => true,
                _ => false,
            };
            let paying = HandAnalysis::from(cards.as_slice()).paying;
            assert_eq!(paying, made, "disagreement on {:?}", cards);
        }
    }

    /// over every 4-card combination, paying means exactly that
    /// every possible fifth card completes a qualifying hand.
    #[test]
    fn paying_agrees_with_five_card_evaluator() {
        use crate::evaluation::evaluator::evaluate;
        use itertools::Itertools;
        for combo in (0u8..52).combinations(4) {
            let cards = combo.into_iter().map(Card::from).collect::<Vec<Card>>();
            let paying = HandAnalysis::from(cards.as_slice()).paying;
            let held = Hand::from(cards.as_slice());
            let guaranteed = Hand::full()
                .filter(|c| !held.contains(*c))
                .all(|fifth| {
                    let mut five = cards.clone();
                    five.push(fifth);
                    evaluate(&five).ranking().qualifies()
                });
            assert_eq!(paying, guaranteed, "disagreement on {:?}", cards);
        }
    }
}

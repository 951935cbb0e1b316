use super::decision::Decision;
use super::phase::Phase;
use crate::cards::card::Card;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{operation} requires phase {requires}, hand is in {found}")]
    InvalidPhase {
        operation: &'static str,
        requires: Phase,
        found: Phase,
    },
}

/// one hand of Let It Ride as an explicit state machine.
///
/// constructed at the deal with three player cards and two face
/// down community cards, then driven through decision and reveal
/// operations in a fixed order. every operation is legal from
/// exactly one phase; anything else is an InvalidPhase error.
/// pulling a bet deactivates it for good, and the third bet can
/// never be pulled. single use: once resolved it only answers
/// queries.
#[derive(Debug, Clone)]
pub struct HandState {
    player: [Card; 3],
    community: [Card; 2],
    phase: Phase,
    first: Option<Decision>,
    second: Option<Decision>,
    bet1_active: bool,
    bet2_active: bool,
}

impl HandState {
    pub fn deal(player: [Card; 3], community: [Card; 2]) -> Self {
        Self {
            player,
            community,
            phase: Phase::FirstDecision,
            first: None,
            second: None,
            bet1_active: true,
            bet2_active: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// cards the player can currently see: 3, then 4, then 5
    pub fn visible(&self) -> Vec<Card> {
        let mut cards = self.player.to_vec();
        match self.phase {
            Phase::FirstDecision | Phase::FirstReveal => {}
            Phase::SecondDecision | Phase::SecondReveal => {
                cards.push(self.community[0]);
            }
            Phase::Showdown | Phase::Resolved => {
                cards.extend(self.community);
            }
        }
        cards
    }

    pub fn player_cards(&self) -> [Card; 3] {
        self.player
    }

    pub fn first_decision(&self) -> Option<Decision> {
        self.first
    }
    pub fn second_decision(&self) -> Option<Decision> {
        self.second
    }

    pub fn bet1_active(&self) -> bool {
        self.bet1_active
    }
    pub fn bet2_active(&self) -> bool {
        self.bet2_active
    }
    /// the third bet is never pullable
    pub fn bet3_active(&self) -> bool {
        true
    }
    pub fn active_bets(&self) -> usize {
        1 + self.bet1_active as usize + self.bet2_active as usize
    }

    pub fn decide_first(&mut self, decision: Decision) -> Result<(), GameError> {
        self.expect(Phase::FirstDecision, "decide_first")?;
        self.first = Some(decision);
        self.bet1_active = decision == Decision::Ride;
        self.phase = Phase::FirstReveal;
        Ok(())
    }

    pub fn reveal_first(&mut self) -> Result<Card, GameError> {
        self.expect(Phase::FirstReveal, "reveal_first")?;
        self.phase = Phase::SecondDecision;
        Ok(self.community[0])
    }

    pub fn decide_second(&mut self, decision: Decision) -> Result<(), GameError> {
        self.expect(Phase::SecondDecision, "decide_second")?;
        self.second = Some(decision);
        self.bet2_active = decision == Decision::Ride;
        self.phase = Phase::SecondReveal;
        Ok(())
    }

    pub fn reveal_second(&mut self) -> Result<Card, GameError> {
        self.expect(Phase::SecondReveal, "reveal_second")?;
        self.phase = Phase::Showdown;
        Ok(self.community[1])
    }

    pub fn resolve(&mut self) -> Result<[Card; 5], GameError> {
        self.expect(Phase::Showdown, "resolve")?;
        self.phase = Phase::Resolved;
        Ok(self.finished())
    }

    /// the full five-card hand; only meaningful once resolved
    fn finished(&self) -> [Card; 5] {
        [
            self.player[0],
            self.player[1],
            self.player[2],
            self.community[0],
            self.community[1],
        ]
    }

    fn expect(&self, requires: Phase, operation: &'static str) -> Result<(), GameError> {
        if self.phase == requires {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                requires,
                found: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn dealt() -> HandState {
        let cards = Vec::<Card>::from(Hand::from("As Kh 9d 2c 7s"));
        HandState::deal([cards[0], cards[1], cards[2]], [cards[3], cards[4]])
    }

    #[test]
    fn happy_path() {
        let mut hand = dealt();
        assert_eq!(hand.visible().len(), 3);
        hand.decide_first(Decision::Pull).unwrap();
        hand.reveal_first().unwrap();
        assert_eq!(hand.visible().len(), 4);
        hand.decide_second(Decision::Ride).unwrap();
        hand.reveal_second().unwrap();
        assert_eq!(hand.visible().len(), 5);
        let five = hand.resolve().unwrap();
        assert_eq!(five.len(), 5);
        assert_eq!(hand.phase(), Phase::Resolved);
    }

    #[test]
    fn pulled_bet_stays_pulled() {
        let mut hand = dealt();
        hand.decide_first(Decision::Pull).unwrap();
        hand.reveal_first().unwrap();
        hand.decide_second(Decision::Ride).unwrap();
        assert!(!hand.bet1_active());
        assert!(hand.bet2_active());
        assert!(hand.bet3_active());
        assert_eq!(hand.active_bets(), 2);
    }

    #[test]
    fn out_of_order_operations_rejected() {
        let mut hand = dealt();
        assert_eq!(
            hand.reveal_first(),
            Err(GameError::InvalidPhase {
                operation: "reveal_first",
                requires: Phase::FirstReveal,
                found: Phase::FirstDecision,
            })
        );
        assert!(hand.decide_second(Decision::Ride).is_err());
        assert!(hand.reveal_second().is_err());
        assert!(hand.resolve().is_err());
    }

    #[test]
    fn no_double_decision() {
        let mut hand = dealt();
        hand.decide_first(Decision::Ride).unwrap();
        assert!(hand.decide_first(Decision::Pull).is_err());
        assert!(hand.bet1_active());
    }

    #[test]
    fn single_use() {
        let mut hand = dealt();
        hand.decide_first(Decision::Ride).unwrap();
        hand.reveal_first().unwrap();
        hand.decide_second(Decision::Ride).unwrap();
        hand.reveal_second().unwrap();
        hand.resolve().unwrap();
        assert!(hand.resolve().is_err());
    }
}

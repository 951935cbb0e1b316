use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// the dealing surface. holds the set of cards not yet dealt and
/// draws uniformly from it with a caller-injected RNG; the deck
/// itself owns no randomness, which is what makes seeded replays
/// possible. reset() restores all 52 cards.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }

    pub fn reset(&mut self) {
        self.0 = Hand::full();
    }

    pub fn remaining(&self) -> usize {
        self.0.size()
    }

    /// remove a uniformly random card from the deck.
    /// drawing from an empty deck is a contract violation.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "draw from empty deck");
        let i = rng.gen_range(0..self.0.size());
        let card = self.0.nth(i).expect("index in range");
        self.0.remove(card);
        card
    }

    /// discard n cards face down, simulating a shuffling-machine burn
    pub fn burn<R: Rng>(&mut self, n: usize, rng: &mut R) {
        for _ in 0..n {
            self.draw(rng);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

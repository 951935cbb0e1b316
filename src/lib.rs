pub mod betting;
pub mod cards;
pub mod errors;
pub mod evaluation;
pub mod game;
pub mod session;
pub mod simulation;
pub mod stats;
pub mod strategy;

/// money is tracked in fractional chips
pub type Chips = f64;
pub type Probability = f64;

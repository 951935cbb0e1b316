pub mod basic;
pub use basic::*;

pub mod baseline;
pub use baseline::*;

pub mod bonus;
pub use bonus::*;

pub mod context;
pub use context::*;

pub mod expr;
pub use expr::*;

pub mod factory;
pub use factory::*;

pub mod rules;
pub use rules::*;

use crate::evaluation::analysis::HandAnalysis;
use crate::game::decision::Decision;

/// a pluggable decision policy. strategies are consulted twice
/// per hand with a fresh HandAnalysis and an immutable context
/// snapshot; they hold no game state of their own.
pub trait Strategy {
    fn name(&self) -> &str;
    /// three cards visible, bet 1 at stake
    fn first(&self, analysis: &HandAnalysis, context: &StrategyContext) -> Decision;
    /// four cards visible, bet 2 at stake
    fn second(&self, analysis: &HandAnalysis, context: &StrategyContext) -> Decision;
}

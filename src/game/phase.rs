use serde::Serialize;

/// progress of one hand. strictly ordered; each phase admits
/// exactly one operation and there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Phase {
    /// three player cards dealt, awaiting the first decision
    FirstDecision,
    /// awaiting the first community reveal
    FirstReveal,
    /// four cards visible, awaiting the second decision
    SecondDecision,
    /// awaiting the second community reveal
    SecondReveal,
    /// all five cards visible, awaiting resolution
    Showdown,
    /// terminal
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Phase::FirstDecision => "first-decision",
                Phase::FirstReveal => "first-reveal",
                Phase::SecondDecision => "second-decision",
                Phase::SecondReveal => "second-reveal",
                Phase::Showdown => "showdown",
                Phase::Resolved => "resolved",
            }
        )
    }
}

use super::context::StrategyContext;
use super::expr::{Expr, RuleError};
use super::Strategy;
use crate::evaluation::analysis::HandAnalysis;
use crate::game::decision::Decision;

/// one parsed rule: when the condition holds, take the action
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub when: Expr,
    pub then: Decision,
}

/// a rule-driven custom strategy. each decision point gets an
/// ordered rule list; the first condition that matches wins, and
/// an explicit default applies when none do. all expressions are
/// parsed up front, so a malformed or unknown condition fails the
/// construction instead of some hand a million deals in.
#[derive(Debug, Clone)]
pub struct Rules {
    name: String,
    first: Vec<Rule>,
    first_default: Decision,
    second: Vec<Rule>,
    second_default: Decision,
}

impl Rules {
    pub fn parse(
        name: &str,
        first: &[(&str, Decision)],
        first_default: Decision,
        second: &[(&str, Decision)],
        second_default: Decision,
    ) -> Result<Self, RuleError> {
        let compile = |rules: &[(&str, Decision)]| {
            rules
                .iter()
                .map(|(when, then)| {
                    Ok(Rule {
                        when: Expr::parse(when)?,
                        then: *then,
                    })
                })
                .collect::<Result<Vec<Rule>, RuleError>>()
        };
        Ok(Self {
            name: name.to_string(),
            first: compile(first)?,
            first_default,
            second: compile(second)?,
            second_default,
        })
    }

    fn apply(rules: &[Rule], default: Decision, analysis: &HandAnalysis) -> Decision {
        rules
            .iter()
            .find(|rule| rule.when.eval(analysis))
            .map(|rule| rule.then)
            .unwrap_or(default)
    }
}

impl Strategy for Rules {
    fn name(&self) -> &str {
        &self.name
    }
    fn first(&self, analysis: &HandAnalysis, _: &StrategyContext) -> Decision {
        Self::apply(&self.first, self.first_default, analysis)
    }
    fn second(&self, analysis: &HandAnalysis, _: &StrategyContext) -> Decision {
        Self::apply(&self.second, self.second_default, analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;

    fn ctx() -> StrategyContext {
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

    fn analyze(s: &str) -> HandAnalysis {
        let cards = Vec::<Card>::from(Hand::from(s));
        HandAnalysis::from(cards.as_slice())
    }

    #[test]
    fn first_match_wins() {
        let rules = Rules::parse(
            "custom",
            &[
                ("paying", Decision::Ride),
                ("high_cards >= 2", Decision::Ride),
                ("high_cards >= 2 and flush_draw", Decision::Pull), // shadowed
            ],
            Decision::Pull,
            &[],
            Decision::Pull,
        )
        .unwrap();
        assert_eq!(rules.first(&analyze("Ts Js 4s"), &ctx()), Decision::Ride);
    }

    #[test]
    fn default_applies() {
        let rules = Rules::parse(
            "custom",
            &[("paying", Decision::Ride)],
            Decision::Pull,
            &[],
            Decision::Ride,
        )
        .unwrap();
        assert_eq!(rules.first(&analyze("2s 7h Qd"), &ctx()), Decision::Pull);
        assert_eq!(rules.second(&analyze("2s 7h Qd 8d"), &ctx()), Decision::Ride);
    }

    #[test]
    fn malformed_rule_fails_construction() {
        let result = Rules::parse(
            "broken",
            &[("no_such_field > 1", Decision::Ride)],
            Decision::Pull,
            &[],
            Decision::Pull,
        );
        assert!(matches!(result, Err(RuleError::UnknownIdentifier(_))));
    }
}

use super::context::BonusContext;
use crate::errors::ConfigError;
use crate::Chips;

/// sizing policy for the optional three-card side wager.
/// stateless: everything a policy may react to (profit, streak,
/// bankroll) arrives in the context snapshot.
pub trait BonusStrategy {
    fn name(&self) -> &str;
    /// the wager to place this hand; zero means no bet
    fn bet(&self, context: &BonusContext) -> Chips;
}

/// shared clamp: cap at the table max and the bankroll, and treat
/// anything below the table minimum as "no bet" rather than
/// rounding it up.
fn clamp(amount: Chips, context: &BonusContext) -> Chips {
    let amount = amount.min(context.max_bonus).min(context.bankroll);
    if amount < context.min_bonus {
        0.0
    } else {
        amount
    }
}

/// no side wager, ever
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl BonusStrategy for Never {
    fn name(&self) -> &str {
        "never"
    }
    fn bet(&self, _: &BonusContext) -> Chips {
        0.0
    }
}

/// the same amount every hand
#[derive(Debug, Clone, Copy)]
pub struct Flat {
    amount: Chips,
}

impl Flat {
    pub fn new(amount: Chips) -> Result<Self, ConfigError> {
        if amount <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "bonus amount",
                value: amount,
            });
        }
        Ok(Self { amount })
    }
}

impl BonusStrategy for Flat {
    fn name(&self) -> &str {
        "flat"
    }
    fn bet(&self, context: &BonusContext) -> Chips {
        clamp(self.amount, context)
    }
}

/// a fixed fraction of the base bet
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    ratio: f64,
}

impl Ratio {
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        if ratio <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "bonus ratio",
                value: ratio,
            });
        }
        Ok(Self { ratio })
    }
}

impl BonusStrategy for Ratio {
    fn name(&self) -> &str {
        "ratio"
    }
    fn bet(&self, context: &BonusContext) -> Chips {
        clamp(context.base_bet * self.ratio, context)
    }
}

/// a profit scaling tier: at or above the threshold, the base
/// bonus is multiplied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub profit: Chips,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreakAction {
    /// multiply the bet while on a winning streak of the trigger length
    Multiply(f64),
    /// stop betting while on a losing streak of the trigger length
    Stop,
    /// bet only once a winning streak of the trigger length is running
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakRule {
    pub trigger: u32,
    pub action: StreakAction,
}

/// bankroll-conditional sizing: a base amount scaled either by a
/// ratio of session profit or by profit tiers (setting both is an
/// invalid configuration, not a silent override), with an
/// optional streak trigger on top.
#[derive(Debug, Clone)]
pub struct Tiered {
    base: Chips,
    profit_ratio: Option<f64>,
    tiers: Vec<Tier>,
    streak: Option<StreakRule>,
}

impl Tiered {
    pub fn new(
        base: Chips,
        profit_ratio: Option<f64>,
        tiers: Vec<Tier>,
        streak: Option<StreakRule>,
    ) -> Result<Self, ConfigError> {
        if base <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "bonus base",
                value: base,
            });
        }
        if profit_ratio.is_some() && !tiers.is_empty() {
            return Err(ConfigError::AmbiguousBonus);
        }
        if let Some(ratio) = profit_ratio {
            if ratio <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: "bonus profit ratio",
                    value: ratio,
                });
            }
        }
        for tier in &tiers {
            if tier.multiplier <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: "tier multiplier",
                    value: tier.multiplier,
                });
            }
        }
        let mut tiers = tiers;
        tiers.sort_by(|a, b| b.profit.total_cmp(&a.profit));
        Ok(Self {
            base,
            profit_ratio,
            tiers,
            streak,
        })
    }
}

impl BonusStrategy for Tiered {
    fn name(&self) -> &str {
        "tiered"
    }

    fn bet(&self, context: &BonusContext) -> Chips {
        let mut amount = match self.profit_ratio {
            Some(ratio) => self.base.max(context.profit.max(0.0) * ratio),
            None => {
                let multiplier = self
                    .tiers
                    .iter()
                    .find(|tier| context.profit >= tier.profit)
                    .map(|tier| tier.multiplier)
                    .unwrap_or(1.0);
                self.base * multiplier
            }
        };
        if let Some(rule) = self.streak {
            match rule.action {
                StreakAction::Multiply(m) => {
                    if context.streak >= rule.trigger as i32 {
                        amount *= m;
                    }
                }
                StreakAction::Stop => {
                    if context.streak <= -(rule.trigger as i32) {
                        return 0.0;
                    }
                }
                StreakAction::Start => {
                    if context.streak < rule.trigger as i32 {
                        return 0.0;
                    }
                }
            }
        }
        clamp(amount, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> BonusContext {
        BonusContext {
            bankroll: 500.0,
            profit: 0.0,
            streak: 0,
            hands: 0,
            base_bet: 5.0,
            min_bonus: 1.0,
            max_bonus: 25.0,
        }
    }

    #[test]
    fn flat_clamps_to_max() {
        let bonus = Flat::new(100.0).unwrap();
        assert_eq!(bonus.bet(&ctx()), 25.0);
    }

    #[test]
    fn below_minimum_means_no_bet() {
        let bonus = Ratio::new(0.1).unwrap(); // 0.5 on a 5 base, min is 1
        assert_eq!(bonus.bet(&ctx()), 0.0);
    }

    #[test]
    fn never_exceeds_bankroll() {
        let bonus = Flat::new(20.0).unwrap();
        let mut context = ctx();
        context.bankroll = 3.0;
        assert_eq!(bonus.bet(&context), 3.0);
    }

    #[test]
    fn dual_configuration_rejected() {
        let result = Tiered::new(
            5.0,
            Some(0.01),
            vec![Tier {
                profit: 100.0,
                multiplier: 2.0,
            }],
            None,
        );
        assert!(matches!(result, Err(ConfigError::AmbiguousBonus)));
    }

    #[test]
    fn tiers_scale_with_profit() {
        let bonus = Tiered::new(
            5.0,
            None,
            vec![
                Tier {
                    profit: 50.0,
                    multiplier: 2.0,
                },
                Tier {
                    profit: 100.0,
                    multiplier: 4.0,
                },
            ],
            None,
        )
        .unwrap();
        let mut context = ctx();
        assert_eq!(bonus.bet(&context), 5.0);
        context.profit = 60.0;
        assert_eq!(bonus.bet(&context), 10.0);
        context.profit = 150.0;
        assert_eq!(bonus.bet(&context), 20.0);
    }

    #[test]
    fn streak_stop_suppresses_bet() {
        let bonus = Tiered::new(
            5.0,
            None,
            vec![],
            Some(StreakRule {
                trigger: 3,
                action: StreakAction::Stop,
            }),
        )
        .unwrap();
        let mut context = ctx();
        context.streak = -3;
        assert_eq!(bonus.bet(&context), 0.0);
        context.streak = -2;
        assert_eq!(bonus.bet(&context), 5.0);
    }

    #[test]
    fn streak_start_gates_bet() {
        let bonus = Tiered::new(
            5.0,
            None,
            vec![],
            Some(StreakRule {
                trigger: 2,
                action: StreakAction::Start,
            }),
        )
        .unwrap();
        let mut context = ctx();
        assert_eq!(bonus.bet(&context), 0.0);
        context.streak = 2;
        assert_eq!(bonus.bet(&context), 5.0);
    }

    #[test]
    fn streak_multiplier_applies_and_clamps() {
        let bonus = Tiered::new(
            10.0,
            None,
            vec![],
            Some(StreakRule {
                trigger: 2,
                action: StreakAction::Multiply(3.0),
            }),
        )
        .unwrap();
        let mut context = ctx();
        context.streak = 2;
        assert_eq!(bonus.bet(&context), 25.0); // 30 clamped to table max
    }
}

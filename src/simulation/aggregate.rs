use crate::evaluation::ranking::Category;
use crate::session::result::{Outcome, SessionResult};
use crate::{Chips, Probability};
use serde::Serialize;

/// rolled-up view over many finished sessions. counts add and
/// profit samples concatenate, so folding results in one batch or
/// merging partial aggregates gives identical numbers; moments and
/// percentiles are always recomputed from the samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStatistics {
    pub sessions: u64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub hands: u64,
    pub profit: Chips,
    pub frequencies: [u64; Category::COUNT],
    pub profits: Vec<Chips>,
}

impl AggregateStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, result: &SessionResult) {
        self.sessions += 1;
        match result.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        self.hands += result.hands as u64;
        self.profit += result.profit;
        for (ours, theirs) in self.frequencies.iter_mut().zip(result.frequencies) {
            *ours += theirs;
        }
        self.profits.push(result.profit);
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.sessions += other.sessions;
        self.wins += other.wins;
        self.losses += other.losses;
        self.pushes += other.pushes;
        self.hands += other.hands;
        self.profit += other.profit;
        for (ours, theirs) in self.frequencies.iter_mut().zip(other.frequencies) {
            *ours += theirs;
        }
        self.profits.extend(other.profits);
        self
    }

    pub fn win_rate(&self) -> Probability {
        if self.sessions == 0 {
            0.0
        } else {
            self.wins as f64 / self.sessions as f64
        }
    }

    pub fn ev_per_hand(&self) -> Chips {
        if self.hands == 0 {
            0.0
        } else {
            self.profit / self.hands as f64
        }
    }

    pub fn mean_profit(&self) -> Chips {
        if self.sessions == 0 {
            0.0
        } else {
            self.profit / self.sessions as f64
        }
    }

    /// sample standard deviation of session profit
    pub fn stddev_profit(&self) -> Option<Chips> {
        if self.profits.len() < 2 {
            return None;
        }
        let mean = self.mean_profit();
        let variance = self
            .profits
            .iter()
            .map(|p| (p - mean).powi(2))
            .sum::<f64>()
            / (self.profits.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// nearest-rank percentile of session profit, p in 0..=100
    pub fn percentile(&self, p: f64) -> Option<Chips> {
        if self.profits.is_empty() {
            return None;
        }
        assert!((0.0..=100.0).contains(&p));
        let mut sorted = self.profits.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let rank = ((p / 100.0 * sorted.len() as f64).ceil() as usize).max(1);
        Some(sorted[rank - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::result::StopReason;

    fn result(id: usize, profit: Chips, hands: usize) -> SessionResult {
        let mut frequencies = [0u64; Category::COUNT];
        frequencies[Category::HighCard.index()] = hands as u64;
        SessionResult {
            id,
            seed: id as u64,
            hands,
            profit,
            final_balance: 1_000.0 + profit,
            peak_balance: 1_000.0 + profit.max(0.0),
            max_drawdown: 0.0,
            max_drawdown_fraction: 0.0,
            stop: StopReason::MaxHands,
            outcome: Outcome::from_profit(profit),
            frequencies,
            records: None,
        }
    }

    fn aggregate(results: &[SessionResult]) -> AggregateStatistics {
        let mut aggregate = AggregateStatistics::new();
        for result in results {
            aggregate.observe(result);
        }
        aggregate
    }

    #[test]
    fn observe_rolls_everything_up() {
        let stats = aggregate(&[
            result(0, 100.0, 50),
            result(1, -40.0, 30),
            result(2, 0.0, 20),
        ]);
        assert_eq!(stats.sessions, 3);
        assert_eq!((stats.wins, stats.losses, stats.pushes), (1, 1, 1));
        assert_eq!(stats.hands, 100);
        assert_eq!(stats.profit, 60.0);
        assert_eq!(stats.win_rate(), 1.0 / 3.0);
        assert_eq!(stats.ev_per_hand(), 0.6);
        assert_eq!(stats.mean_profit(), 20.0);
        assert_eq!(stats.frequencies[Category::HighCard.index()], 100);
    }

    #[test]
    fn merge_is_associative() {
        let results = (0..9)
            .map(|i| result(i, (i as f64 - 4.0) * 10.0, 10 + i))
            .collect::<Vec<_>>();
        let a = aggregate(&results[0..3]);
        let b = aggregate(&results[3..5]);
        let c = aggregate(&results[5..9]);
        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
        assert_eq!(left, aggregate(&results));
    }

    #[test]
    fn merge_matches_single_batch_statistics() {
        let results = (0..20)
            .map(|i| result(i, (i as f64) * 7.0 - 50.0, 25))
            .collect::<Vec<_>>();
        let whole = aggregate(&results);
        let halves = aggregate(&results[..10]).merge(aggregate(&results[10..]));
        assert_eq!(whole.stddev_profit(), halves.stddev_profit());
        assert_eq!(whole.percentile(50.0), halves.percentile(50.0));
        assert_eq!(whole.percentile(95.0), halves.percentile(95.0));
    }

    #[test]
    fn empty_aggregate_degrades() {
        let stats = AggregateStatistics::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.ev_per_hand(), 0.0);
        assert!(stats.stddev_profit().is_none());
        assert!(stats.percentile(50.0).is_none());
    }

    #[test]
    fn percentile_edges() {
        let stats = aggregate(&[result(0, 10.0, 1), result(1, 20.0, 1), result(2, 30.0, 1)]);
        assert_eq!(stats.percentile(0.0), Some(10.0));
        assert_eq!(stats.percentile(50.0), Some(20.0));
        assert_eq!(stats.percentile(100.0), Some(30.0));
    }
}

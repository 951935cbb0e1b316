use crate::Chips;

/// balance ledger for one session. every settled hand appends to
/// the history, so peak and drawdown figures are derived from the
/// same sequence the hands actually produced.
#[derive(Debug, Clone)]
pub struct Bankroll {
    balance: Chips,
    peak: Chips,
    history: Vec<Chips>,
}

impl Bankroll {
    pub fn new(starting: Chips) -> Self {
        Self {
            balance: starting,
            peak: starting,
            history: vec![starting],
        }
    }

    /// settle one hand's net into the balance
    pub fn apply(&mut self, net: Chips) {
        self.balance += net;
        self.peak = self.peak.max(self.balance);
        self.history.push(self.balance);
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub fn peak(&self) -> Chips {
        self.peak
    }
    pub fn starting(&self) -> Chips {
        self.history[0]
    }
    pub fn profit(&self) -> Chips {
        self.balance - self.history[0]
    }
    pub fn history(&self) -> &[Chips] {
        &self.history
    }

    /// distance below the running peak right now
    pub fn drawdown(&self) -> Chips {
        self.peak - self.balance
    }

    /// worst peak-to-trough fall anywhere in the history
    pub fn max_drawdown(&self) -> Chips {
        let mut peak = self.history[0];
        let mut worst = 0.0;
        for &balance in &self.history {
            peak = peak.max(balance);
            worst = Chips::max(worst, peak - balance);
        }
        worst
    }

    /// worst fall as a fraction of the peak it fell from
    pub fn max_drawdown_fraction(&self) -> f64 {
        let mut peak = self.history[0];
        let mut worst = 0.0;
        for &balance in &self.history {
            peak = peak.max(balance);
            if peak > 0.0 {
                worst = f64::max(worst, (peak - balance) / peak);
            }
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_balance_and_peak() {
        let mut bankroll = Bankroll::new(100.0);
        bankroll.apply(50.0);
        bankroll.apply(-30.0);
        assert_eq!(bankroll.balance(), 120.0);
        assert_eq!(bankroll.peak(), 150.0);
        assert_eq!(bankroll.profit(), 20.0);
        assert_eq!(bankroll.history(), &[100.0, 150.0, 120.0]);
    }

    #[test]
    fn max_drawdown_spans_the_worst_fall() {
        let mut bankroll = Bankroll::new(100.0);
        for net in [100.0, -150.0, 120.0, -40.0] {
            bankroll.apply(net);
        }
        // peak 200 fell to 50
        assert_eq!(bankroll.max_drawdown(), 150.0);
        assert_eq!(bankroll.max_drawdown_fraction(), 0.75);
    }

    #[test]
    fn current_drawdown_recovers() {
        let mut bankroll = Bankroll::new(100.0);
        bankroll.apply(-20.0);
        assert_eq!(bankroll.drawdown(), 20.0);
        bankroll.apply(20.0);
        assert_eq!(bankroll.drawdown(), 0.0);
        assert_eq!(bankroll.max_drawdown(), 20.0);
    }

    #[test]
    fn untouched_bankroll_has_no_drawdown() {
        let bankroll = Bankroll::new(100.0);
        assert_eq!(bankroll.max_drawdown(), 0.0);
        assert_eq!(bankroll.max_drawdown_fraction(), 0.0);
    }
}

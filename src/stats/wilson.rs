use crate::Probability;

#[derive(Debug, Clone, Copy)]
pub struct WilsonInterval {
    pub low: Probability,
    pub high: Probability,
}

impl WilsonInterval {
    pub fn contains(&self, p: Probability) -> bool {
        self.low <= p && p <= self.high
    }
}

/// wilson score interval for a binomial proportion at critical
/// value z. better behaved than the normal approximation near 0
/// and 1 and for small samples. None when there are no trials.
pub fn wilson(successes: u64, trials: u64, z: f64) -> Option<WilsonInterval> {
    if trials == 0 {
        return None;
    }
    assert!(successes <= trials);
    let n = trials as f64;
    let p = successes as f64 / n;
    let zz = z * z;
    let denominator = 1.0 + zz / n;
    let center = (p + zz / (2.0 * n)) / denominator;
    let margin = z * (p * (1.0 - p) / n + zz / (4.0 * n * n)).sqrt() / denominator;
    Some(WilsonInterval {
        low: (center - margin).max(0.0),
        high: (center + margin).min(1.0),
    })
}

/// the 95% interval
pub fn wilson95(successes: u64, trials: u64) -> Option<WilsonInterval> {
    wilson(successes, trials, 1.96)
}

use super::math::gammq;
use crate::Probability;

/// chi-square goodness-of-fit verdict. consistency means the
/// observed frequencies are statistically indistinguishable from
/// the expected distribution at the chosen significance level.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquare {
    pub statistic: f64,
    pub df: usize,
    pub p_value: Probability,
    pub alpha: f64,
}

impl ChiSquare {
    pub fn consistent(&self) -> bool {
        self.p_value > self.alpha
    }
}

/// test observed counts against expected probabilities. adjacent
/// bins are pooled until every pooled bin expects at least five
/// observations; the leftover tail folds into the last pooled bin.
/// returns None when there is no data or too few bins survive.
pub fn goodness_of_fit(
    observed: &[u64],
    expected: &[Probability],
    alpha: f64,
) -> Option<ChiSquare> {
    assert_eq!(observed.len(), expected.len());
    let total = observed.iter().sum::<u64>();
    if total == 0 {
        return None;
    }
    let n = total as f64;

    let mut bins: Vec<(f64, f64)> = Vec::new();
    let mut pooled = (0.0, 0.0);
    for (&count, &probability) in observed.iter().zip(expected) {
        pooled.0 += count as f64;
        pooled.1 += n * probability;
        if pooled.1 >= 5.0 {
            bins.push(pooled);
            pooled = (0.0, 0.0);
        }
    }
    if pooled.0 > 0.0 || pooled.1 > 0.0 {
        match bins.last_mut() {
            Some(last) => {
                last.0 += pooled.0;
                last.1 += pooled.1;
            }
            None => return None,
        }
    }
    if bins.len() < 2 {
        return None;
    }

    let statistic = bins
        .iter()
        .map(|&(observed, expected)| (observed - expected).powi(2) / expected)
        .sum::<f64>();
    let df = bins.len() - 1;
    Some(ChiSquare {
        statistic,
        df,
        p_value: gammq(df as f64 / 2.0, statistic / 2.0),
        alpha,
    })
}

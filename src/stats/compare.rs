use super::math::normal_tail;
use crate::Chips;
use std::fmt;

/// how much weight to put on a comparison verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// two-sample comparison of session profits. degenerate inputs
/// (undersized samples, zero variance, zero baseline) produce
/// absent fields and low confidence rather than errors.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub mean_a: Chips,
    pub mean_b: Chips,
    /// two-sided welch p-value
    pub p_value: Option<f64>,
    pub cohens_d: Option<f64>,
    /// percent change of b over a; None when a's mean is zero
    pub improvement: Option<f64>,
    pub confidence: Confidence,
}

fn mean(samples: &[Chips]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn variance(samples: &[Chips], mean: f64) -> f64 {
    samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64
}

/// welch two-sample test plus cohen's d effect size
pub fn compare(a: &[Chips], b: &[Chips]) -> Comparison {
    if a.len() < 2 || b.len() < 2 {
        let mean_a = if a.is_empty() { 0.0 } else { mean(a) };
        let mean_b = if b.is_empty() { 0.0 } else { mean(b) };
        return Comparison {
            mean_a,
            mean_b,
            p_value: None,
            cohens_d: None,
            improvement: None,
            confidence: Confidence::Low,
        };
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (mean_a, mean_b) = (mean(a), mean(b));
    let (var_a, var_b) = (variance(a, mean_a), variance(b, mean_b));

    let standard_error = (var_a / na + var_b / nb).sqrt();
    let p_value = (standard_error > 0.0)
        .then(|| 2.0 * normal_tail(((mean_b - mean_a) / standard_error).abs()));

    let pooled =
        (((na - 1.0) * var_a + (nb - 1.0) * var_b) / (na + nb - 2.0)).sqrt();
    let cohens_d = (pooled > 0.0).then(|| (mean_b - mean_a) / pooled);

    let improvement =
        (mean_a != 0.0).then(|| (mean_b - mean_a) / mean_a.abs() * 100.0);

    let confidence = match (p_value, cohens_d) {
        (Some(p), Some(d)) if p < 0.01 && d.abs() >= 0.5 => Confidence::High,
        (Some(p), Some(d)) if p < 0.05 && d.abs() >= 0.2 => Confidence::Medium,
        _ => Confidence::Low,
    };

    Comparison {
        mean_a,
        mean_b,
        p_value,
        cohens_d,
        improvement,
        confidence,
    }
}

//! Offline post-hoc confidence recalibration.
//!
//! Fit against labeled `(confidence, correct)` pairs to minimize expected
//! calibration error, then applied at inference as a monotonic remap that
//! never changes the ranking of confidences.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const ECE_BINS: usize = 10;

/// A fitted monotonic confidence remap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Recalibrator {
    /// No remap.
    #[default]
    Identity,
    /// Temperature scaling on the logit: `sigmoid(logit(p) / t)`.
    Temperature { t: f32 },
    /// Platt scaling: `sigmoid(a * logit(p) + b)` with `a > 0`.
    Platt { a: f32, b: f32 },
    /// Isotonic regression (pool-adjacent-violators) step function,
    /// stored as `(confidence, calibrated)` knots in ascending order.
    Isotonic { knots: Vec<(f32, f32)> },
}

fn logit(p: f32) -> f32 {
    let p = p.clamp(1e-4, 1.0 - 1e-4);
    (p / (1.0 - p)).ln()
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Recalibrator {
    /// Apply the remap. Monotonic non-decreasing in the input.
    pub fn apply(&self, confidence: f32) -> f32 {
        let confidence = confidence.clamp(0.0, 1.0);
        match self {
            Recalibrator::Identity => confidence,
            Recalibrator::Temperature { t } => sigmoid(logit(confidence) / t.max(1e-3)),
            Recalibrator::Platt { a, b } => sigmoid(a.max(1e-3) * logit(confidence) + b),
            Recalibrator::Isotonic { knots } => {
                if knots.is_empty() {
                    return confidence;
                }
                // Step function: value of the last knot at or below the input.
                let mut value = knots[0].1;
                for (x, y) in knots {
                    if confidence >= *x {
                        value = *y;
                    } else {
                        break;
                    }
                }
                value
            }
        }
    }

    /// Fit temperature scaling by grid search over `t`, minimizing ECE.
    pub fn fit_temperature(pairs: &[(f32, bool)]) -> EngineResult<Self> {
        validate_pairs(pairs)?;
        let mut best = (1.0f32, f32::MAX);
        let mut t = 0.25f32;
        while t <= 4.0 {
            let candidate = Recalibrator::Temperature { t };
            let ece = expected_calibration_error(pairs, |c| candidate.apply(c));
            if ece < best.1 {
                best = (t, ece);
            }
            t += 0.05;
        }
        Ok(Recalibrator::Temperature { t: best.0 })
    }

    /// Fit Platt scaling by grid search over `(a, b)`, minimizing ECE.
    pub fn fit_platt(pairs: &[(f32, bool)]) -> EngineResult<Self> {
        validate_pairs(pairs)?;
        let mut best = (1.0f32, 0.0f32, f32::MAX);
        let mut a = 0.25f32;
        while a <= 3.0 {
            let mut b = -2.0f32;
            while b <= 2.0 {
                let candidate = Recalibrator::Platt { a, b };
                let ece = expected_calibration_error(pairs, |c| candidate.apply(c));
                if ece < best.2 {
                    best = (a, b, ece);
                }
                b += 0.1;
            }
            a += 0.25;
        }
        Ok(Recalibrator::Platt {
            a: best.0,
            b: best.1,
        })
    }

    /// Fit isotonic regression with pool-adjacent-violators.
    pub fn fit_isotonic(pairs: &[(f32, bool)]) -> EngineResult<Self> {
        validate_pairs(pairs)?;
        let mut sorted: Vec<(f32, f32)> = pairs
            .iter()
            .map(|(c, y)| (c.clamp(0.0, 1.0), if *y { 1.0 } else { 0.0 }))
            .collect();
        sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // Pool adjacent violators: merge blocks until means are
        // non-decreasing.
        struct Block {
            x: f32,
            sum: f32,
            count: f32,
        }
        let mut blocks: Vec<Block> = Vec::with_capacity(sorted.len());
        for (x, y) in sorted {
            blocks.push(Block {
                x,
                sum: y,
                count: 1.0,
            });
            while blocks.len() >= 2 {
                let last = blocks.len() - 1;
                let prev_mean = blocks[last - 1].sum / blocks[last - 1].count;
                let last_mean = blocks[last].sum / blocks[last].count;
                if prev_mean <= last_mean {
                    break;
                }
                let merged = blocks.pop().expect("len checked");
                let target = blocks.last_mut().expect("len checked");
                target.sum += merged.sum;
                target.count += merged.count;
                target.x = target.x.max(merged.x);
            }
        }

        let knots: Vec<(f32, f32)> = blocks
            .iter()
            .map(|b| (b.x, (b.sum / b.count).clamp(0.0, 1.0)))
            .collect();
        Ok(Recalibrator::Isotonic { knots })
    }
}

fn validate_pairs(pairs: &[(f32, bool)]) -> EngineResult<()> {
    if pairs.is_empty() {
        return Err(EngineError::CalibrationFit(
            "no labeled pairs provided".to_string(),
        ));
    }
    if pairs.iter().all(|(_, y)| *y) || pairs.iter().all(|(_, y)| !*y) {
        return Err(EngineError::CalibrationFit(
            "labels are degenerate (all one class)".to_string(),
        ));
    }
    Ok(())
}

/// Expected calibration error of a remap over labeled pairs, with 10
/// equal-width bins.
pub fn expected_calibration_error(
    pairs: &[(f32, bool)],
    remap: impl Fn(f32) -> f32,
) -> f32 {
    let mut bin_conf = [0.0f32; ECE_BINS];
    let mut bin_correct = [0.0f32; ECE_BINS];
    let mut bin_count = [0usize; ECE_BINS];

    for (confidence, correct) in pairs {
        let remapped = remap(*confidence).clamp(0.0, 1.0);
        let bin = ((remapped * ECE_BINS as f32) as usize).min(ECE_BINS - 1);
        bin_conf[bin] += remapped;
        bin_correct[bin] += if *correct { 1.0 } else { 0.0 };
        bin_count[bin] += 1;
    }

    let total = pairs.len() as f32;
    let mut ece = 0.0;
    for i in 0..ECE_BINS {
        if bin_count[i] == 0 {
            continue;
        }
        let count = bin_count[i] as f32;
        let avg_conf = bin_conf[i] / count;
        let accuracy = bin_correct[i] / count;
        ece += (count / total) * (avg_conf - accuracy).abs();
    }
    ece
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Overconfident synthetic set: high stated confidence, mediocre
    /// accuracy.
    fn overconfident_pairs() -> Vec<(f32, bool)> {
        let mut pairs = Vec::new();
        for i in 0..100 {
            let confidence = 0.85 + 0.1 * ((i % 10) as f32 / 10.0);
            pairs.push((confidence, i % 2 == 0));
        }
        pairs
    }

    #[test]
    fn test_identity_passthrough() {
        assert_eq!(Recalibrator::Identity.apply(0.42), 0.42);
    }

    #[test]
    fn test_temperature_monotonic() {
        let recal = Recalibrator::Temperature { t: 2.0 };
        let mut prev = 0.0;
        for i in 0..=20 {
            let c = i as f32 / 20.0;
            let v = recal.apply(c);
            assert!(v >= prev - 1e-6, "not monotonic at {c}");
            prev = v;
        }
    }

    #[test]
    fn test_platt_monotonic() {
        let recal = Recalibrator::Platt { a: 1.5, b: -0.5 };
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = recal.apply(i as f32 / 20.0);
            assert!(v >= prev - 1e-6);
            prev = v;
        }
    }

    #[test]
    fn test_isotonic_monotonic_after_fit() {
        let recal = Recalibrator::fit_isotonic(&overconfident_pairs()).unwrap();
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = recal.apply(i as f32 / 20.0);
            assert!(v >= prev - 1e-6);
            prev = v;
        }
    }

    #[test]
    fn test_temperature_fit_reduces_ece() {
        let pairs = overconfident_pairs();
        let before = expected_calibration_error(&pairs, |c| c);
        let recal = Recalibrator::fit_temperature(&pairs).unwrap();
        let after = expected_calibration_error(&pairs, |c| recal.apply(c));
        assert!(after <= before);
    }

    #[test]
    fn test_platt_fit_reduces_ece() {
        let pairs = overconfident_pairs();
        let before = expected_calibration_error(&pairs, |c| c);
        let recal = Recalibrator::fit_platt(&pairs).unwrap();
        let after = expected_calibration_error(&pairs, |c| recal.apply(c));
        assert!(after <= before);
    }

    #[test]
    fn test_isotonic_fit_reduces_ece() {
        let pairs = overconfident_pairs();
        let before = expected_calibration_error(&pairs, |c| c);
        let recal = Recalibrator::fit_isotonic(&pairs).unwrap();
        let after = expected_calibration_error(&pairs, |c| recal.apply(c));
        assert!(after <= before);
    }

    #[test]
    fn test_ranking_preserved() {
        let pairs = overconfident_pairs();
        for recal in [
            Recalibrator::fit_temperature(&pairs).unwrap(),
            Recalibrator::fit_platt(&pairs).unwrap(),
            Recalibrator::fit_isotonic(&pairs).unwrap(),
        ] {
            let lo = recal.apply(0.3);
            let hi = recal.apply(0.8);
            assert!(hi >= lo, "ranking broken by {recal:?}");
        }
    }

    #[test]
    fn test_empty_pairs_rejected() {
        assert!(Recalibrator::fit_temperature(&[]).is_err());
    }

    #[test]
    fn test_degenerate_labels_rejected() {
        let pairs: Vec<(f32, bool)> = (0..10).map(|i| (i as f32 / 10.0, true)).collect();
        assert!(Recalibrator::fit_isotonic(&pairs).is_err());
    }
}

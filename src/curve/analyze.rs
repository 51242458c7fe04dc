//! Curve-shape analysis: steepest-change point and plateau detection.

use anyhow::{Result, bail};

use crate::curve::{CurveSummary, InflectionPoint};

const PLATEAU_SLOPE_FRACTION: f64 = 0.1;

/// Summarizes one sampled curve. Needs at least 3 points for one interior
/// central difference; fewer is a caller bug under the fixed 100-sample
/// contract, not a recoverable condition.
pub fn analyze_curve(xs: &[f64], ys: &[f64]) -> Result<CurveSummary> {
    if xs.len() != ys.len() {
        bail!("x/y length mismatch: {} != {}", xs.len(), ys.len());
    }
    let n = xs.len();
    if n < 3 {
        bail!("curve analysis requires at least 3 samples, got {}", n);
    }

    // Central difference over interior points.
    let mut derivatives = Vec::with_capacity(n - 2);
    for i in 1..n - 1 {
        let dx = xs[i + 1] - xs[i - 1];
        let dy = ys[i + 1] - ys[i - 1];
        derivatives.push(dy / dx);
    }

    // Steepest point; ties keep the first occurrence.
    let mut max_idx = 0usize;
    let mut max_abs = derivatives[0].abs();
    for (i, d) in derivatives.iter().enumerate().skip(1) {
        if d.abs() > max_abs {
            max_abs = d.abs();
            max_idx = i;
        }
    }
    let sample_idx = max_idx + 1;
    let inflection = InflectionPoint {
        index: sample_idx,
        x: xs[sample_idx],
        y: ys[sample_idx],
        slope: derivatives[max_idx],
    };

    // A third counts as a plateau when more than 1/6 of the whole derivative
    // sequence sits below 10% of the steepest slope.
    let threshold = max_abs * PLATEAU_SLOPE_FRACTION;
    let m = derivatives.len();
    let low_count = derivatives[..m / 3]
        .iter()
        .filter(|d| d.abs() < threshold)
        .count();
    let high_count = derivatives[2 * m / 3..]
        .iter()
        .filter(|d| d.abs() < threshold)
        .count();
    let sixth = m as f64 / 6.0;

    Ok(CurveSummary {
        inflection,
        has_low_plateau: (low_count as f64) > sixth,
        has_high_plateau: (high_count as f64) > sixth,
        low_plateau_value: ys[0],
        high_plateau_value: ys[n - 1],
    })
}

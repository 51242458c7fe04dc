//! Builds the x-axis grid and evaluated series for the selected axis.

use crate::config::FeatureConfig;
use crate::engine::bayes::{bayes_update, predictive_values};
use crate::engine::{ClinicalParams, TestOutcome};
use crate::sweep::domain::{domain_for, grid};
use crate::sweep::{AxisSelection, SamplePoint, Series, SweepResult};

pub const LABEL_POSITIVE: &str = "Positive Test Result";
pub const LABEL_NEGATIVE: &str = "Negative Test Result";
pub const LABEL_PPV: &str = "PPV";
pub const LABEL_NPV: &str = "NPV";

/// One evaluated grid sample: the effective parameter triple after
/// substituting the axis value, or None when the implied sensitivity or
/// specificity leaves [0,1].
fn effective_params(axis: AxisSelection, held: &ClinicalParams, x: f64) -> Option<ClinicalParams> {
    let mut p = *held;
    match axis {
        AxisSelection::Prevalence => p.prevalence = x,
        AxisSelection::Sensitivity => p.sensitivity = x,
        AxisSelection::Specificity => p.specificity = x,
        // LR sweeps hold one accuracy parameter and derive the other from the
        // sampled ratio.
        AxisSelection::LrPos => p.specificity = 1.0 - held.sensitivity / x,
        AxisSelection::LrNeg => p.sensitivity = 1.0 - x * held.specificity,
    }
    let valid = (0.0..=1.0).contains(&p.sensitivity) && (0.0..=1.0).contains(&p.specificity);
    if valid {
        Some(p)
    } else {
        None
    }
}

pub fn generate_sweep(
    held: &ClinicalParams,
    axis: AxisSelection,
    outcome: Option<TestOutcome>,
    config: &FeatureConfig,
) -> SweepResult {
    let domain = domain_for(axis, config, held);
    let x_values = grid(&domain);

    let want_positive = !matches!(outcome, Some(TestOutcome::Negative));
    let want_negative = !matches!(outcome, Some(TestOutcome::Positive));

    let mut positive = Series {
        label: LABEL_POSITIVE.to_string(),
        points: Vec::new(),
    };
    let mut negative = Series {
        label: LABEL_NEGATIVE.to_string(),
        points: Vec::new(),
    };
    let mut ppv = Series {
        label: LABEL_PPV.to_string(),
        points: Vec::new(),
    };
    let mut npv = Series {
        label: LABEL_NPV.to_string(),
        points: Vec::new(),
    };

    for &x in &x_values {
        let Some(p) = effective_params(axis, held, x) else {
            continue;
        };
        if want_positive {
            push_finite(
                &mut positive,
                x,
                bayes_update(p.prevalence, p.sensitivity, p.specificity, TestOutcome::Positive),
            );
        }
        if want_negative {
            push_finite(
                &mut negative,
                x,
                bayes_update(p.prevalence, p.sensitivity, p.specificity, TestOutcome::Negative),
            );
        }
        if config.has_predictive_values {
            let pv = predictive_values(p.prevalence, p.sensitivity, p.specificity);
            push_finite(&mut ppv, x, pv.ppv);
            push_finite(&mut npv, x, pv.npv);
        }
    }

    let mut series = Vec::new();
    if want_positive {
        series.push(positive);
    }
    if want_negative {
        series.push(negative);
    }
    if config.has_predictive_values {
        series.push(ppv);
        series.push(npv);
    }

    SweepResult {
        x_values,
        series,
        x_label: axis.label().to_string(),
        is_log_scale: domain.log_scale,
    }
}

/// NaN and infinite results never enter a series; a skipped sample leaves a
/// gap, it is not clamped or interpolated.
fn push_finite(series: &mut Series, x: f64, y: f64) {
    if y.is_finite() {
        series.points.push(SamplePoint { x, y });
    }
}

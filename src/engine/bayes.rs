//! Bayesian post-test probability primitives.
//!
//! Note: No domain checks here. Callers keep probability inputs inside (0,1)
//! or accept NaN/infinite results at the boundary.

use crate::engine::{LikelihoodRatios, PredictiveValues, SensSpec, TestOutcome};

pub fn bayes_update(
    prevalence: f64,
    sensitivity: f64,
    specificity: f64,
    outcome: TestOutcome,
) -> f64 {
    match outcome {
        TestOutcome::Positive => {
            let numerator = sensitivity * prevalence;
            let denominator = sensitivity * prevalence + (1.0 - specificity) * (1.0 - prevalence);
            numerator / denominator
        }
        TestOutcome::Negative => {
            let numerator = (1.0 - sensitivity) * prevalence;
            let denominator = (1.0 - sensitivity) * prevalence + specificity * (1.0 - prevalence);
            numerator / denominator
        }
    }
}

/// Odds-form update: pre-test odds scaled by the likelihood ratio of the
/// observed outcome. Agrees with `bayes_update` when `lr` is derived from the
/// same sensitivity/specificity pair.
pub fn bayes_update_from_lr(prevalence: f64, lr: f64) -> f64 {
    let pre_odds = prevalence / (1.0 - prevalence);
    let post_odds = pre_odds * lr;
    post_odds / (1.0 + post_odds)
}

pub fn predictive_values(prevalence: f64, sensitivity: f64, specificity: f64) -> PredictiveValues {
    PredictiveValues {
        ppv: bayes_update(prevalence, sensitivity, specificity, TestOutcome::Positive),
        npv: 1.0 - bayes_update(prevalence, sensitivity, specificity, TestOutcome::Negative),
    }
}

/// LR+ diverges as specificity approaches 1, LR- as specificity approaches 0.
pub fn likelihood_ratios_from(sensitivity: f64, specificity: f64) -> LikelihoodRatios {
    LikelihoodRatios {
        lr_pos: sensitivity / (1.0 - specificity),
        lr_neg: (1.0 - sensitivity) / specificity,
    }
}

/// Inverse of `likelihood_ratios_from`. Ill-defined when `lr_pos == lr_neg`;
/// the algebraic solution may also land outside [0,1]. Callers validate before
/// committing the result anywhere.
pub fn sens_spec_from_lr(lr_pos: f64, lr_neg: f64) -> SensSpec {
    let specificity = (lr_pos - 1.0) / (lr_pos - lr_neg);
    let sensitivity = lr_pos * (1.0 - specificity);
    SensSpec {
        sensitivity,
        specificity,
    }
}

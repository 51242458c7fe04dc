//! Per-axis sweep bounds and spacing policy.

use crate::config::FeatureConfig;
use crate::engine::ClinicalParams;
use crate::sweep::AxisSelection;

pub const SAMPLES_PER_SWEEP: usize = 100;

const SLIDER_MIN: f64 = 0.01;
const SLIDER_MAX: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDomain {
    pub min: f64,
    pub max: f64,
    pub log_scale: bool,
}

/// Bounds for the selected axis. LR bounds are either fixed, or derived from
/// the complementary held parameter so the implied sensitivity/specificity
/// stays inside the slider range [0.01, 0.99]:
/// for an LR+ sweep `spec = 1 - sens/lr`, for an LR- sweep `sens = 1 - lr*spec`.
pub fn domain_for(axis: AxisSelection, config: &FeatureConfig, held: &ClinicalParams) -> SweepDomain {
    match axis {
        AxisSelection::Prevalence => {
            if config.log_prevalence_axis {
                SweepDomain {
                    min: 0.005,
                    max: 1.0,
                    log_scale: true,
                }
            } else {
                SweepDomain {
                    min: SLIDER_MIN,
                    max: SLIDER_MAX,
                    log_scale: false,
                }
            }
        }
        AxisSelection::Sensitivity | AxisSelection::Specificity => SweepDomain {
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            log_scale: false,
        },
        AxisSelection::LrPos => {
            if config.dynamic_lr_bounds {
                SweepDomain {
                    min: held.sensitivity / SLIDER_MAX,
                    max: held.sensitivity / SLIDER_MIN,
                    log_scale: true,
                }
            } else {
                SweepDomain {
                    min: 0.1,
                    max: 50.0,
                    log_scale: true,
                }
            }
        }
        AxisSelection::LrNeg => {
            if config.dynamic_lr_bounds {
                SweepDomain {
                    min: (1.0 - SLIDER_MAX) / held.specificity,
                    max: (1.0 - SLIDER_MIN) / held.specificity,
                    log_scale: true,
                }
            } else {
                SweepDomain {
                    min: 0.01,
                    max: 1.0,
                    log_scale: true,
                }
            }
        }
    }
}

/// Exactly 100 samples, endpoints inclusive; log-scale domains are spaced
/// evenly in log10.
pub fn grid(domain: &SweepDomain) -> Vec<f64> {
    let n = SAMPLES_PER_SWEEP;
    let last = (n - 1) as f64;
    if domain.log_scale {
        let log_min = domain.min.log10();
        let log_max = domain.max.log10();
        (0..n)
            .map(|i| 10f64.powf(log_min + i as f64 * (log_max - log_min) / last))
            .collect()
    } else {
        (0..n)
            .map(|i| domain.min + i as f64 * (domain.max - domain.min) / last)
            .collect()
    }
}

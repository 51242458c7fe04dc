//! Capability flags for the five shipped calculator variants.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConfig {
    pub has_predictive_values: bool,
    pub has_likelihood_ratio_axes: bool,
    pub has_explicit_outcome_selector: bool,
    pub log_prevalence_axis: bool,
    pub dynamic_lr_bounds: bool,
}

impl FeatureConfig {
    /// Linear prevalence axis, three sweep axes, both outcome curves.
    pub fn classic_v1() -> Self {
        Self {
            has_predictive_values: false,
            has_likelihood_ratio_axes: false,
            has_explicit_outcome_selector: false,
            log_prevalence_axis: false,
            dynamic_lr_bounds: false,
        }
    }

    /// Classic with log-spaced prevalence in [0.005, 1] to keep resolution at
    /// low prevalence.
    pub fn log_prevalence_v1() -> Self {
        let mut base = Self::classic_v1();
        base.log_prevalence_axis = true;
        base
    }

    /// Adds LR+ / LR- sweep axes with fixed log bounds.
    pub fn likelihood_v1() -> Self {
        let mut base = Self::log_prevalence_v1();
        base.has_likelihood_ratio_axes = true;
        base
    }

    /// LR axes whose bounds are derived from the complementary fixed
    /// parameter so the implied sensitivity/specificity stays on-slider.
    pub fn likelihood_dynamic_v1() -> Self {
        let mut base = Self::likelihood_v1();
        base.dynamic_lr_bounds = true;
        base
    }

    /// Predictive-value curves plus an explicit positive/negative selector.
    pub fn predictive_v1() -> Self {
        let mut base = Self::log_prevalence_v1();
        base.has_predictive_values = true;
        base.has_explicit_outcome_selector = true;
        base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    LogPrevalence,
    Likelihood,
    LikelihoodDynamic,
    Predictive,
}

impl Variant {
    pub fn config(&self) -> FeatureConfig {
        match self {
            Variant::Classic => FeatureConfig::classic_v1(),
            Variant::LogPrevalence => FeatureConfig::log_prevalence_v1(),
            Variant::Likelihood => FeatureConfig::likelihood_v1(),
            Variant::LikelihoodDynamic => FeatureConfig::likelihood_dynamic_v1(),
            Variant::Predictive => FeatureConfig::predictive_v1(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::LogPrevalence => "log_prevalence",
            Variant::Likelihood => "likelihood",
            Variant::LikelihoodDynamic => "likelihood_dynamic",
            Variant::Predictive => "predictive",
        }
    }
}

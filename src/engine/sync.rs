//! Keeps the two test-accuracy parameterizations consistent.
//!
//! `(sensitivity, specificity)` and `(LR+, LR-)` describe the same test. The
//! slider-held values are the single mutable state between input events; every
//! edit goes through one update transaction so a reconciliation write can never
//! re-enter the reconciler.

use anyhow::{Result, bail};
use tracing::debug;

use crate::engine::bayes::{likelihood_ratios_from, sens_spec_from_lr};
use crate::engine::{ClinicalParams, LikelihoodRatios};
use crate::sweep::AxisSelection;

/// Which field the user adjusted. Always passed explicitly by the caller;
/// the store never infers intent from event origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Prevalence(f64),
    Sensitivity(f64),
    Specificity(f64),
    LrPos(f64),
    LrNeg(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The recomputed counterpart (sensitivity or specificity) would leave
    /// [0,1]. Prior values are retained.
    CounterpartOutOfRange,
    /// `sens_spec_from_lr` has no solution for this LR pair.
    IllDefinedInverse,
    /// The edited ratio is pinned as the current sweep axis.
    AxisPinned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    Committed,
    Rejected(RejectReason),
}

impl EditOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, EditOutcome::Committed)
    }
}

#[derive(Debug, Clone)]
pub struct ParamStore {
    params: ClinicalParams,
    lrs: LikelihoodRatios,
    updating: bool,
}

impl ParamStore {
    pub fn new(params: ClinicalParams) -> Self {
        let lrs = likelihood_ratios_from(params.sensitivity, params.specificity);
        Self {
            params,
            lrs,
            updating: false,
        }
    }

    pub fn params(&self) -> ClinicalParams {
        self.params
    }

    pub fn likelihood_ratios(&self) -> LikelihoodRatios {
        self.lrs
    }

    /// Applies one edit under the no-reentry transaction. Returns an error
    /// only on recursive entry, which is a programming fault, never a user
    /// input condition.
    pub fn apply_edit(&mut self, edit: Edit, axis: AxisSelection) -> Result<EditOutcome> {
        self.begin_update()?;
        let outcome = self.reconcile(edit, axis);
        self.updating = false;
        if let EditOutcome::Rejected(reason) = outcome {
            debug!(?edit, ?reason, "edit rejected");
        }
        Ok(outcome)
    }

    fn begin_update(&mut self) -> Result<()> {
        if self.updating {
            bail!("parameter update already in progress");
        }
        self.updating = true;
        Ok(())
    }

    fn reconcile(&mut self, edit: Edit, axis: AxisSelection) -> EditOutcome {
        match edit {
            Edit::Prevalence(v) => {
                self.params.prevalence = v;
                EditOutcome::Committed
            }
            Edit::Sensitivity(v) => match axis {
                AxisSelection::LrPos => self.commit_pair(v, 1.0 - v / self.lrs.lr_pos),
                AxisSelection::LrNeg => self.commit_pair(v, (1.0 - v) / self.lrs.lr_neg),
                _ => {
                    self.params.sensitivity = v;
                    self.refresh_lrs();
                    EditOutcome::Committed
                }
            },
            Edit::Specificity(v) => match axis {
                AxisSelection::LrPos => self.commit_pair(self.lrs.lr_pos * (1.0 - v), v),
                AxisSelection::LrNeg => self.commit_pair(1.0 - self.lrs.lr_neg * v, v),
                _ => {
                    self.params.specificity = v;
                    self.refresh_lrs();
                    EditOutcome::Committed
                }
            },
            Edit::LrPos(v) => {
                if matches!(axis, AxisSelection::LrPos | AxisSelection::LrNeg) {
                    return EditOutcome::Rejected(RejectReason::AxisPinned);
                }
                self.commit_inverse(v, self.lrs.lr_neg)
            }
            Edit::LrNeg(v) => {
                if matches!(axis, AxisSelection::LrPos | AxisSelection::LrNeg) {
                    return EditOutcome::Rejected(RejectReason::AxisPinned);
                }
                self.commit_inverse(self.lrs.lr_pos, v)
            }
        }
    }

    /// Commits a sensitivity/specificity pair where one side was just derived
    /// to preserve a pinned ratio. Both ratios are refreshed from the pair so
    /// the non-pinned display tracks the edit.
    fn commit_pair(&mut self, sensitivity: f64, specificity: f64) -> EditOutcome {
        if !in_unit_interval(sensitivity) || !in_unit_interval(specificity) {
            return EditOutcome::Rejected(RejectReason::CounterpartOutOfRange);
        }
        self.params.sensitivity = sensitivity;
        self.params.specificity = specificity;
        self.refresh_lrs();
        EditOutcome::Committed
    }

    /// Default-mode LR edit: invert the candidate pair and commit only if both
    /// outputs land in [0,1].
    fn commit_inverse(&mut self, lr_pos: f64, lr_neg: f64) -> EditOutcome {
        if lr_pos == lr_neg {
            return EditOutcome::Rejected(RejectReason::IllDefinedInverse);
        }
        let solved = sens_spec_from_lr(lr_pos, lr_neg);
        if !in_unit_interval(solved.sensitivity) || !in_unit_interval(solved.specificity) {
            return EditOutcome::Rejected(RejectReason::CounterpartOutOfRange);
        }
        self.params.sensitivity = solved.sensitivity;
        self.params.specificity = solved.specificity;
        self.lrs = LikelihoodRatios { lr_pos, lr_neg };
        EditOutcome::Committed
    }

    fn refresh_lrs(&mut self) {
        self.lrs = likelihood_ratios_from(self.params.sensitivity, self.params.specificity);
    }
}

fn in_unit_interval(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

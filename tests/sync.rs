use kira_dxcalc::engine::ClinicalParams;
use kira_dxcalc::engine::bayes::likelihood_ratios_from;
use kira_dxcalc::engine::sync::{Edit, EditOutcome, ParamStore, RejectReason};
use kira_dxcalc::sweep::AxisSelection;

fn store(prevalence: f64, sensitivity: f64, specificity: f64) -> ParamStore {
    ParamStore::new(ClinicalParams {
        prevalence,
        sensitivity,
        specificity,
    })
}

#[test]
fn new_store_derives_ratios() {
    let s = store(0.05, 0.9, 0.9);
    let lrs = s.likelihood_ratios();
    assert!((lrs.lr_pos - 9.0).abs() < 1e-12);
    assert!((lrs.lr_neg - 1.0 / 9.0).abs() < 1e-12);
}

#[test]
fn sensitivity_edit_refreshes_ratios() {
    let mut s = store(0.05, 0.9, 0.9);
    let outcome = s
        .apply_edit(Edit::Sensitivity(0.8), AxisSelection::Prevalence)
        .unwrap();
    assert!(outcome.is_committed());
    assert!((s.params().sensitivity - 0.8).abs() < 1e-12);
    let lrs = s.likelihood_ratios();
    assert!((lrs.lr_pos - 8.0).abs() < 1e-12);
    assert!((lrs.lr_neg - 0.2 / 0.9).abs() < 1e-12);
}

#[test]
fn prevalence_edit_leaves_accuracy_untouched() {
    let mut s = store(0.05, 0.9, 0.9);
    let before = s.likelihood_ratios();
    s.apply_edit(Edit::Prevalence(0.2), AxisSelection::Sensitivity)
        .unwrap();
    assert!((s.params().prevalence - 0.2).abs() < 1e-12);
    assert_eq!(s.likelihood_ratios(), before);
}

#[test]
fn valid_lr_edit_commits_inverse() {
    let mut s = store(0.05, 0.9, 0.9);
    let outcome = s
        .apply_edit(Edit::LrPos(4.0), AxisSelection::Prevalence)
        .unwrap();
    assert!(outcome.is_committed());
    let params = s.params();
    assert!(params.sensitivity > 0.0 && params.sensitivity < 1.0);
    assert!(params.specificity > 0.0 && params.specificity < 1.0);
    let rederived = likelihood_ratios_from(params.sensitivity, params.specificity);
    assert!((rederived.lr_pos - 4.0).abs() < 1e-9);
}

#[test]
fn invalid_lr_edit_is_rejected_and_state_retained() {
    let mut s = store(0.05, 0.9, 0.9);
    let before_params = s.params();
    let before_lrs = s.likelihood_ratios();
    let outcome = s
        .apply_edit(Edit::LrPos(0.05), AxisSelection::Prevalence)
        .unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Rejected(RejectReason::CounterpartOutOfRange)
    );
    assert_eq!(s.params(), before_params);
    assert_eq!(s.likelihood_ratios(), before_lrs);
}

#[test]
fn equal_ratios_edit_is_ill_defined() {
    let mut s = store(0.5, 0.5, 0.5); // both ratios exactly 1
    let outcome = s
        .apply_edit(Edit::LrPos(1.0), AxisSelection::Prevalence)
        .unwrap();
    assert_eq!(outcome, EditOutcome::Rejected(RejectReason::IllDefinedInverse));
}

#[test]
fn pinned_lr_pos_preserves_ratio_on_sensitivity_edit() {
    let mut s = store(0.05, 0.9, 0.9); // LR+ pinned at 9
    let outcome = s
        .apply_edit(Edit::Sensitivity(0.45), AxisSelection::LrPos)
        .unwrap();
    assert!(outcome.is_committed());
    let params = s.params();
    assert!((params.specificity - 0.95).abs() < 1e-12);
    assert!((s.likelihood_ratios().lr_pos - 9.0).abs() < 1e-9);
}

#[test]
fn pinned_lr_pos_preserves_ratio_on_specificity_edit() {
    let mut s = store(0.05, 0.9, 0.9);
    let outcome = s
        .apply_edit(Edit::Specificity(0.95), AxisSelection::LrPos)
        .unwrap();
    assert!(outcome.is_committed());
    let params = s.params();
    assert!((params.sensitivity - 0.45).abs() < 1e-12);
    assert!((s.likelihood_ratios().lr_pos - 9.0).abs() < 1e-9);
}

#[test]
fn pinned_lr_neg_rejects_impossible_counterpart() {
    let mut s = store(0.05, 0.2, 0.9); // LR- pinned at 0.8/0.9
    let before = s.params();
    let outcome = s
        .apply_edit(Edit::Sensitivity(0.05), AxisSelection::LrNeg)
        .unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Rejected(RejectReason::CounterpartOutOfRange)
    );
    assert_eq!(s.params(), before);
}

#[test]
fn lr_edits_rejected_while_lr_axis_pinned() {
    let mut s = store(0.05, 0.9, 0.9);
    let outcome = s.apply_edit(Edit::LrPos(4.0), AxisSelection::LrPos).unwrap();
    assert_eq!(outcome, EditOutcome::Rejected(RejectReason::AxisPinned));
    let outcome = s.apply_edit(Edit::LrNeg(0.5), AxisSelection::LrNeg).unwrap();
    assert_eq!(outcome, EditOutcome::Rejected(RejectReason::AxisPinned));
}

#[test]
fn displayed_ratios_always_rederivable() {
    // After any committed sequence, ratios derived from the held pair match
    // the displayed ratios within display rounding.
    let mut s = store(0.05, 0.9, 0.9);
    let edits = [
        (Edit::Sensitivity(0.7), AxisSelection::Prevalence),
        (Edit::LrPos(4.0), AxisSelection::Prevalence),
        (Edit::Specificity(0.6), AxisSelection::Specificity),
        (Edit::Sensitivity(0.45), AxisSelection::LrPos),
        (Edit::Specificity(0.8), AxisSelection::LrNeg),
        (Edit::Prevalence(0.3), AxisSelection::LrPos),
    ];
    for (edit, axis) in edits {
        let _ = s.apply_edit(edit, axis).unwrap();
        let params = s.params();
        let rederived = likelihood_ratios_from(params.sensitivity, params.specificity);
        let shown = s.likelihood_ratios();
        assert!((rederived.lr_pos - shown.lr_pos).abs() < 0.005);
        assert!((rederived.lr_neg - shown.lr_neg).abs() < 0.005);
    }
}

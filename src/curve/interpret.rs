//! Natural-language readout of the analyzed curves, one paragraph per
//! recompute. Consumed verbatim by the renderer's interpretation panel.

use crate::curve::CurveSummary;
use crate::engine::format::{fixed2, percent0, to_significant_figures};
use crate::sweep::generate::{LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::sweep::{AxisSelection, SweepResult};

/// Per-series analysis, aligned with `SweepResult::series` by label.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub label: String,
    pub summary: CurveSummary,
}

pub fn narrative(axis: AxisSelection, sweep: &SweepResult, summaries: &[SeriesSummary]) -> String {
    let positive = find_summary(summaries, LABEL_POSITIVE);
    let negative = find_summary(summaries, LABEL_NEGATIVE);
    let negative_values: Vec<f64> = sweep
        .series
        .iter()
        .find(|s| s.label == LABEL_NEGATIVE)
        .map(|s| s.points.iter().map(|p| p.y).collect())
        .unwrap_or_default();

    let Some(pos) = positive else {
        return negative_only(axis, negative);
    };

    match axis {
        AxisSelection::Prevalence => prevalence_text(pos, &negative_values),
        AxisSelection::Sensitivity => sensitivity_text(pos, &negative_values),
        AxisSelection::Specificity => specificity_text(pos, &negative_values),
        AxisSelection::LrPos => lr_pos_text(pos, &negative_values),
        AxisSelection::LrNeg => lr_neg_text(pos, &negative_values),
    }
}

fn prevalence_text(pos: &CurveSummary, neg_values: &[f64]) -> String {
    let mut text = format!(
        "The positive test curve shows its steepest change around prevalence {} (at {} probability). ",
        to_significant_figures(pos.inflection.x, 2),
        percent0(pos.inflection.y)
    );

    if pos.has_low_plateau && pos.has_high_plateau {
        text.push_str(&format!(
            "The curve plateaus at both extremes: near {} at low prevalence and {} at high prevalence. ",
            percent0(pos.low_plateau_value),
            percent0(pos.high_plateau_value)
        ));
    } else if pos.has_high_plateau {
        text.push_str(&format!(
            "At high prevalence, the curve plateaus near {}. ",
            percent0(pos.high_plateau_value)
        ));
    } else if pos.has_low_plateau {
        text.push_str(&format!(
            "At low prevalence, the curve plateaus near {}. ",
            percent0(pos.low_plateau_value)
        ));
    }

    if let Some(max) = max_of(neg_values) {
        text.push_str(&format!(
            "A negative test keeps probability below {} across all prevalence values.",
            percent0(max)
        ));
    }
    text
}

fn sensitivity_text(pos: &CurveSummary, neg_values: &[f64]) -> String {
    let mut text = format!(
        "Post-test probability changes most rapidly around sensitivity {}. ",
        fixed2(pos.inflection.x)
    );

    if pos.has_high_plateau {
        text.push_str(&format!(
            "Above this point, increasing sensitivity yields diminishing returns as probability plateaus near {}. ",
            percent0(pos.high_plateau_value)
        ));
    }

    if let (Some(first), Some(last)) = (neg_values.first(), neg_values.last()) {
        text.push_str(&format!(
            "Negative test probability drops from {} to {} as sensitivity increases.",
            percent0(*first),
            percent0(*last)
        ));
    }
    text
}

fn specificity_text(pos: &CurveSummary, neg_values: &[f64]) -> String {
    let mut text = format!(
        "The positive test curve inflects near specificity {} ({} probability). ",
        fixed2(pos.inflection.x),
        percent0(pos.inflection.y)
    );

    if pos.has_low_plateau {
        text.push_str(&format!(
            "At low specificity, false positives dominate and probability plateaus near {}. ",
            percent0(pos.low_plateau_value)
        ));
    }
    if pos.has_high_plateau {
        text.push_str(&format!(
            "High specificity (>0.95) offers diminishing returns as the curve flattens near {}. ",
            percent0(pos.high_plateau_value)
        ));
    }

    if !neg_values.is_empty() {
        let mid = neg_values[neg_values.len() / 2];
        text.push_str(&format!(
            "Negative test probability remains stable around {}.",
            percent0(mid)
        ));
    }
    text
}

fn lr_pos_text(pos: &CurveSummary, neg_values: &[f64]) -> String {
    let mut text = format!(
        "Post-test probability climbs most steeply near LR+ {} (at {} probability). ",
        to_significant_figures(pos.inflection.x, 2),
        percent0(pos.inflection.y)
    );

    if pos.has_high_plateau {
        text.push_str(&format!(
            "Beyond this ratio, a stronger positive result adds little as the curve flattens near {}. ",
            percent0(pos.high_plateau_value)
        ));
    }
    if pos.has_low_plateau {
        text.push_str(&format!(
            "Weak ratios leave probability pinned near {}. ",
            percent0(pos.low_plateau_value)
        ));
    }

    if let Some(max) = max_of(neg_values) {
        text.push_str(&format!(
            "A negative test keeps probability below {} across this LR+ range.",
            percent0(max)
        ));
    }
    text
}

fn lr_neg_text(pos: &CurveSummary, neg_values: &[f64]) -> String {
    let mut text = format!(
        "The positive test curve changes most rapidly near LR- {}. ",
        to_significant_figures(pos.inflection.x, 2)
    );

    if let (Some(min), Some(max)) = (min_of(neg_values), max_of(neg_values)) {
        text.push_str(&format!(
            "Negative test probability spans {} to {} across this LR- range: the smaller the ratio, the more a negative result rules disease out.",
            percent0(min),
            percent0(max)
        ));
    }
    text
}

fn negative_only(axis: AxisSelection, negative: Option<&CurveSummary>) -> String {
    let Some(neg) = negative else {
        return String::new();
    };
    format!(
        "The negative test curve shows its steepest change around {} {} (at {} probability).",
        axis.label().to_lowercase(),
        to_significant_figures(neg.inflection.x, 2),
        percent0(neg.inflection.y)
    )
}

fn find_summary<'a>(summaries: &'a [SeriesSummary], label: &str) -> Option<&'a CurveSummary> {
    summaries
        .iter()
        .find(|s| s.label == label)
        .map(|s| &s.summary)
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn min_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

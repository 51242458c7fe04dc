use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::engine::TestOutcome;
use crate::schema::v1::{AxisV1, CurveSummaryV1, DxCalcV1, ParamsV1, PointV1, SeriesV1};

pub fn build_report(ctx: &Ctx) -> Result<DxCalcV1> {
    let sweep = ctx.sweep.as_ref().context("sweep result missing")?;
    let params = ctx.store.params();
    let lrs = ctx.store.likelihood_ratios();

    let series = sweep
        .series
        .iter()
        .map(|s| SeriesV1 {
            label: s.label.clone(),
            points: s
                .points
                .iter()
                .map(|p| PointV1 { x: p.x, y: p.y })
                .collect(),
        })
        .collect::<Vec<_>>();

    let curve_summaries = ctx
        .summaries
        .iter()
        .map(|s| CurveSummaryV1 {
            series: s.label.clone(),
            inflection_x: s.summary.inflection.x,
            inflection_y: s.summary.inflection.y,
            has_low_plateau: s.summary.has_low_plateau,
            has_high_plateau: s.summary.has_high_plateau,
            low_plateau_value: s.summary.low_plateau_value,
            high_plateau_value: s.summary.high_plateau_value,
        })
        .collect::<Vec<_>>();

    let outcome = ctx.outcome.map(|o| {
        match o {
            TestOutcome::Positive => "positive",
            TestOutcome::Negative => "negative",
        }
        .to_string()
    });

    Ok(DxCalcV1 {
        tool: "kira-dxcalc".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        variant: ctx.variant.name().to_string(),
        params: ParamsV1 {
            prevalence: params.prevalence,
            sensitivity: params.sensitivity,
            specificity: params.specificity,
            lr_pos: lrs.lr_pos,
            lr_neg: lrs.lr_neg,
        },
        outcome,
        axis: AxisV1 {
            axis: ctx.axis.key().to_string(),
            x_label: sweep.x_label.clone(),
            log_scale: sweep.is_log_scale,
            samples: sweep.x_values.len() as u64,
        },
        x_values: sweep.x_values.clone(),
        series,
        curve_summaries,
        interpretation: ctx.interpretation.clone(),
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::curve::analyze::analyze_curve;
use crate::curve::interpret::{SeriesSummary, narrative};
use crate::pipeline::Stage;

pub struct Stage3Analyze;

impl Stage3Analyze {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Analyze {
    fn name(&self) -> &'static str {
        "stage3_analyze"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sweep = ctx
            .sweep
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("sweep result missing"))?;

        let mut summaries = Vec::with_capacity(sweep.series.len());
        for series in &sweep.series {
            let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = series.points.iter().map(|p| p.y).collect();
            let summary = analyze_curve(&xs, &ys)?;
            summaries.push(SeriesSummary {
                label: series.label.clone(),
                summary,
            });
        }

        ctx.interpretation = Some(narrative(ctx.axis, sweep, &summaries));
        ctx.summaries = summaries;
        info!(curves = ctx.summaries.len(), "curves_analyzed");
        Ok(())
    }
}

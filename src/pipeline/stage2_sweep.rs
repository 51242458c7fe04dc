use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::sweep::domain::SAMPLES_PER_SWEEP;
use crate::sweep::generate::generate_sweep;

pub struct Stage2Sweep;

impl Stage2Sweep {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Sweep {
    fn name(&self) -> &'static str {
        "stage2_sweep"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sweep = generate_sweep(&ctx.store.params(), ctx.axis, ctx.outcome, &ctx.config);

        for series in &sweep.series {
            let excluded = SAMPLES_PER_SWEEP - series.points.len();
            if excluded > 0 {
                ctx.warnings.push(format!(
                    "{}: {} of {} samples outside the valid domain",
                    series.label, excluded, SAMPLES_PER_SWEEP
                ));
            }
        }

        info!(
            axis = ctx.axis.key(),
            series = sweep.series.len(),
            log_scale = sweep.is_log_scale,
            "sweep_ready"
        );
        ctx.sweep = Some(sweep);
        Ok(())
    }
}

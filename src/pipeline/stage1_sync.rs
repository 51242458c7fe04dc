use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::engine::sync::EditOutcome;
use crate::pipeline::Stage;

pub struct Stage1Sync;

impl Stage1Sync {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Sync {
    fn name(&self) -> &'static str {
        "stage1_sync"
    }

    /// Plays the queued edits through the synchronizer. The interactive UI
    /// drops a rejected edit silently and keeps the sliders; a one-shot CLI
    /// invocation has no slider to fall back on, so a rejection is an error
    /// here.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let edits = std::mem::take(&mut ctx.pending_edits);
        for edit in edits {
            match ctx.store.apply_edit(edit, ctx.axis)? {
                EditOutcome::Committed => {}
                EditOutcome::Rejected(reason) => {
                    bail!("edit {:?} rejected: {:?}", edit, reason);
                }
            }
        }

        let params = ctx.store.params();
        let lrs = ctx.store.likelihood_ratios();
        info!(
            prevalence = params.prevalence,
            sensitivity = params.sensitivity,
            specificity = params.specificity,
            lr_pos = lrs.lr_pos,
            lr_neg = lrs.lr_neg,
            "parameters reconciled"
        );
        Ok(())
    }
}

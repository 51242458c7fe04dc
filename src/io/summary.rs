use anyhow::Result;

use crate::ctx::Ctx;
use crate::engine::format::{fixed2, percent0, to_significant_figures};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let params = ctx.store.params();
    let lrs = ctx.store.likelihood_ratios();

    let mut out = String::new();
    out.push_str(&format!("kira-dxcalc v{}\n", version));
    out.push_str(&format!(
        "Variant: {}, axis: {}\n",
        ctx.variant.name(),
        ctx.axis.key()
    ));
    out.push_str(&format!(
        "Prevalence: {}, sensitivity: {}, specificity: {}\n",
        to_significant_figures(params.prevalence, 3),
        fixed2(params.sensitivity),
        fixed2(params.specificity)
    ));
    out.push_str(&format!(
        "LR+: {}, LR-: {}\n",
        fixed2(lrs.lr_pos),
        fixed2(lrs.lr_neg)
    ));

    for s in &ctx.summaries {
        let mut plateaus = Vec::new();
        if s.summary.has_low_plateau {
            plateaus.push(format!("low near {}", percent0(s.summary.low_plateau_value)));
        }
        if s.summary.has_high_plateau {
            plateaus.push(format!(
                "high near {}",
                percent0(s.summary.high_plateau_value)
            ));
        }
        let plateau_text = if plateaus.is_empty() {
            "none".to_string()
        } else {
            plateaus.join(", ")
        };
        out.push_str(&format!(
            "{}: steepest at x={} (y={}), plateaus: {}\n",
            s.label,
            to_significant_figures(s.summary.inflection.x, 3),
            percent0(s.summary.inflection.y),
            plateau_text
        ));
    }

    if let Some(text) = &ctx.interpretation {
        out.push_str(&format!("Interpretation: {}\n", text));
    }

    Ok(out)
}

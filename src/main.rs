use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_dxcalc::cli::{AxisArg, Cli, Commands, EvalArgs, OutcomeArg, RunArgs, ValidateArgs, VariantArg};
use kira_dxcalc::config::Variant;
use kira_dxcalc::ctx::Ctx;
use kira_dxcalc::engine::bayes::{
    bayes_update, likelihood_ratios_from, predictive_values, sens_spec_from_lr,
};
use kira_dxcalc::engine::format::{fixed2, to_significant_figures};
use kira_dxcalc::engine::sync::{Edit, EditOutcome, ParamStore};
use kira_dxcalc::engine::{ClinicalParams, TestOutcome};
use kira_dxcalc::io;
use kira_dxcalc::pipeline::Pipeline;
use kira_dxcalc::pipeline::stage0_scaffold::Stage0Scaffold;
use kira_dxcalc::pipeline::stage1_sync::Stage1Sync;
use kira_dxcalc::pipeline::stage2_sweep::Stage2Sweep;
use kira_dxcalc::pipeline::stage3_analyze::Stage3Analyze;
use kira_dxcalc::pipeline::stage4_output::Stage4Output;
use kira_dxcalc::sweep::AxisSelection;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Eval(args) => eval(args),
        Commands::Validate(args) => validate(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let variant = map_variant(args.variant);
    let config = variant.config();
    let axis = map_axis(args.axis);

    check_probability("prevalence", args.prevalence)?;
    check_probability("sensitivity", args.sensitivity)?;
    check_probability("specificity", args.specificity)?;

    if axis.is_likelihood_ratio() && !config.has_likelihood_ratio_axes {
        bail!(
            "axis {} requires a likelihood-ratio variant (--variant likelihood or likelihood-dynamic)",
            axis.key()
        );
    }
    if args.outcome.is_some() && !config.has_explicit_outcome_selector {
        bail!("--outcome requires a variant with an outcome selector (--variant predictive)");
    }

    let params = ClinicalParams {
        prevalence: args.prevalence,
        sensitivity: args.sensitivity,
        specificity: args.specificity,
    };
    let mut ctx = Ctx::new(
        variant,
        axis,
        args.outcome.map(map_outcome),
        params,
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    if let Some(v) = args.lr_pos {
        ctx.pending_edits.push(Edit::LrPos(v));
    }
    if let Some(v) = args.lr_neg {
        ctx.pending_edits.push(Edit::LrNeg(v));
    }

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Sync::new()),
        Box::new(Stage2Sweep::new()),
        Box::new(Stage3Analyze::new()),
        Box::new(Stage4Output::new()),
    ]);
    pipeline.run(&mut ctx)?;

    print_summary(&ctx)?;
    Ok(())
}

fn eval(args: EvalArgs) -> Result<()> {
    let variant = map_variant(args.variant);
    let config = variant.config();

    check_probability("prevalence", args.prevalence)?;
    check_probability("sensitivity", args.sensitivity)?;
    check_probability("specificity", args.specificity)?;

    let mut store = ParamStore::new(ClinicalParams {
        prevalence: args.prevalence,
        sensitivity: args.sensitivity,
        specificity: args.specificity,
    });
    if let Some(v) = args.lr_pos {
        apply_or_bail(&mut store, Edit::LrPos(v))?;
    }
    if let Some(v) = args.lr_neg {
        apply_or_bail(&mut store, Edit::LrNeg(v))?;
    }

    let params = store.params();
    let lrs = store.likelihood_ratios();
    let p_pos = bayes_update(
        params.prevalence,
        params.sensitivity,
        params.specificity,
        TestOutcome::Positive,
    );
    let p_neg = bayes_update(
        params.prevalence,
        params.sensitivity,
        params.specificity,
        TestOutcome::Negative,
    );

    println!("kira-dxcalc v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "Prevalence: {}, sensitivity: {}, specificity: {}",
        to_significant_figures(params.prevalence, 3),
        fixed2(params.sensitivity),
        fixed2(params.specificity)
    );
    println!("LR+: {}, LR-: {}", fixed2(lrs.lr_pos), fixed2(lrs.lr_neg));
    println!(
        "P(disease | positive): {}",
        to_significant_figures(p_pos, 3)
    );
    println!(
        "P(disease | negative): {}",
        to_significant_figures(p_neg, 3)
    );
    if config.has_predictive_values {
        let pv = predictive_values(params.prevalence, params.sensitivity, params.specificity);
        println!("PPV: {}", to_significant_figures(pv.ppv, 3));
        println!("NPV: {}", to_significant_figures(pv.npv, 3));
    }
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    check_probability("prevalence", args.prevalence)?;
    check_probability("sensitivity", args.sensitivity)?;
    check_probability("specificity", args.specificity)?;

    let lrs = likelihood_ratios_from(args.sensitivity, args.specificity);
    let solved = sens_spec_from_lr(lrs.lr_pos, lrs.lr_neg);

    println!("kira-dxcalc validate ok");
    println!("LR+: {}, LR-: {}", fixed2(lrs.lr_pos), fixed2(lrs.lr_neg));
    println!(
        "roundtrip: sensitivity {}, specificity {}",
        fixed2(solved.sensitivity),
        fixed2(solved.specificity)
    );

    let mut warnings = Vec::new();
    if args.specificity > 0.99 {
        warnings.push("specificity near 1: LR+ is close to divergent".to_string());
    }
    if args.sensitivity > 0.99 {
        warnings.push("sensitivity near 1: LR- is close to 0".to_string());
    }
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in &warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn apply_or_bail(store: &mut ParamStore, edit: Edit) -> Result<()> {
    match store.apply_edit(edit, AxisSelection::Prevalence)? {
        EditOutcome::Committed => Ok(()),
        EditOutcome::Rejected(reason) => bail!("edit {:?} rejected: {:?}", edit, reason),
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        bail!("{} must be inside (0,1) exclusive, got {}", name, value);
    }
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn map_variant(arg: VariantArg) -> Variant {
    match arg {
        VariantArg::Classic => Variant::Classic,
        VariantArg::LogPrevalence => Variant::LogPrevalence,
        VariantArg::Likelihood => Variant::Likelihood,
        VariantArg::LikelihoodDynamic => Variant::LikelihoodDynamic,
        VariantArg::Predictive => Variant::Predictive,
    }
}

fn map_axis(arg: AxisArg) -> AxisSelection {
    match arg {
        AxisArg::Prevalence => AxisSelection::Prevalence,
        AxisArg::Sensitivity => AxisSelection::Sensitivity,
        AxisArg::Specificity => AxisSelection::Specificity,
        AxisArg::LrPos => AxisSelection::LrPos,
        AxisArg::LrNeg => AxisSelection::LrNeg,
    }
}

fn map_outcome(arg: OutcomeArg) -> TestOutcome {
    match arg {
        OutcomeArg::Positive => TestOutcome::Positive,
        OutcomeArg::Negative => TestOutcome::Negative,
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kira-dxcalc", version, about = "Diagnostic test probability CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Eval(EvalArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, value_enum, default_value_t = VariantArg::LogPrevalence)]
    pub variant: VariantArg,

    #[arg(long, value_enum, default_value_t = AxisArg::Prevalence)]
    pub axis: AxisArg,

    #[arg(long, default_value_t = 0.05)]
    pub prevalence: f64,

    #[arg(long, default_value_t = 0.9)]
    pub sensitivity: f64,

    #[arg(long, default_value_t = 0.9)]
    pub specificity: f64,

    #[arg(long, help = "Override LR+ (sensitivity/specificity re-derived)")]
    pub lr_pos: Option<f64>,

    #[arg(long, help = "Override LR- (sensitivity/specificity re-derived)")]
    pub lr_neg: Option<f64>,

    #[arg(long, value_enum, help = "Plot a single test outcome (outcome-selector variants)")]
    pub outcome: Option<OutcomeArg>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    #[arg(long, value_enum, default_value_t = VariantArg::LogPrevalence)]
    pub variant: VariantArg,

    #[arg(long)]
    pub prevalence: f64,

    #[arg(long)]
    pub sensitivity: f64,

    #[arg(long)]
    pub specificity: f64,

    #[arg(long, help = "Override LR+ (sensitivity/specificity re-derived)")]
    pub lr_pos: Option<f64>,

    #[arg(long, help = "Override LR- (sensitivity/specificity re-derived)")]
    pub lr_neg: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub prevalence: f64,

    #[arg(long)]
    pub sensitivity: f64,

    #[arg(long)]
    pub specificity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Classic,
    LogPrevalence,
    Likelihood,
    LikelihoodDynamic,
    Predictive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Prevalence,
    Sensitivity,
    Specificity,
    LrPos,
    LrNeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutcomeArg {
    Positive,
    Negative,
}

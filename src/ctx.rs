use std::path::PathBuf;

use crate::config::{FeatureConfig, Variant};
use crate::curve::interpret::SeriesSummary;
use crate::engine::sync::{Edit, ParamStore};
use crate::engine::{ClinicalParams, TestOutcome};
use crate::schema::v1::DxCalcV1;
use crate::sweep::{AxisSelection, SweepResult};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// State for one recompute cycle. Everything here is rebuilt per cycle except
/// the slider-held values inside `store`, which are the only state that
/// outlives an input event.
#[derive(Debug)]
pub struct Ctx {
    pub variant: Variant,
    pub config: FeatureConfig,
    pub axis: AxisSelection,
    pub outcome: Option<TestOutcome>,
    pub store: ParamStore,
    /// Edits to play through the synchronizer before sweeping, in order.
    pub pending_edits: Vec<Edit>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub warnings: Vec<String>,
    pub sweep: Option<SweepResult>,
    pub summaries: Vec<SeriesSummary>,
    pub interpretation: Option<String>,
    pub output: OutputPaths,
    pub report: DxCalcV1,
}

impl Ctx {
    pub fn new(
        variant: Variant,
        axis: AxisSelection,
        outcome: Option<TestOutcome>,
        params: ClinicalParams,
        out_dir: PathBuf,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("dxcalc.json");
        let tsv_path = out_dir.join("dxcalc.tsv");
        let report = DxCalcV1::empty(tool_version, variant.name());
        Self {
            variant,
            config: variant.config(),
            axis,
            outcome,
            store: ParamStore::new(params),
            pending_edits: Vec::new(),
            write_json,
            write_tsv,
            warnings: Vec::new(),
            sweep: None,
            summaries: Vec::new(),
            interpretation: None,
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }
}

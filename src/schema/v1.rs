use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsV1 {
    pub prevalence: f64,
    pub sensitivity: f64,
    pub specificity: f64,
    pub lr_pos: f64,
    pub lr_neg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisV1 {
    pub axis: String,
    pub x_label: String,
    pub log_scale: bool,
    pub samples: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointV1 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesV1 {
    pub label: String,
    pub points: Vec<PointV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSummaryV1 {
    pub series: String,
    pub inflection_x: f64,
    pub inflection_y: f64,
    pub has_low_plateau: bool,
    pub has_high_plateau: bool,
    pub low_plateau_value: f64,
    pub high_plateau_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DxCalcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub variant: String,
    pub params: ParamsV1,
    pub outcome: Option<String>,
    pub axis: AxisV1,
    pub x_values: Vec<f64>,
    pub series: Vec<SeriesV1>,
    pub curve_summaries: Vec<CurveSummaryV1>,
    pub interpretation: Option<String>,
    pub warnings: Vec<String>,
}

impl DxCalcV1 {
    pub fn empty(tool_version: &str, variant: &str) -> Self {
        Self {
            tool: "kira-dxcalc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            variant: variant.to_string(),
            params: ParamsV1 {
                prevalence: 0.0,
                sensitivity: 0.0,
                specificity: 0.0,
                lr_pos: 0.0,
                lr_neg: 0.0,
            },
            outcome: None,
            axis: AxisV1 {
                axis: String::new(),
                x_label: String::new(),
                log_scale: false,
                samples: 0,
            },
            x_values: Vec::new(),
            series: Vec::new(),
            curve_summaries: Vec::new(),
            interpretation: None,
            warnings: Vec::new(),
        }
    }
}

//! Display rounding. Presentation only; computation stays full precision.

/// Round to `sig_figs` significant figures and render without trailing zeros.
/// Prevalence displays use 3 significant figures so small probabilities on a
/// log axis stay readable.
pub fn to_significant_figures(value: f64, sig_figs: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(sig_figs as i32 - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    format!("{}", rounded)
}

/// Fixed two-decimal rendering used for sensitivity, specificity and both
/// likelihood ratios.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Whole-percent rendering for probability phrases.
pub fn percent0(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

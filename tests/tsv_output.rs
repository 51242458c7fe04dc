use std::fs;

use kira_dxcalc::config::Variant;
use kira_dxcalc::ctx::Ctx;
use kira_dxcalc::engine::ClinicalParams;
use kira_dxcalc::io::tsv_writer::write_tsv;
use kira_dxcalc::pipeline::Stage;
use kira_dxcalc::pipeline::stage1_sync::Stage1Sync;
use kira_dxcalc::pipeline::stage2_sweep::Stage2Sweep;
use kira_dxcalc::sweep::AxisSelection;
use tempfile::TempDir;

fn make_ctx(variant: Variant, axis: AxisSelection, out_dir: std::path::PathBuf) -> Ctx {
    Ctx::new(
        variant,
        axis,
        None,
        ClinicalParams {
            prevalence: 0.05,
            sensitivity: 0.9,
            specificity: 0.9,
        },
        out_dir,
        false,
        true,
        "0.0.0-test",
    )
}

#[test]
fn tsv_row_per_grid_sample() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dxcalc.tsv");

    let mut ctx = make_ctx(
        Variant::LogPrevalence,
        AxisSelection::Prevalence,
        tmp.path().to_path_buf(),
    );
    Stage1Sync::new().run(&mut ctx).unwrap();
    Stage2Sweep::new().run(&mut ctx).unwrap();

    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "x\tpositive_test_result\tnegative_test_result");
    assert!(!content.contains("NA"));
}

#[test]
fn excluded_samples_written_as_na() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dxcalc.tsv");

    // Fixed-bounds LR+ sweep with sensitivity 0.9 leaves the low end of the
    // domain invalid.
    let mut ctx = make_ctx(
        Variant::Likelihood,
        AxisSelection::LrPos,
        tmp.path().to_path_buf(),
    );
    Stage1Sync::new().run(&mut ctx).unwrap();
    Stage2Sweep::new().run(&mut ctx).unwrap();

    write_tsv(&path, &ctx).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("NA"));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 101);
}

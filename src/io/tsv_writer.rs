use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

/// One row per grid sample: x then one column per series. Excluded samples
/// are written as NA, never as zero.
pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let sweep = ctx.sweep.as_ref().context("sweep result missing")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let mut header = vec!["x".to_string()];
    for series in &sweep.series {
        header.push(series.label.replace(' ', "_").to_lowercase());
    }
    writeln!(w, "{}", header.join("\t"))?;

    // Each series keeps grid order, so a cursor per series suffices.
    let mut cursors = vec![0usize; sweep.series.len()];
    for &x in &sweep.x_values {
        let mut row = vec![format!("{:.6}", x)];
        for (series, cursor) in sweep.series.iter().zip(cursors.iter_mut()) {
            match series.points.get(*cursor) {
                Some(p) if p.x == x => {
                    row.push(format!("{:.6}", p.y));
                    *cursor += 1;
                }
                _ => row.push("NA".to_string()),
            }
        }
        writeln!(w, "{}", row.join("\t"))?;
    }

    Ok(())
}

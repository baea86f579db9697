use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;
use crate::schema::v1::{Mode, Vitals};
use crate::scores::RiskResult;

pub const HEADER: &str = "record_date\theart_rate\tsystolic\tdiastolic\toxygen_saturation\tbmi\trisk_score\trisk_factors";

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", HEADER)?;
    match ctx.mode {
        Mode::Analyze => {
            let vitals = ctx.vitals.as_ref().context("vitals missing")?;
            ensure_len(ctx.record_scores.len(), 1, "record_scores")?;
            write_row(&mut w, "", vitals, &ctx.record_scores[0])?;
        }
        Mode::Longitudinal => {
            ensure_len(ctx.record_scores.len(), ctx.records.len(), "record_scores")?;
            for (rec, score) in ctx.records.iter().zip(ctx.record_scores.iter()) {
                write_row(&mut w, &rec.record_date.to_rfc3339(), &rec.vitals, score)?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

fn write_row<W: Write>(w: &mut W, date: &str, v: &Vitals, score: &RiskResult) -> Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        date,
        opt_int(v.heart_rate),
        opt_int(v.systolic),
        opt_int(v.diastolic),
        opt_float(v.oxygen_saturation),
        opt_float(v.bmi),
        score.risk_score,
        score.risk_factors.join(";")
    )?;
    Ok(())
}

fn opt_int(v: Option<i64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn opt_float(v: Option<f64>) -> String {
    v.map(|x| format!("{:.2}", x)).unwrap_or_default()
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}

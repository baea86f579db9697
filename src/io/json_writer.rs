use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    CardioReportV1, Explainability, InputMeta, Mode, RecordScore, RuleOutcome, SeriesFit,
};

pub fn build_report(ctx: &Ctx) -> Result<CardioReportV1> {
    let config = ctx.config.as_ref().context("scoring config missing")?;

    let input_meta = InputMeta {
        patient_id: ctx.input_meta.patient_id.clone(),
        mode: ctx.mode,
        records: ctx.input_meta.records,
    };

    let per_record = match ctx.mode {
        Mode::Analyze => ctx
            .record_scores
            .iter()
            .map(|r| RecordScore {
                record_date: None,
                risk_score: r.risk_score,
                risk_factors: r.risk_factors.clone(),
            })
            .collect::<Vec<_>>(),
        Mode::Longitudinal => ctx
            .records
            .iter()
            .zip(ctx.record_scores.iter())
            .map(|(rec, r)| RecordScore {
                record_date: Some(rec.record_date),
                risk_score: r.risk_score,
                risk_factors: r.risk_factors.clone(),
            })
            .collect::<Vec<_>>(),
    };

    let rules = ctx
        .rule_outcomes
        .iter()
        .map(|o| RuleOutcome {
            name: o.name.clone(),
            fired: o.fired,
            points: o.points,
            threshold: Some(o.threshold.clone()),
            details: o.details.clone(),
        })
        .collect::<Vec<_>>();

    let series = ctx
        .series_fits
        .iter()
        .map(|f| SeriesFit {
            series: f.series.clone(),
            points: f.points as u64,
            slope: f.slope,
            threshold: f.threshold,
            fired: f.fired,
        })
        .collect::<Vec<_>>();

    Ok(CardioReportV1 {
        tool: "cardio-sentinel".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        risk: ctx.risk.clone(),
        per_record,
        trends: ctx.trends.clone(),
        explainability: Explainability { rules, series },
        config: config.clone(),
        warnings: ctx.warnings.clone(),
    })
}

/// Writes the report already assembled in `ctx.report`.
pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    crate::io::write_json(path, &ctx.report)
}

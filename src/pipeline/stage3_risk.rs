use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::Mode;
use crate::scores::risk::{evaluate_rules, fold_outcomes};

pub struct Stage3Risk;

impl Stage3Risk {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Risk {
    fn name(&self) -> &'static str {
        "stage3_risk"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let cfg = ctx.config.as_ref().context("scoring config missing")?;

        match ctx.mode {
            Mode::Analyze => {
                let vitals = ctx.vitals.as_ref().context("vitals missing")?;
                let outcomes = evaluate_rules(vitals, cfg);
                let result = fold_outcomes(&outcomes, cfg.score_cap);
                ctx.record_scores = vec![result.clone()];
                ctx.rule_outcomes = outcomes;
                ctx.risk = Some(result);
            }
            Mode::Longitudinal => {
                let mut scores = Vec::with_capacity(ctx.records.len());
                let mut outcomes = Vec::with_capacity(ctx.records.len());
                for record in &ctx.records {
                    let rules = evaluate_rules(&record.vitals, cfg);
                    scores.push(fold_outcomes(&rules, cfg.score_cap));
                    outcomes.push(rules);
                }
                // Headline is the record with the greatest recordDate; ties go
                // to the one supplied last.
                let newest = ctx
                    .records
                    .iter()
                    .enumerate()
                    .max_by_key(|(_, r)| r.record_date)
                    .map(|(i, _)| i);
                ctx.risk = newest.map(|i| scores[i].clone());
                ctx.rule_outcomes = newest
                    .map(|i| outcomes.swap_remove(i))
                    .unwrap_or_default();
                ctx.record_scores = scores;
            }
        }

        info!(
            risk_score = ctx.risk.as_ref().map(|r| r.risk_score),
            scored = ctx.record_scores.len(),
            "risk_ready"
        );
        Ok(())
    }
}

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io;
use crate::pipeline::Stage;
use crate::schema::v1::{AnalyzeRequest, HealthRecord, LongitudinalRequest, Mode};

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        match ctx.mode {
            Mode::Analyze => {
                let req: AnalyzeRequest = io::read_json(&ctx.input)?;
                ctx.input_meta.patient_id = Some(req.patient_id);
                ctx.input_meta.records = Some(1);
                ctx.vitals = Some(req.record_data);
            }
            Mode::Longitudinal => {
                let req: LongitudinalRequest = io::read_json(&ctx.input)?;
                let warnings = check_chronology(&req.records);
                for w in &warnings {
                    warn!(warning = %w, "record order");
                }
                if req.records.is_empty() {
                    ctx.warnings.push("no records supplied".to_string());
                }
                ctx.warnings.extend(warnings);
                ctx.input_meta.patient_id = Some(req.patient_id);
                ctx.input_meta.records = Some(req.records.len() as u64);
                ctx.records = req.records;
            }
        }

        info!(
            records = ctx.input_meta.records.unwrap_or(0),
            "input_ready"
        );
        Ok(())
    }
}

/// Records are kept in the order supplied; out-of-order or repeated dates
/// only produce warnings.
pub fn check_chronology(records: &[HealthRecord]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, win) in records.windows(2).enumerate() {
        let a = &win[0];
        let b = &win[1];
        if b.record_date < a.record_date {
            warnings.push(format!(
                "record {} ({}) is older than record {} ({}); trends assume oldest first",
                i + 1,
                b.record_date.to_rfc3339(),
                i,
                a.record_date.to_rfc3339()
            ));
        } else if b.record_date == a.record_date {
            warnings.push(format!(
                "records {} and {} share recordDate {}",
                i,
                i + 1,
                a.record_date.to_rfc3339()
            ));
        }
    }
    warnings
}

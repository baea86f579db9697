use anyhow::Result;

use crate::ctx::Ctx;
use crate::schema::v1::Mode;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let patient = ctx.input_meta.patient_id.as_deref().unwrap_or("unknown");
    let records = ctx.input_meta.records.unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("cardio-sentinel v{}\n", version));
    out.push_str(&format!(
        "Patient: {}, mode={}, records={}\n",
        patient,
        ctx.mode.as_str(),
        records
    ));

    match &ctx.risk {
        Some(risk) => {
            out.push_str(&format!("Risk: {}/100\n", risk.risk_score));
            if risk.risk_factors.is_empty() {
                out.push_str("Factors: none\n");
            } else {
                out.push_str(&format!("Factors: {}\n", risk.risk_factors.join(", ")));
            }
        }
        None => out.push_str("Risk: n/a\n"),
    }

    if ctx.mode == Mode::Longitudinal {
        match &ctx.trends {
            Some(t) if !t.trends.is_empty() => {
                out.push_str(&format!("Trends: {}\n", t.trends.join(", ")));
            }
            _ => out.push_str("Trends: none\n"),
        }
    }

    Ok(out)
}

use crate::config::{MAX_SCORE, ScoringConfig};
use crate::schema::v1::Vitals;
use crate::scores::{RiskResult, RuleOutcome, gate_float, gate_int};

pub const HIGH_HEART_RATE: &str = "High resting heart rate";
pub const HYPERTENSION: &str = "Hypertension detected";
pub const LOW_OXYGEN_SATURATION: &str = "Low oxygen saturation";
pub const OBESITY: &str = "Obesity risk";

/// Scores `vitals` with the built-in thresholds.
pub fn score_risk(vitals: &Vitals) -> RiskResult {
    score_risk_with(vitals, &ScoringConfig::default())
}

pub fn score_risk_with(vitals: &Vitals, cfg: &ScoringConfig) -> RiskResult {
    let outcomes = evaluate_rules(vitals, cfg);
    fold_outcomes(&outcomes, cfg.score_cap)
}

/// Every rule in evaluation order, fired or not. Rules are independent and
/// never short-circuit each other.
pub fn evaluate_rules(vitals: &Vitals, cfg: &ScoringConfig) -> Vec<RuleOutcome> {
    vec![
        rule_heart_rate(vitals, cfg),
        rule_hypertension(vitals, cfg),
        rule_oxygen_saturation(vitals, cfg),
        rule_obesity(vitals, cfg),
    ]
}

pub fn fold_outcomes(outcomes: &[RuleOutcome], score_cap: u32) -> RiskResult {
    let mut score = 0u32;
    let mut factors = Vec::new();
    for o in outcomes.iter().filter(|o| o.fired) {
        score = score.saturating_add(o.points);
        factors.push(o.factor.to_string());
    }
    RiskResult {
        risk_score: score.min(score_cap).min(MAX_SCORE),
        risk_factors: factors,
    }
}

fn rule_heart_rate(vitals: &Vitals, cfg: &ScoringConfig) -> RuleOutcome {
    let hr = gate_int(vitals.heart_rate, cfg.zero_is_absent);
    let fired = matches!(hr, Some(v) if v > cfg.heart_rate_max);
    RuleOutcome {
        name: "high_heart_rate".to_string(),
        factor: HIGH_HEART_RATE,
        fired,
        points: cfg.heart_rate_points,
        threshold: format!("heartRate > {}", cfg.heart_rate_max),
        details: hr.map(|v| format!("heartRate={}", v)),
    }
}

fn rule_hypertension(vitals: &Vitals, cfg: &ScoringConfig) -> RuleOutcome {
    let sys = gate_int(vitals.systolic, cfg.zero_is_absent);
    let dia = gate_int(vitals.diastolic, cfg.zero_is_absent);
    // Needs both readings even though either one alone can trip it.
    let fired = match (sys, dia) {
        (Some(s), Some(d)) => s > cfg.systolic_max || d > cfg.diastolic_max,
        _ => false,
    };
    let details = match (sys, dia) {
        (None, None) => None,
        _ => Some(format!(
            "systolic={}, diastolic={}",
            fmt_opt(sys),
            fmt_opt(dia)
        )),
    };
    RuleOutcome {
        name: "hypertension".to_string(),
        factor: HYPERTENSION,
        fired,
        points: cfg.hypertension_points,
        threshold: format!(
            "systolic > {} or diastolic > {}",
            cfg.systolic_max, cfg.diastolic_max
        ),
        details,
    }
}

fn rule_oxygen_saturation(vitals: &Vitals, cfg: &ScoringConfig) -> RuleOutcome {
    let spo2 = gate_float(vitals.oxygen_saturation, cfg.zero_is_absent);
    let fired = matches!(spo2, Some(v) if v < cfg.oxygen_saturation_min);
    RuleOutcome {
        name: "low_oxygen_saturation".to_string(),
        factor: LOW_OXYGEN_SATURATION,
        fired,
        points: cfg.oxygen_saturation_points,
        threshold: format!("oxygenSaturation < {}", cfg.oxygen_saturation_min),
        details: spo2.map(|v| format!("oxygenSaturation={:.1}", v)),
    }
}

fn rule_obesity(vitals: &Vitals, cfg: &ScoringConfig) -> RuleOutcome {
    let bmi = gate_float(vitals.bmi, cfg.zero_is_absent);
    let fired = matches!(bmi, Some(v) if v > cfg.bmi_max);
    RuleOutcome {
        name: "obesity".to_string(),
        factor: OBESITY,
        fired,
        points: cfg.obesity_points,
        threshold: format!("bmi > {}", cfg.bmi_max),
        details: bmi.map(|v| format!("bmi={:.1}", v)),
    }
}

fn fmt_opt(v: Option<i64>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "absent".to_string(),
    }
}

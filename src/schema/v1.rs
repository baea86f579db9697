use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ScoringConfig;
use crate::scores::{RiskResult, TrendResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Analyze,
    Longitudinal,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Analyze => "analyze",
            Mode::Longitudinal => "longitudinal",
        }
    }
}

/// A single vital-signs snapshot. Every field is optional; a missing or
/// `null` field is "not evaluated".
///
/// Integer readings also accept JSON floats with no fractional part
/// (`110.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    #[serde(default, deserialize_with = "integral_opt")]
    pub heart_rate: Option<i64>,
    #[serde(default, deserialize_with = "integral_opt")]
    pub systolic: Option<i64>,
    #[serde(default, deserialize_with = "integral_opt")]
    pub diastolic: Option<i64>,
    pub oxygen_saturation: Option<f64>,
    pub bmi: Option<f64>,
}

fn integral_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reading {
        Int(i64),
        Float(f64),
    }

    match Option::<Reading>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Reading::Int(v)) => Ok(Some(v)),
        Some(Reading::Float(f))
            if f.is_finite()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            Ok(Some(f as i64))
        }
        Some(Reading::Float(f)) => Err(<D::Error as serde::de::Error>::custom(format!(
            "expected an integer reading, got {}",
            f
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub record_date: DateTime<Utc>,
    pub vitals: Vitals,
    /// Carried through to reports; no rule reads it yet.
    pub blood_sugar: Option<f64>,
    pub cholesterol: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub patient_id: String,
    pub record_data: Vitals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongitudinalRequest {
    pub patient_id: String,
    pub records: Vec<HealthRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub patient_id: Option<String>,
    pub mode: Mode,
    pub records: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordScore {
    pub record_date: Option<DateTime<Utc>>,
    pub risk_score: u32,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub name: String,
    pub fired: bool,
    pub points: u32,
    pub threshold: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFit {
    pub series: String,
    pub points: u64,
    pub slope: Option<f64>,
    pub threshold: f64,
    pub fired: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explainability {
    pub rules: Vec<RuleOutcome>,
    pub series: Vec<SeriesFit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub risk: Option<RiskResult>,
    pub per_record: Vec<RecordScore>,
    pub trends: Option<TrendResult>,
    pub explainability: Explainability,
    pub config: ScoringConfig,
    pub warnings: Vec<String>,
}

impl CardioReportV1 {
    pub fn empty(tool_version: &str, mode: Mode) -> Self {
        Self {
            tool: "cardio-sentinel".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                patient_id: None,
                mode,
                records: None,
            },
            risk: None,
            per_record: Vec::new(),
            trends: None,
            explainability: Explainability {
                rules: Vec::new(),
                series: Vec::new(),
            },
            config: ScoringConfig::default(),
            warnings: Vec::new(),
        }
    }
}

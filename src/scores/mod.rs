pub mod risk;
pub mod trend;

use serde::{Deserialize, Serialize};

/// Bounded cardiovascular risk score with the factors that contributed to it,
/// in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResult {
    pub risk_score: u32,
    pub risk_factors: Vec<String>,
}

/// Trend findings in detection order. Serializes as a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendResult {
    pub trends: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub name: String,
    pub factor: &'static str,
    pub fired: bool,
    pub points: u32,
    pub threshold: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SeriesFit {
    pub series: String,
    pub finding: &'static str,
    pub points: usize,
    pub slope: Option<f64>,
    pub threshold: f64,
    pub fired: bool,
}

pub(crate) fn gate_int(value: Option<i64>, zero_is_absent: bool) -> Option<i64> {
    value.filter(|&v| !(zero_is_absent && v == 0))
}

pub(crate) fn gate_float(value: Option<f64>, zero_is_absent: bool) -> Option<f64> {
    value.filter(|&v| !(zero_is_absent && v == 0.0))
}

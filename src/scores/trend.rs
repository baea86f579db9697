use crate::config::ScoringConfig;
use crate::math::stats::linear_slope;
use crate::schema::v1::{HealthRecord, Vitals};
use crate::scores::{SeriesFit, TrendResult, gate_int};

pub const INCREASING_HEART_RATE: &str = "Increasing heart rate trend detected";
pub const WORSENING_BLOOD_PRESSURE: &str = "Worsening blood pressure trend";

/// Detects trends with the built-in thresholds. `records` must be oldest
/// first; the order is not checked here.
pub fn detect_trends(records: &[HealthRecord]) -> TrendResult {
    detect_trends_with(records, &ScoringConfig::default())
}

pub fn detect_trends_with(records: &[HealthRecord], cfg: &ScoringConfig) -> TrendResult {
    trends_from_fits(&fit_series(records, cfg))
}

/// Findings of the fired fits, in fit order.
pub fn trends_from_fits(fits: &[SeriesFit]) -> TrendResult {
    let trends = fits
        .iter()
        .filter(|f| f.fired)
        .map(|f| f.finding.to_string())
        .collect();
    TrendResult { trends }
}

/// Fits the heart-rate and systolic series independently. A record missing
/// one reading still contributes to the other series.
pub fn fit_series(records: &[HealthRecord], cfg: &ScoringConfig) -> Vec<SeriesFit> {
    let heart_rates = collect_series(records, |v| v.heart_rate, cfg.zero_is_absent);
    let systolic = collect_series(records, |v| v.systolic, cfg.zero_is_absent);

    vec![
        fit_one(
            "heart_rate",
            INCREASING_HEART_RATE,
            &heart_rates,
            cfg.heart_rate_slope_max,
            cfg.trend_min_points,
        ),
        fit_one(
            "systolic",
            WORSENING_BLOOD_PRESSURE,
            &systolic,
            cfg.systolic_slope_max,
            cfg.trend_min_points,
        ),
    ]
}

fn collect_series<F>(records: &[HealthRecord], field: F, zero_is_absent: bool) -> Vec<f64>
where
    F: Fn(&Vitals) -> Option<i64>,
{
    records
        .iter()
        .filter_map(|r| gate_int(field(&r.vitals), zero_is_absent))
        .map(|v| v as f64)
        .collect()
}

fn fit_one(
    series: &str,
    finding: &'static str,
    values: &[f64],
    threshold: f64,
    min_points: usize,
) -> SeriesFit {
    let slope = if values.len() >= min_points {
        linear_slope(values)
    } else {
        None
    };
    let fired = matches!(slope, Some(s) if s > threshold);
    SeriesFit {
        series: series.to_string(),
        finding,
        points: values.len(),
        slope,
        threshold,
        fired,
    }
}

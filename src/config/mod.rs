//! Scoring thresholds and weights.
//!
//! The built-in values ship as `assets/config/cardio_v1.tsv`; a user TSV
//! with the same `key<TAB>value` layout can override any subset of keys.

mod loader;

use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

pub use loader::{load_builtin_v1, load_config_tsv, merge_entries};

/// Upper bound of the risk score regardless of configuration.
pub const MAX_SCORE: u32 = 100;

pub const KEYS: [&str; 14] = [
    "heart_rate_max",
    "heart_rate_points",
    "systolic_max",
    "diastolic_max",
    "hypertension_points",
    "oxygen_saturation_min",
    "oxygen_saturation_points",
    "bmi_max",
    "obesity_points",
    "score_cap",
    "trend_min_points",
    "heart_rate_slope_max",
    "systolic_slope_max",
    "zero_is_absent",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    /// `source:line` the entry was read from.
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub heart_rate_max: i64,
    pub heart_rate_points: u32,
    pub systolic_max: i64,
    pub diastolic_max: i64,
    pub hypertension_points: u32,
    pub oxygen_saturation_min: f64,
    pub oxygen_saturation_points: u32,
    pub bmi_max: f64,
    pub obesity_points: u32,
    pub score_cap: u32,
    pub trend_min_points: usize,
    pub heart_rate_slope_max: f64,
    pub systolic_slope_max: f64,
    /// A reading of exactly zero counts as missing.
    pub zero_is_absent: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            heart_rate_max: 100,
            heart_rate_points: 15,
            systolic_max: 140,
            diastolic_max: 90,
            hypertension_points: 25,
            oxygen_saturation_min: 94.0,
            oxygen_saturation_points: 20,
            bmi_max: 30.0,
            obesity_points: 15,
            score_cap: MAX_SCORE,
            trend_min_points: 3,
            heart_rate_slope_max: 1.0,
            systolic_slope_max: 1.0,
            zero_is_absent: true,
        }
    }
}

impl ScoringConfig {
    /// Builds a config from a complete entry set. Every key in [`KEYS`] must
    /// appear exactly once.
    pub fn from_entries(entries: &[ConfigEntry]) -> Result<Self> {
        let mut cfg = Self::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for e in entries {
            match e.key.as_str() {
                "heart_rate_max" => cfg.heart_rate_max = parse_value(e)?,
                "heart_rate_points" => cfg.heart_rate_points = parse_value(e)?,
                "systolic_max" => cfg.systolic_max = parse_value(e)?,
                "diastolic_max" => cfg.diastolic_max = parse_value(e)?,
                "hypertension_points" => cfg.hypertension_points = parse_value(e)?,
                "oxygen_saturation_min" => cfg.oxygen_saturation_min = parse_value(e)?,
                "oxygen_saturation_points" => cfg.oxygen_saturation_points = parse_value(e)?,
                "bmi_max" => cfg.bmi_max = parse_value(e)?,
                "obesity_points" => cfg.obesity_points = parse_value(e)?,
                "score_cap" => cfg.score_cap = parse_value(e)?,
                "trend_min_points" => cfg.trend_min_points = parse_value(e)?,
                "heart_rate_slope_max" => cfg.heart_rate_slope_max = parse_value(e)?,
                "systolic_slope_max" => cfg.systolic_slope_max = parse_value(e)?,
                "zero_is_absent" => cfg.zero_is_absent = parse_value(e)?,
                other => bail!("{} unknown config key '{}'", e.origin, other),
            }
            if !seen.insert(e.key.as_str()) {
                bail!("{} duplicate config key '{}'", e.origin, e.key);
            }
        }

        for key in KEYS {
            if !seen.contains(key) {
                bail!("config key '{}' missing", key);
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.score_cap > MAX_SCORE {
            bail!("score_cap must be <= {} (got {})", MAX_SCORE, self.score_cap);
        }
        // A line needs two points.
        if self.trend_min_points < 2 {
            bail!(
                "trend_min_points must be >= 2 (got {})",
                self.trend_min_points
            );
        }
        for (key, v) in [
            ("oxygen_saturation_min", self.oxygen_saturation_min),
            ("bmi_max", self.bmi_max),
            ("heart_rate_slope_max", self.heart_rate_slope_max),
            ("systolic_slope_max", self.systolic_slope_max),
        ] {
            if !v.is_finite() {
                bail!("{} must be finite (got {})", key, v);
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in [`KEYS`] order, formatted as they would be
    /// written to a config TSV.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("heart_rate_max", self.heart_rate_max.to_string()),
            ("heart_rate_points", self.heart_rate_points.to_string()),
            ("systolic_max", self.systolic_max.to_string()),
            ("diastolic_max", self.diastolic_max.to_string()),
            ("hypertension_points", self.hypertension_points.to_string()),
            ("oxygen_saturation_min", self.oxygen_saturation_min.to_string()),
            (
                "oxygen_saturation_points",
                self.oxygen_saturation_points.to_string(),
            ),
            ("bmi_max", self.bmi_max.to_string()),
            ("obesity_points", self.obesity_points.to_string()),
            ("score_cap", self.score_cap.to_string()),
            ("trend_min_points", self.trend_min_points.to_string()),
            ("heart_rate_slope_max", self.heart_rate_slope_max.to_string()),
            ("systolic_slope_max", self.systolic_slope_max.to_string()),
            ("zero_is_absent", self.zero_is_absent.to_string()),
        ]
    }
}

pub fn load_builtin() -> Result<ScoringConfig> {
    ScoringConfig::from_entries(&load_builtin_v1()?)
}

/// Built-in config with the optional user TSV laid over it.
pub fn load_effective(user: Option<&Path>) -> Result<ScoringConfig> {
    let mut entries = load_builtin_v1()?;
    if let Some(path) = user {
        let user_entries = load_config_tsv(path)?;
        entries = merge_entries(entries, user_entries);
    }
    ScoringConfig::from_entries(&entries)
}

fn parse_value<T>(entry: &ConfigEntry) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    entry.value.parse::<T>().map_err(|err| {
        anyhow!(
            "{} invalid value '{}' for {}: {}",
            entry.origin,
            entry.value,
            entry.key,
            err
        )
    })
}

use std::path::PathBuf;

use crate::config::ScoringConfig;
use crate::schema::v1::{CardioReportV1, HealthRecord, Mode, Vitals};
use crate::scores::{RiskResult, RuleOutcome, SeriesFit, TrendResult};

#[derive(Debug, Clone)]
pub struct InputMeta {
    pub patient_id: Option<String>,
    pub records: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub mode: Mode,
    pub config_path: Option<PathBuf>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub vitals: Option<Vitals>,
    pub records: Vec<HealthRecord>,
    pub config: Option<ScoringConfig>,
    pub rule_outcomes: Vec<RuleOutcome>,
    pub record_scores: Vec<RiskResult>,
    pub risk: Option<RiskResult>,
    pub series_fits: Vec<SeriesFit>,
    pub trends: Option<TrendResult>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: CardioReportV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        mode: Mode,
        config_path: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("cardio.json");
        let tsv_path = out_dir.join("cardio.tsv");
        let report = CardioReportV1::empty(tool_version, mode);
        Self {
            input,
            mode,
            config_path,
            write_json,
            write_tsv,
            vitals: None,
            records: Vec::new(),
            config: None,
            rule_outcomes: Vec::new(),
            record_scores: Vec::new(),
            risk: None,
            series_fits: Vec::new(),
            trends: None,
            warnings: Vec::new(),
            input_meta: InputMeta {
                patient_id: None,
                records: None,
            },
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv
    }
}

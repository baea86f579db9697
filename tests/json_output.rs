use chrono::{TimeZone, Utc};

use cardio_sentinel::config::ScoringConfig;
use cardio_sentinel::ctx::Ctx;
use cardio_sentinel::io::json_writer::build_report;
use cardio_sentinel::schema::v1::{HealthRecord, Mode, Vitals};
use cardio_sentinel::scores::risk::{evaluate_rules, fold_outcomes};
use cardio_sentinel::scores::trend::fit_series;
use cardio_sentinel::scores::{RiskResult, TrendResult};

fn ctx(mode: Mode) -> Ctx {
    Ctx::new(
        std::path::PathBuf::from("input.json"),
        std::path::PathBuf::from("out"),
        mode,
        None,
        true,
        false,
        "0.0.0-test",
    )
}

#[test]
fn analyze_report_populated() {
    let cfg = ScoringConfig::default();
    let vitals = Vitals {
        heart_rate: Some(110),
        systolic: Some(150),
        diastolic: Some(95),
        oxygen_saturation: None,
        bmi: None,
    };
    let outcomes = evaluate_rules(&vitals, &cfg);
    let result = fold_outcomes(&outcomes, cfg.score_cap);

    let mut ctx = ctx(Mode::Analyze);
    ctx.input_meta.patient_id = Some("p-001".to_string());
    ctx.input_meta.records = Some(1);
    ctx.vitals = Some(vitals);
    ctx.config = Some(cfg);
    ctx.rule_outcomes = outcomes;
    ctx.record_scores = vec![result.clone()];
    ctx.risk = Some(result);

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "cardio-sentinel");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["patient_id"], "p-001");
    assert_eq!(json["input_meta"]["mode"], "analyze");
    assert_eq!(json["risk"]["riskScore"], 40);
    assert_eq!(json["risk"]["riskFactors"][0], "High resting heart rate");
    assert_eq!(json["risk"]["riskFactors"][1], "Hypertension detected");
    assert!(json["trends"].is_null());
    assert_eq!(json["explainability"]["rules"].as_array().unwrap().len(), 4);
    assert_eq!(json["explainability"]["rules"][0]["fired"], true);
    assert_eq!(json["explainability"]["rules"][3]["fired"], false);
    assert_eq!(json["config"]["heart_rate_max"], 100);
    assert!(json["per_record"][0]["record_date"].is_null());
}

#[test]
fn longitudinal_report_has_trends_as_list() {
    let cfg = ScoringConfig::default();
    let records: Vec<HealthRecord> = [70, 80, 90]
        .iter()
        .enumerate()
        .map(|(i, &hr)| HealthRecord {
            record_date: Utc.with_ymd_and_hms(2024, 3, 1 + i as u32, 9, 0, 0).unwrap(),
            vitals: Vitals {
                heart_rate: Some(hr),
                ..Vitals::default()
            },
            blood_sugar: Some(5.4),
            cholesterol: None,
        })
        .collect();

    let mut ctx = ctx(Mode::Longitudinal);
    ctx.series_fits = fit_series(&records, &cfg);
    ctx.record_scores = vec![RiskResult::default(); 3];
    ctx.risk = Some(RiskResult::default());
    ctx.trends = Some(TrendResult {
        trends: vec!["Increasing heart rate trend detected".to_string()],
    });
    ctx.records = records;
    ctx.config = Some(cfg);

    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert_eq!(json["input_meta"]["mode"], "longitudinal");
    assert_eq!(json["trends"][0], "Increasing heart rate trend detected");
    assert_eq!(json["per_record"].as_array().unwrap().len(), 3);
    assert!(json["per_record"][2]["record_date"].is_string());
    assert_eq!(json["explainability"]["series"][0]["series"], "heart_rate");
    assert_eq!(json["explainability"]["series"][0]["points"], 3);
    assert_eq!(json["explainability"]["series"][0]["fired"], true);
    assert!(json["explainability"]["series"][1]["slope"].is_null());
}

#[test]
fn report_requires_config() {
    let ctx = ctx(Mode::Analyze);
    assert!(build_report(&ctx).is_err());
}

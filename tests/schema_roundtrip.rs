use cardio_sentinel::schema::v1::{
    AnalyzeRequest, CardioReportV1, LongitudinalRequest, Mode, Vitals,
};

#[test]
fn schema_roundtrip_v1() {
    let report = CardioReportV1::empty("0.0.0-test", Mode::Longitudinal);
    let json = serde_json::to_string(&report).unwrap();
    let decoded: CardioReportV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.tool, "cardio-sentinel");
    assert_eq!(decoded.schema_version, "v1");
    assert!(matches!(decoded.input_meta.mode, Mode::Longitudinal));
}

#[test]
fn vitals_missing_and_null_are_absent() {
    let v: Vitals = serde_json::from_str(r#"{"heartRate": 88, "systolic": null}"#).unwrap();
    assert_eq!(v.heart_rate, Some(88));
    assert_eq!(v.systolic, None);
    assert_eq!(v.diastolic, None);
    assert_eq!(v.oxygen_saturation, None);
    assert_eq!(v.bmi, None);
}

#[test]
fn vitals_reject_non_numeric() {
    let r: Result<Vitals, _> = serde_json::from_str(r#"{"heartRate": "fast"}"#);
    assert!(r.is_err());
}

#[test]
fn analyze_request_camel_case() {
    let req: AnalyzeRequest = serde_json::from_str(
        r#"{"patientId": "p-7", "recordData": {"oxygenSaturation": 92.5, "bmi": 31}}"#,
    )
    .unwrap();
    assert_eq!(req.patient_id, "p-7");
    assert_eq!(req.record_data.oxygen_saturation, Some(92.5));
    assert_eq!(req.record_data.bmi, Some(31.0));
}

#[test]
fn longitudinal_request_parses_dates() {
    let req: LongitudinalRequest = serde_json::from_str(
        r#"{
            "patientId": "p-9",
            "records": [
                {"recordDate": "2024-01-01T08:00:00Z", "vitals": {"heartRate": 70}},
                {"recordDate": "2024-01-02T08:00:00+02:00", "vitals": {}, "bloodSugar": 6.1, "cholesterol": null}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(req.records.len(), 2);
    assert_eq!(req.records[0].vitals.heart_rate, Some(70));
    assert_eq!(req.records[1].blood_sugar, Some(6.1));
    assert!(req.records[0].record_date < req.records[1].record_date);
}

#[test]
fn integral_float_readings_accepted() {
    let req: AnalyzeRequest = serde_json::from_str(
        r#"{"patientId": "p-1", "recordData": {"heartRate": 110.0, "systolic": 150, "diastolic": 95.0}}"#,
    )
    .unwrap();
    assert_eq!(req.record_data.heart_rate, Some(110));
    assert_eq!(req.record_data.systolic, Some(150));
    assert_eq!(req.record_data.diastolic, Some(95));

    let req: LongitudinalRequest = serde_json::from_str(
        r#"{"patientId": "p-2", "records": [
            {"recordDate": "2024-01-01T08:00:00Z", "vitals": {"systolic": 120.0, "heartRate": null}}
        ]}"#,
    )
    .unwrap();
    assert_eq!(req.records[0].vitals.systolic, Some(120));
    assert_eq!(req.records[0].vitals.heart_rate, None);
}

#[test]
fn fractional_integer_reading_rejected() {
    let r: Result<Vitals, _> = serde_json::from_str(r#"{"heartRate": 72.5}"#);
    let err = r.unwrap_err().to_string();
    assert!(err.contains("expected an integer reading"));
}

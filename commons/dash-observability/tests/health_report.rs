use dash_observability::{HealthReport, HealthStatus};

#[test]
fn healthy_report_serializes_lowercase_status() {
    let report = HealthReport::healthy("test-svc", "0.1.0");
    assert!(report.is_healthy());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["service"], "test-svc");
    assert_eq!(value["version"], "0.1.0");
    assert!(value["timestamp"].is_string());
}

#[test]
fn status_round_trips_through_json() {
    let parsed: HealthStatus = serde_json::from_str("\"unhealthy\"").unwrap();
    assert_eq!(parsed, HealthStatus::Unhealthy);
}

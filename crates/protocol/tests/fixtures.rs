use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use vitals_protocol::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("fixtures")
}

fn payloads_dir() -> PathBuf {
    fixtures_dir().join("payloads")
}

fn insights_dir() -> PathBuf {
    fixtures_dir().join("insights")
}

fn write_fixture(dir: &Path, name: &str, json: &str) {
    let path = dir.join(format!("{}.json", name));
    fs::write(&path, json).unwrap_or_else(|_| panic!("Failed to write fixture: {:?}", path));
}

fn sample_system() -> SystemInfo {
    SystemInfo {
        product: Some("ThinkPad X1 Carbon Gen 9".to_string()),
        bios: Some("N32ET86W (1.62 ) 09/12/2023".to_string()),
        os_build: Some("22621.1.amd64fre.ni_release.220506-1250".to_string()),
        report_time: Some("2024-01-15 09:30:12".to_string()),
    }
}

fn sample_battery() -> BatteryInfo {
    BatteryInfo {
        name: Some("5B10W13975".to_string()),
        manufacturer: Some("SMP".to_string()),
        chemistry: Some("LiP".to_string()),
        design_capacity_mwh: Some(57000.0),
        full_charge_capacity_mwh: Some(49020.0),
        cycle_count: Some(312),
    }
}

fn sample_health() -> HealthSummary {
    HealthSummary {
        health_percentage: Some(86.0),
        degradation_percentage: Some(14.0),
        cycle_penalty: Some(0),
        estimated_remaining_life: Some("18-24 months".to_string()),
    }
}

fn sample_history() -> Vec<CapacityHistoryEntry> {
    vec![
        CapacityHistoryEntry {
            date: "2023-12-25 - 2024-01-01".to_string(),
            full_charge_capacity_mwh: Some(50110.0),
            design_capacity_mwh: Some(57000.0),
        },
        CapacityHistoryEntry {
            date: "2024-01-01 - 2024-01-08".to_string(),
            full_charge_capacity_mwh: None,
            design_capacity_mwh: Some(57000.0),
        },
        CapacityHistoryEntry {
            date: "2024-01-08 - 2024-01-15".to_string(),
            full_charge_capacity_mwh: Some(49020.0),
            design_capacity_mwh: Some(57000.0),
        },
    ]
}

fn sample_payload() -> BatteryPayload {
    BatteryPayload {
        system: Some(sample_system()),
        battery: sample_battery(),
        health: Some(sample_health()),
        history: sample_history(),
        generated_at: Some("2024-01-15T09:31:00.000000Z".to_string()),
    }
}

fn sample_insights() -> DerivedInsights {
    DerivedInsights {
        health_score: Some(86.0),
        status: HealthStatus::Healthy,
        degradation: Some(14.0),
        cycle_penalty: 0,
        rapid_drain_detected: false,
        recommendations: vec!["Keep optimized charging enabled to slow aging.".to_string()],
        usage_insights: vec![
            "Battery retains strong capacity relative to design specs.".to_string(),
        ],
    }
}

#[test]
fn generate_payload_fixtures() {
    let dir = payloads_dir();
    fs::create_dir_all(&dir).unwrap();

    let sparse = BatteryPayload {
        battery: BatteryInfo {
            design_capacity_mwh: None,
            full_charge_capacity_mwh: Some(40000.0),
            ..BatteryInfo::default()
        },
        ..BatteryPayload::default()
    };

    let payloads: Vec<(&str, BatteryPayload)> = vec![
        ("full", sample_payload()),
        ("sparse", sparse),
        ("empty", BatteryPayload::default()),
    ];

    for (name, payload) in payloads {
        let json = payload.to_json_pretty().unwrap();
        write_fixture(&dir, name, &json);
    }
}

#[test]
fn generate_insight_fixtures() {
    let dir = insights_dir();
    fs::create_dir_all(&dir).unwrap();

    let insights: Vec<(&str, DerivedInsights)> = vec![
        ("healthy", sample_insights()),
        ("unknown", DerivedInsights::default()),
    ];

    for (name, insight) in insights {
        let json = insight.to_json_pretty().unwrap();
        write_fixture(&dir, name, &json);
    }
}

#[test]
fn payload_survives_json() {
    let payload = sample_payload();
    let decoded = BatteryPayload::from_json(&payload.to_json().unwrap()).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn decodes_agent_output() {
    let json = r#"{
  "system": {
    "product": "ThinkPad X1 Carbon Gen 9",
    "bios": "N32ET86W (1.62 ) 09/12/2023",
    "os_build": "22621.1.amd64fre.ni_release.220506-1250",
    "report_time": "2024-01-15 09:30:12"
  },
  "battery": {
    "name": "5B10W13975",
    "manufacturer": "SMP",
    "chemistry": "LiP",
    "design_capacity_mwh": 57000,
    "full_charge_capacity_mwh": 49020,
    "cycle_count": 312
  },
  "health": {
    "health_percentage": 86.0,
    "degradation_percentage": 14.0,
    "cycle_penalty": 0,
    "estimated_remaining_life": "18-24 months"
  },
  "history": [
    {"date": "2023-12-25 - 2024-01-01", "full_charge_capacity_mwh": 50110, "design_capacity_mwh": 57000},
    {"date": "2024-01-01 - 2024-01-08", "full_charge_capacity_mwh": null, "design_capacity_mwh": 57000},
    {"date": "2024-01-08 - 2024-01-15", "full_charge_capacity_mwh": 49020, "design_capacity_mwh": 57000}
  ],
  "generated_at": "2024-01-15T09:31:00.000000Z"
}"#;

    let payload = BatteryPayload::from_json(json).unwrap();
    assert_eq!(payload, sample_payload());
}

#[test]
fn decodes_insights_output() {
    let json = r#"{
  "healthScore": 86.0,
  "status": "Healthy",
  "degradation": 14.0,
  "cyclePenalty": 0,
  "rapidDrainDetected": false,
  "recommendations": ["Keep optimized charging enabled to slow aging."],
  "usageInsights": ["Battery retains strong capacity relative to design specs."]
}"#;

    let insights = DerivedInsights::from_json(json).unwrap();
    assert_eq!(insights, sample_insights());
}

#[test]
fn decodes_float_capacities() {
    let json = r#"{"battery": {"design_capacity_mwh": 50000.0, "full_charge_capacity_mwh": 48000.0}}"#;
    let payload = BatteryPayload::from_json(json).unwrap();
    assert_eq!(payload.battery.design_capacity_mwh, Some(50000.0));
    assert_eq!(payload.battery.full_charge_capacity_mwh, Some(48000.0));
}

#[test]
fn rejects_string_capacity() {
    let json = r#"{"battery": {"full_charge_capacity_mwh": "48000"}}"#;
    assert!(BatteryPayload::from_json(json).is_err());
}

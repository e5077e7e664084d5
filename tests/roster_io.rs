#![forbid(unsafe_code)]
use effectifs::{io, sample_roster, ShiftCoverageEngine, TimeOfDay};
use std::fs;
use tempfile::tempdir;

#[test]
fn json_roundtrip_keeps_times_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let roster = sample_roster();
    io::export_roster_json(&path, &roster).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"20:00:00\""));

    let loaded = io::load_roster_json(&path).unwrap();
    assert_eq!(loaded, roster);
}

#[test]
fn hand_written_roster_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("night.json");
    fs::write(
        &path,
        r#"{
            "shift_types": [
                { "id": 1, "name": "Night", "start_of_day": "22:00:00", "end_of_day": "06:00:00" }
            ],
            "workers": [
                { "id": 1, "name": "Nora", "shift_type_id": 1 },
                { "id": 2, "name": "Lost", "shift_type_id": 9 }
            ]
        }"#,
    )
    .unwrap();

    let roster = io::load_roster_json(&path).unwrap();
    assert!(roster.tasks.is_empty());
    let engine = ShiftCoverageEngine::from_roster(&roster).unwrap();
    let at: TimeOfDay = "03:00:00".parse().unwrap();
    let count = engine.count_covered(&roster.workers, at);
    assert_eq!(count.count, 1);
    assert_eq!(count.skipped.len(), 1);
}

#[test]
fn invalid_time_in_roster_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{ "shift_types": [ { "id": 1, "name": "X", "start_of_day": "25:00:00", "end_of_day": "06:00:00" } ] }"#,
    )
    .unwrap();
    let err = io::load_roster_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid time format"));
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dup.json");
    let mut roster = sample_roster();
    roster.workers.push(roster.workers[0].clone());
    io::export_roster_json(&path, &roster).unwrap();
    let err = io::load_roster_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate worker id"));
}

#[test]
fn unpadded_time_in_roster_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loose.json");
    fs::write(
        &path,
        r#"{ "shift_types": [ { "id": 1, "name": "X", "start_of_day": "9:00:00", "end_of_day": "17:00:00" } ] }"#,
    )
    .unwrap();
    let err = io::load_roster_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid time format"));
}

#[test]
fn export_into_missing_directory_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("roster.json");
    let err = io::export_roster_json(&path, &sample_roster()).unwrap_err();
    assert!(format!("{err:#}").contains("writing roster"));
}

//! Integration tests for the collaborators around the engine.
//!
//! Configuration and reference files go through the real filesystem.

use std::fs;

use pagesim::common::config::OutputFormat;
use pagesim::input::read_references;
use pagesim::render::{history_table, summary_line};
use pagesim::{Engine, Error, OptimalStrategy, PageId, Policy, SimulationConfig};
use tempfile::tempdir;

#[test]
fn test_read_references_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "7 0 1 2\n0, 3, 0, 4\n").unwrap();

    let refs = read_references(&path).unwrap();
    assert_eq!(refs, PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4]));
}

#[test]
fn test_read_references_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_references(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_read_references_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "1 2 x").unwrap();

    assert!(matches!(
        read_references(&path),
        Err(Error::MalformedInput { position: 3, .. })
    ));
}

#[test]
fn test_load_config_and_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sim.json");
    fs::write(
        &path,
        r#"{
            "references": [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5],
            "frames": 4,
            "policies": ["fifo", "optimal"],
            "optimal_strategy": "next_use_table",
            "output": "table"
        }"#,
    )
    .unwrap();

    let config = SimulationConfig::load(&path).unwrap();
    let capacity = config.validate().unwrap();
    assert_eq!(config.output, OutputFormat::Table);

    let engine = Engine::new().with_optimal_strategy(config.optimal_strategy);
    assert_eq!(engine.optimal_strategy(), OptimalStrategy::NextUseTable);

    let summaries: Vec<String> = config
        .policies()
        .iter()
        .map(|&policy| {
            let result = engine.run(&config.references, capacity, policy);
            summary_line(&result).to_string()
        })
        .collect();

    assert_eq!(
        summaries,
        vec!["FIFO Page Faults: 10", "Optimal Page Faults: 6"]
    );
}

#[test]
fn test_load_config_rejects_bad_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sim.json");
    fs::write(&path, "{ references: [1, 2] }").unwrap();

    assert!(matches!(SimulationConfig::load(&path), Err(Error::Json(_))));
}

#[test]
fn test_config_negative_frames_rejected() {
    let config = SimulationConfig::from_json(r#"{ "references": [1], "frames": -3 }"#).unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidCapacity(-3))));
}

#[test]
fn test_json_output_round_trips_fault_count() {
    let refs = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4]);
    let result = Engine::new().simulate(&refs, 3, Policy::Lru).unwrap();

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["fault_count"], 6);
    assert_eq!(json["stats"]["hits"], 2);
    assert_eq!(json["history"].as_array().unwrap().len(), 8);
    assert_eq!(json["history"][3]["evicted"], 7);
}

#[test]
fn test_history_table_has_row_per_reference() {
    let refs = PageId::sequence([1, 2, 3, 4, 1, 2, 5]);
    let result = Engine::new().simulate(&refs, 3, Policy::Fifo).unwrap();
    let table = history_table(&result).to_string();

    // Title + header + one row per reference
    assert_eq!(table.lines().count(), 2 + refs.len());
    assert!(table.lines().last().unwrap().ends_with("yes, evicted 4"));
}

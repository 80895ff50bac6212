//! Report Output
//!
//! Assembles scenario results into a [`Report`] and writes it as JSON.

use std::fs;
use std::path::Path;

use thiserror::Error;
use workforce_records::{MetricsSeries, Report, ScenarioReport};

use super::analysis::analyze;
use crate::scenario::{RunSetup, Scenario};

/// Default report output path
pub const REPORT_OUTPUT_PATH: &str = "output/report.json";

/// Report write failures
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("scenario {0} produced no records")]
    EmptySeries(String),
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Package one finished scenario
pub fn scenario_report(
    scenario: &Scenario,
    setup: &RunSetup,
    series: MetricsSeries,
) -> Result<ScenarioReport, ReportError> {
    let analysis = analyze(&series).ok_or_else(|| ReportError::EmptySeries(scenario.name.clone()))?;
    Ok(ScenarioReport {
        name: scenario.name.clone(),
        description: scenario.description.clone(),
        seed: setup.seed,
        rounds: setup.rounds,
        analysis,
        series,
    })
}

/// Write a report as pretty JSON, creating parent directories
pub fn write_report(report: &Report, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup() -> RunSetup {
        RunSetup {
            num_workers: 20,
            num_corporations: 2,
            rounds: 5,
            seed: 3,
            ..RunSetup::default()
        }
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let scenario = Scenario::new("Base", "", 0.3);
        let err = scenario_report(&scenario, &setup(), MetricsSeries::new()).unwrap_err();
        assert!(matches!(err, ReportError::EmptySeries(name) if name == "Base"));
    }

    #[test]
    fn test_write_report_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        let setup = setup();
        let scenario = Scenario::new("Base", "Reference", 0.3);
        let series = scenario.run(&setup).unwrap();
        let mut report = Report::new();
        report.push(scenario_report(&scenario, &setup, series).unwrap());

        write_report(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let loaded: Report = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, report);
        assert_eq!(loaded.get("Base").unwrap().series.len(), 5);
    }
}

//! Report Types
//!
//! Serialization structs for scenario summaries written after a run.

use serde::{Deserialize, Serialize};

use crate::{MetricsRecord, MetricsSeries};

/// Headline values of the last recorded round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalValues {
    pub employment: f64,
    pub average_skill: f64,
    pub worker_wellbeing: f64,
    pub corporate_profit: f64,
    pub automation_level: f64,
}

impl From<&MetricsRecord> for FinalValues {
    fn from(record: &MetricsRecord) -> Self {
        Self {
            employment: record.employment,
            average_skill: record.average_skill,
            worker_wellbeing: record.worker_wellbeing,
            corporate_profit: record.corporate_profit,
            automation_level: record.automation_level,
        }
    }
}

/// Largest single-round employment drop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmploymentDecline {
    /// Round whose record shows the drop
    pub round: u64,
    /// Change in employment rate (negative)
    pub change: f64,
}

/// Derived figures for one scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub final_values: FinalValues,
    pub employment_change: f64,
    pub skill_growth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steepest_decline: Option<EmploymentDecline>,
}

/// One scenario's entry in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub description: String,
    pub seed: u64,
    pub rounds: u64,
    pub analysis: ScenarioAnalysis,
    pub series: MetricsSeries,
}

/// Complete output of a CLI invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scenarios: Vec<ScenarioReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

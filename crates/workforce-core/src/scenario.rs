//! Scenarios
//!
//! Named parameter sets with optional agent overrides, applied after the
//! population is built and before the first round.

use serde::{Deserialize, Serialize};
use tracing::info;
use workforce_records::MetricsSeries;

use crate::components::Policy;
use crate::config::Rules;
use crate::model::{ModelError, ModelParams, SimulationModel};

/// Overrides written into agent state before the first round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOverrides {
    /// Replaces every worker's adaptability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_adaptability: Option<f64>,
    /// Replaces the government's starting policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_policy: Option<Policy>,
}

impl AgentOverrides {
    pub fn is_empty(&self) -> bool {
        self.worker_adaptability.is_none() && self.government_policy.is_none()
    }

    /// Write the overrides into a freshly built model
    pub fn apply(&self, model: &mut SimulationModel) {
        if let Some(adaptability) = self.worker_adaptability {
            model.for_each_worker_mut(|worker| worker.adaptability = adaptability);
        }
        if let Some(policy) = self.government_policy {
            if let Some(mut government) = model.government_mut() {
                government.policy = policy;
            }
        }
    }
}

/// A named run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub automation_level: f64,
    #[serde(default)]
    pub overrides: AgentOverrides,
}

impl Scenario {
    pub fn new(name: impl Into<String>, description: impl Into<String>, automation_level: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            automation_level,
            overrides: AgentOverrides::default(),
        }
    }

    pub fn with_adaptability(mut self, adaptability: f64) -> Self {
        self.overrides.worker_adaptability = Some(adaptability);
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.overrides.government_policy = Some(policy);
        self
    }

    /// Build a model for this scenario with overrides applied
    pub fn build(&self, setup: &RunSetup) -> Result<SimulationModel, ModelError> {
        let params = ModelParams::new(setup.num_workers, setup.num_corporations, self.automation_level)
            .with_seed(setup.seed)
            .with_rules(setup.rules.clone());
        let mut model = SimulationModel::new(params)?;
        self.overrides.apply(&mut model);
        Ok(model)
    }

    /// Build, run for `setup.rounds` rounds and return the metrics
    pub fn run(&self, setup: &RunSetup) -> Result<MetricsSeries, ModelError> {
        info!(scenario = %self.name, rounds = setup.rounds, "Running scenario");
        let mut model = self.build(setup)?;
        model.run(setup.rounds);
        Ok(model.into_metrics())
    }
}

/// Everything a scenario run needs besides the scenario itself
#[derive(Debug, Clone, PartialEq)]
pub struct RunSetup {
    pub num_workers: usize,
    pub num_corporations: usize,
    pub rounds: u64,
    pub seed: u64,
    pub rules: Rules,
}

impl Default for RunSetup {
    fn default() -> Self {
        Self {
            num_workers: 100,
            num_corporations: 10,
            rounds: 50,
            seed: 42,
            rules: Rules::default(),
        }
    }
}

/// Built-in scenario collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSuite {
    /// Base, high and low starting automation
    Automation,
    /// Worker, corporation and government variations
    Stakeholders,
}

impl ScenarioSuite {
    pub fn scenarios(&self) -> Vec<Scenario> {
        match self {
            ScenarioSuite::Automation => vec![
                Scenario::new("Base", "Reference starting automation", 0.3),
                Scenario::new("High_Automation", "Economy starts highly automated", 0.7),
                Scenario::new("Low_Automation", "Economy starts barely automated", 0.1),
            ],
            ScenarioSuite::Stakeholders => vec![
                Scenario::new("Worker_HighAdapt", "Workers with high adaptability", 0.3)
                    .with_adaptability(0.9),
                Scenario::new("Worker_LowAdapt", "Workers with low adaptability", 0.3)
                    .with_adaptability(0.1),
                Scenario::new("Corp_AggressiveAuto", "Corporations aggressively automate", 0.5),
                Scenario::new("Corp_HumanCentric", "Corporations prefer human workers", 0.2),
                Scenario::new("Gov_ProWorker", "Government actively supports workers", 0.5)
                    .with_policy(Policy::ProWorker),
                Scenario::new("Gov_LaissezFaire", "Government minimal intervention", 0.5)
                    .with_policy(Policy::ProBusiness),
            ],
        }
    }
}

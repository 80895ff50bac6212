//! Configuration System
//!
//! Loads rule constants and run defaults from a TOML tuning file so the model
//! can be adjusted without recompiling. Every field defaults to the reference
//! value, so a partial file only overrides what it names.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub rules: Rules,
}

/// Run defaults used by the CLI when a flag is omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rounds: u64,
    pub num_workers: usize,
    pub num_corporations: usize,
    pub automation_level: f64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 50,
            num_workers: 100,
            num_corporations: 10,
            automation_level: 0.3,
            seed: 42,
        }
    }
}

/// Every constant the agent rules read
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub initial: InitialRules,
    #[serde(default)]
    pub worker: WorkerRules,
    #[serde(default)]
    pub corporation: CorporationRules,
    #[serde(default)]
    pub government: GovernmentRules,
}

/// Starting state of freshly spawned agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialRules {
    /// Half-open range skill levels are drawn from
    pub skill_range: (f64, f64),
    /// Half-open range adaptability is drawn from
    pub adaptability_range: (f64, f64),
    pub well_being: f64,
    pub automation_investment: f64,
    pub competitiveness: f64,
    pub profit: f64,
}

impl Default for InitialRules {
    fn default() -> Self {
        Self {
            skill_range: (0.3, 0.9),
            adaptability_range: (0.2, 0.8),
            well_being: 0.7,
            automation_investment: 0.5,
            competitiveness: 0.7,
            profit: 1.0,
        }
    }
}

/// Worker update constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerRules {
    /// Skill gained by reskilling
    pub reskill_gain: f64,
    /// Well-being lost to reskilling stress
    pub reskill_stress: f64,
    /// Well-being lost on job loss
    pub layoff_shock: f64,
    /// Per-round well-being recovery while employed
    pub employed_recovery: f64,
    /// Per-round well-being decline while unemployed
    pub unemployed_decline: f64,
    pub well_being_floor: f64,
    pub well_being_ceiling: f64,
}

impl Default for WorkerRules {
    fn default() -> Self {
        Self {
            reskill_gain: 0.1,
            reskill_stress: 0.05,
            layoff_shock: 0.2,
            employed_recovery: 0.02,
            unemployed_decline: 0.05,
            well_being_floor: 0.1,
            well_being_ceiling: 1.0,
        }
    }
}

/// Corporation update constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorporationRules {
    /// Share of the workforce that must be employed before automating
    pub automation_employment_share: f64,
    /// Profit required to afford an automation push
    pub automation_profit_floor: f64,
    pub automation_investment_step: f64,
    pub automation_cost: f64,
    /// Increase applied to the shared automation level per push
    pub automation_level_step: f64,
    pub augmentation_divestment: f64,
    pub augmentation_competitiveness_gain: f64,
    pub competitiveness_return: f64,
    pub investment_upkeep: f64,
}

impl Default for CorporationRules {
    fn default() -> Self {
        Self {
            automation_employment_share: 0.7,
            automation_profit_floor: 0.8,
            automation_investment_step: 0.1,
            automation_cost: 0.2,
            automation_level_step: 0.02,
            augmentation_divestment: 0.05,
            augmentation_competitiveness_gain: 0.02,
            competitiveness_return: 0.1,
            investment_upkeep: 0.05,
        }
    }
}

/// Government update constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentRules {
    /// Employment rate below which the government turns pro-worker
    pub pro_worker_below: f64,
    /// Employment rate above which the government turns pro-business
    pub pro_business_above: f64,
    pub reskill_skill_gain: f64,
    pub reskill_adaptability_gain: f64,
}

impl Default for GovernmentRules {
    fn default() -> Self {
        Self {
            pro_worker_below: 0.7,
            pro_business_above: 0.9,
            reskill_skill_gain: 0.1,
            reskill_adaptability_gain: 0.05,
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize tuning file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a path, or use defaults if it can't be loaded
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{}. Using default tuning.", e);
            Self::default()
        })
    }

    /// Render this configuration as a TOML document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

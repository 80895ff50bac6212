//! Workforce Simulation Engine Library
//!
//! An agent-based model of labor-market adaptation to automation. Workers,
//! corporations and a government live in a `bevy_ecs` world and are activated
//! once per round in shuffled order; a metrics system records the population
//! aggregates at the start of every round.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod model;
pub mod output;
pub mod scenario;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::{Config, ConfigError, Rules};
pub use model::{ModelError, ModelParams, SimulationModel};
pub use scenario::{AgentOverrides, RunSetup, Scenario, ScenarioSuite};
pub use workforce_records::{MetricsRecord, MetricsSeries};

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

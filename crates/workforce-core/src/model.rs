//! Simulation Model
//!
//! Owns the ECS world (population plus shared resources) and the round
//! schedule. [`SimulationModel::step`] is the only operation that advances
//! time.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;
use workforce_records::MetricsSeries;

use crate::components::{
    AutomationLevel, Corporation, Government, Policy, PopulationSize, Roster, RoundClock, Worker,
};
use crate::config::Rules;
use crate::setup::{population_summary, spawn_population, PopulationSummary};
use crate::systems::{activate_agents, collect_metrics, count_employed, MetricsCollector};
use crate::SimRng;

/// Construction failures
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("a model needs at least one worker")]
    NoWorkers,
    #[error("initial automation level must be finite, got {0}")]
    NonFiniteAutomation(f64),
    #[error("{name} range is empty: [{low}, {high})")]
    EmptyRange {
        name: &'static str,
        low: f64,
        high: f64,
    },
}

/// Construction parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub num_workers: usize,
    pub num_corporations: usize,
    /// Initial automation level
    pub automation_level: f64,
    /// RNG seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            num_workers: 100,
            num_corporations: 10,
            automation_level: 0.3,
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl ModelParams {
    pub fn new(num_workers: usize, num_corporations: usize, automation_level: f64) -> Self {
        Self {
            num_workers,
            num_corporations,
            automation_level,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.num_workers == 0 {
            return Err(ModelError::NoWorkers);
        }
        if !self.automation_level.is_finite() {
            return Err(ModelError::NonFiniteAutomation(self.automation_level));
        }
        let initial = &self.rules.initial;
        for (name, (low, high)) in [
            ("skill", initial.skill_range),
            ("adaptability", initial.adaptability_range),
        ] {
            if low.is_nan() || high.is_nan() || low >= high {
                return Err(ModelError::EmptyRange { name, low, high });
            }
        }
        Ok(())
    }
}

/// A single simulation run
pub struct SimulationModel {
    world: World,
    schedule: Schedule,
}

impl SimulationModel {
    /// Build the population and the round schedule
    pub fn new(params: ModelParams) -> Result<Self, ModelError> {
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let size = PopulationSize {
            num_workers: params.num_workers,
            num_corporations: params.num_corporations,
        };

        let mut world = World::new();
        let roster = spawn_population(&mut world, &size, &params.rules.initial, &mut rng);
        world.insert_resource(roster);
        world.insert_resource(size);
        world.insert_resource(AutomationLevel(params.automation_level));
        world.insert_resource(RoundClock::default());
        world.insert_resource(MetricsCollector::new());
        world.insert_resource(params.rules);
        world.insert_resource(SimRng(rng));

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems((collect_metrics, activate_agents).chain());

        info!(
            workers = size.num_workers,
            corporations = size.num_corporations,
            automation_level = params.automation_level,
            seed = ?params.seed,
            "Model created"
        );

        Ok(Self { world, schedule })
    }

    /// Advance one round: record metrics, then activate every agent once
    pub fn step(&mut self) {
        self.schedule.run(&mut self.world);
    }

    /// Advance `rounds` rounds
    pub fn run(&mut self, rounds: u64) {
        for _ in 0..rounds {
            self.step();
        }
    }

    /// Completed rounds
    pub fn round(&self) -> u64 {
        self.world.resource::<RoundClock>().completed
    }

    pub fn automation_level(&self) -> f64 {
        self.world.resource::<AutomationLevel>().get()
    }

    /// Override the shared automation level between rounds
    pub fn set_automation_level(&mut self, level: f64) {
        self.world.resource_mut::<AutomationLevel>().0 = level;
    }

    pub fn num_workers(&self) -> usize {
        self.world.resource::<PopulationSize>().num_workers
    }

    pub fn num_corporations(&self) -> usize {
        self.world.resource::<PopulationSize>().num_corporations
    }

    pub fn rules(&self) -> &Rules {
        self.world.resource::<Rules>()
    }

    /// Records collected so far, one per started round
    pub fn metrics(&self) -> &MetricsSeries {
        self.world.resource::<MetricsCollector>().series()
    }

    /// Consume the model, keeping only its metrics
    pub fn into_metrics(mut self) -> MetricsSeries {
        self.world
            .remove_resource::<MetricsCollector>()
            .map(MetricsCollector::into_series)
            .unwrap_or_default()
    }

    /// Workers in id order
    pub fn workers(&self) -> impl Iterator<Item = &Worker> + '_ {
        let roster = self.world.resource::<Roster>();
        roster
            .workers
            .iter()
            .filter_map(move |&entity| self.world.get::<Worker>(entity))
    }

    /// Corporations in id order
    pub fn corporations(&self) -> impl Iterator<Item = &Corporation> + '_ {
        let roster = self.world.resource::<Roster>();
        roster
            .corporations
            .iter()
            .filter_map(move |&entity| self.world.get::<Corporation>(entity))
    }

    pub fn government(&self) -> Option<&Government> {
        let government = self.world.resource::<Roster>().government;
        self.world.get::<Government>(government)
    }

    /// Current government stance
    pub fn policy(&self) -> Policy {
        self.government().map(|g| g.policy).unwrap_or_default()
    }

    /// Live count of employed workers
    pub fn employed_workers(&self) -> usize {
        count_employed(&self.world)
    }

    /// Mutate every worker in place
    pub fn for_each_worker_mut(&mut self, mut f: impl FnMut(&mut Worker)) {
        let mut workers = self.world.query::<&mut Worker>();
        for mut worker in workers.iter_mut(&mut self.world) {
            f(&mut *worker);
        }
    }

    /// Mutate every corporation in place
    pub fn for_each_corporation_mut(&mut self, mut f: impl FnMut(&mut Corporation)) {
        let mut corporations = self.world.query::<&mut Corporation>();
        for mut corporation in corporations.iter_mut(&mut self.world) {
            f(&mut *corporation);
        }
    }

    pub fn government_mut(&mut self) -> Option<Mut<'_, Government>> {
        let government = self.world.resource::<Roster>().government;
        self.world.get_mut::<Government>(government)
    }

    /// Tally the population by variant
    pub fn population(&mut self) -> PopulationSummary {
        population_summary(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

impl std::fmt::Debug for SimulationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationModel")
            .field("round", &self.round())
            .field("num_workers", &self.num_workers())
            .field("num_corporations", &self.num_corporations())
            .field("automation_level", &self.automation_level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(num_workers: usize, num_corporations: usize, automation_level: f64) -> SimulationModel {
        SimulationModel::new(ModelParams::new(num_workers, num_corporations, automation_level).with_seed(42))
            .unwrap()
    }

    #[test]
    fn test_rejects_empty_workforce() {
        let err = SimulationModel::new(ModelParams::new(0, 10, 0.3)).unwrap_err();
        assert_eq!(err, ModelError::NoWorkers);
    }

    #[test]
    fn test_rejects_non_finite_automation() {
        let err = SimulationModel::new(ModelParams::new(10, 1, f64::NAN)).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteAutomation(_)));
    }

    #[test]
    fn test_rejects_empty_spawn_range() {
        let mut rules = Rules::default();
        rules.initial.skill_range = (0.5, 0.5);
        let err = SimulationModel::new(ModelParams::new(10, 1, 0.3).with_rules(rules)).unwrap_err();
        assert!(matches!(err, ModelError::EmptyRange { name: "skill", .. }));
    }

    #[test]
    fn test_zero_corporations_is_allowed() {
        let mut model = seeded(10, 0, 0.3);
        model.run(3);
        assert_eq!(model.metrics().len(), 3);
        assert_eq!(model.metrics().last().unwrap().corporate_profit, 0.0);
    }

    #[test]
    fn test_fresh_model_state() {
        let model = seeded(20, 4, 0.25);
        assert_eq!(model.round(), 0);
        assert!(model.metrics().is_empty());
        assert_eq!(model.automation_level(), 0.25);
        assert_eq!(model.workers().count(), 20);
        assert_eq!(model.corporations().count(), 4);
        assert_eq!(model.employed_workers(), 20);
        assert_eq!(model.policy(), Policy::Balanced);
    }

    #[test]
    fn test_first_record_captures_initial_state() {
        let mut model = seeded(50, 5, 0.3);
        let mean_skill: f64 = model.workers().map(|w| w.skill_level).sum::<f64>() / 50.0;

        model.step();

        let first = model.metrics().first().copied().unwrap();
        assert_eq!(first.round, 0);
        assert_eq!(first.employment, 1.0);
        assert_eq!(first.automation_level, 0.3);
        assert_eq!(first.corporate_profit, 1.0);
        assert!((first.worker_wellbeing - 0.7).abs() < 1e-12);
        assert!((first.average_skill - mean_skill).abs() < 1e-12);
        assert_eq!(model.round(), 1);
    }

    #[test]
    fn test_overrides_between_rounds() {
        let mut model = seeded(10, 2, 0.3);
        model.for_each_worker_mut(|w| w.adaptability = 0.9);
        model.for_each_corporation_mut(|c| c.profit = 5.0);
        if let Some(mut government) = model.government_mut() {
            government.policy = Policy::ProWorker;
        }
        model.set_automation_level(0.6);

        assert!(model.workers().all(|w| w.adaptability == 0.9));
        assert!(model.corporations().all(|c| c.profit == 5.0));
        assert_eq!(model.policy(), Policy::ProWorker);
        assert_eq!(model.automation_level(), 0.6);
    }

    #[test]
    fn test_into_metrics_keeps_series() {
        let mut model = seeded(10, 1, 0.3);
        model.run(4);
        let series = model.into_metrics();
        assert_eq!(series.len(), 4);
    }
}

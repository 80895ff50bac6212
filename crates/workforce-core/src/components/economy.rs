//! Economy Resources
//!
//! Model-wide state shared by every agent.

use bevy_ecs::prelude::*;

/// Economy-wide automation pressure.
///
/// Corporations are the only writers, through [`AutomationLevel::raise`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AutomationLevel(pub f64);

impl AutomationLevel {
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Push the level up by `delta`
    pub fn raise(&mut self, delta: f64) {
        self.0 += delta;
    }
}

/// Population sizes fixed at construction
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationSize {
    pub num_workers: usize,
    pub num_corporations: usize,
}

impl PopulationSize {
    /// Workers, corporations and the government
    pub fn total_agents(&self) -> usize {
        self.num_workers + self.num_corporations + 1
    }
}

/// Entity handles of the population, grouped by variant in id order.
///
/// Built once by setup and never modified afterwards.
#[derive(Resource, Debug, Clone)]
pub struct Roster {
    pub workers: Vec<Entity>,
    pub corporations: Vec<Entity>,
    pub government: Entity,
}

/// Number of completed rounds
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundClock {
    pub completed: u64,
}

impl RoundClock {
    pub fn advance(&mut self) {
        self.completed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automation_only_rises() {
        let mut level = AutomationLevel(0.3);
        level.raise(0.02);
        level.raise(0.02);
        assert!((level.get() - 0.34).abs() < 1e-12);
    }

    #[test]
    fn test_population_total_includes_government() {
        let size = PopulationSize { num_workers: 100, num_corporations: 10 };
        assert_eq!(size.total_agents(), 111);

        let no_corps = PopulationSize { num_workers: 5, num_corporations: 0 };
        assert_eq!(no_corps.total_agents(), 6);
    }
}

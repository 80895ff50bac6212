//! Population Spawning
//!
//! Spawns the fixed population: workers first, then corporations, then the
//! single government. Ids follow spawn order.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::{
    AgentId, AgentKind, Corporation, Government, PopulationSize, Roster, Worker,
};
use crate::config::InitialRules;

/// Spawn every agent and return their handles grouped by variant.
///
/// Worker draws happen here in id order (skill, then adaptability), before
/// any round runs.
pub fn spawn_population(
    world: &mut World,
    size: &PopulationSize,
    initial: &InitialRules,
    rng: &mut impl Rng,
) -> Roster {
    let mut next_id = 0u32;
    let mut assign_id = || {
        let id = AgentId(next_id);
        next_id += 1;
        id
    };

    let mut workers = Vec::with_capacity(size.num_workers);
    for _ in 0..size.num_workers {
        let worker = Worker::spawn(initial, rng);
        workers.push(world.spawn((assign_id(), AgentKind::Worker, worker)).id());
    }

    let mut corporations = Vec::with_capacity(size.num_corporations);
    for _ in 0..size.num_corporations {
        let corporation = Corporation::spawn(initial);
        corporations.push(world.spawn((assign_id(), AgentKind::Corporation, corporation)).id());
    }

    let government = world
        .spawn((assign_id(), AgentKind::Government, Government::new()))
        .id();

    Roster {
        workers,
        corporations,
        government,
    }
}

/// Counts of the live population
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationSummary {
    pub total_agents: usize,
    pub workers: usize,
    pub employed: usize,
    pub unemployed: usize,
    pub corporations: usize,
    pub governments: usize,
}

/// Tally every agent in the world by variant
pub fn population_summary(world: &mut World) -> PopulationSummary {
    let mut summary = PopulationSummary::default();

    let mut query = world.query::<(&AgentKind, Option<&Worker>)>();
    for (kind, worker) in query.iter(world) {
        summary.total_agents += 1;
        match kind {
            AgentKind::Worker => {
                summary.workers += 1;
                match worker {
                    Some(w) if w.employed => summary.employed += 1,
                    _ => summary.unemployed += 1,
                }
            }
            AgentKind::Corporation => summary.corporations += 1,
            AgentKind::Government => summary.governments += 1,
        }
    }

    summary
}

impl std::fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total agents: {}", self.total_agents)?;
        writeln!(
            f,
            "  Workers: {} ({} employed, {} unemployed)",
            self.workers, self.employed, self.unemployed
        )?;
        writeln!(f, "  Corporations: {}", self.corporations)?;
        write!(f, "  Governments: {}", self.governments)
    }
}

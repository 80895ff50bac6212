//! Agent Activation
//!
//! Random-activation scheduler. Every round the agent handles are shuffled
//! and each agent takes exactly one turn against the live world: agents
//! later in the order see whatever earlier agents changed this round.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::components::{
    AgentId, AgentKind, AutomationLevel, Corporation, Government, PopulationSize, Roster,
    RoundClock, Strategy, Worker, WorkerOutcome,
};
use crate::config::{GovernmentRules, Rules};
use crate::SimRng;

/// Exclusive system: one shuffled pass over the whole population, then
/// advance the round clock.
pub fn activate_agents(world: &mut World) {
    let rules = world.resource::<Rules>().clone();

    world.resource_scope(|world, mut rng: Mut<SimRng>| {
        for entity in activation_order(world, &mut rng.0) {
            activate(world, entity, &rules, &mut rng.0);
        }
    });

    let round = {
        let mut clock = world.resource_mut::<RoundClock>();
        clock.advance();
        clock.completed
    };
    debug!(
        round,
        automation_level = world.resource::<AutomationLevel>().get(),
        employed = count_employed(world),
        "Round complete"
    );
}

/// This round's turn order: every agent exactly once, sorted by id and then
/// shuffled.
pub fn activation_order(world: &mut World, rng: &mut SmallRng) -> Vec<Entity> {
    let mut agents: Vec<(AgentId, Entity)> = world
        .query::<(&AgentId, Entity)>()
        .iter(world)
        .map(|(&id, entity)| (id, entity))
        .collect();
    agents.sort_unstable_by_key(|&(id, _)| id);

    let mut order: Vec<Entity> = agents.into_iter().map(|(_, entity)| entity).collect();
    order.shuffle(rng);
    order
}

/// Give one agent its turn
fn activate(world: &mut World, entity: Entity, rules: &Rules, rng: &mut SmallRng) {
    let Some(kind) = world.get::<AgentKind>(entity).copied() else {
        return;
    };

    match kind {
        AgentKind::Worker => step_worker(world, entity, rules, rng),
        AgentKind::Corporation => step_corporation(world, entity, rules),
        AgentKind::Government => step_government(world, entity, rules),
    }
}

fn step_worker(world: &mut World, entity: Entity, rules: &Rules, rng: &mut SmallRng) {
    let automation_level = world.resource::<AutomationLevel>().get();
    let Some(mut worker) = world.get_mut::<Worker>(entity) else {
        return;
    };

    if worker.step(automation_level, &rules.worker, rng) == WorkerOutcome::LaidOff {
        trace!(?entity, skill = worker.skill_level, "Worker laid off");
    }
}

fn step_corporation(world: &mut World, entity: Entity, rules: &Rules) {
    let employed = count_employed(world);
    let num_workers = world.resource::<PopulationSize>().num_workers;

    let strategy = {
        let Some(mut corporation) = world.get_mut::<Corporation>(entity) else {
            return;
        };
        corporation.step(employed, num_workers, &rules.corporation)
    };

    if strategy == Strategy::Automate {
        let mut automation = world.resource_mut::<AutomationLevel>();
        automation.raise(rules.corporation.automation_level_step);
        trace!(?entity, level = automation.get(), "Automation pushed");
    }
}

fn step_government(world: &mut World, entity: Entity, rules: &Rules) {
    let employed = count_employed(world);
    let num_workers = world.resource::<PopulationSize>().num_workers;

    let policy = {
        let Some(mut government) = world.get_mut::<Government>(entity) else {
            return;
        };
        let previous = government.policy;
        let policy = government.step(employed, num_workers, &rules.government);
        if policy != previous {
            trace!(from = %previous, to = %policy, "Policy changed");
        }
        policy
    };

    if policy.funds_reskilling() {
        let reskilled = run_reskilling_program(world, &rules.government);
        trace!(reskilled, "Reskilling program ran");
    }
}

/// Number of workers currently employed, read from the live world
pub fn count_employed(world: &World) -> usize {
    let roster = world.resource::<Roster>();
    roster
        .workers
        .iter()
        .filter(|&&entity| world.get::<Worker>(entity).is_some_and(|w| w.employed))
        .count()
}

/// Boost skill and adaptability of every unemployed worker.
///
/// Applies to all of them at once, regardless of where they fall in this
/// round's activation order. Returns how many workers were reskilled.
pub fn run_reskilling_program(world: &mut World, rules: &GovernmentRules) -> usize {
    let mut reskilled = 0;
    let mut workers = world.query::<&mut Worker>();
    for mut worker in workers.iter_mut(world) {
        if !worker.employed {
            worker.skill_level += rules.reskill_skill_gain;
            worker.adaptability += rules.reskill_adaptability_gain;
            reskilled += 1;
        }
    }
    reskilled
}

//! Worker Agent
//!
//! Workers respond to automation pressure by reskilling or, failing that,
//! risking their job.

use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{InitialRules, WorkerRules};

/// What a worker did in its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// Automation below skill, nothing drawn
    Secure,
    /// Reskilled under threat
    Reskilled,
    /// Threatened but kept the job without reskilling
    Held,
    /// Lost the job this turn
    LaidOff,
}

/// Worker state
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unbounded above: repeated reskilling can push it past 1.0
    pub skill_level: f64,
    /// Chance of reskilling when threatened
    pub adaptability: f64,
    /// Once false, stays false
    pub employed: bool,
    /// Held within [floor, ceiling] after every own update
    pub well_being: f64,
}

impl Worker {
    /// Spawn a worker, drawing skill then adaptability
    pub fn spawn(initial: &InitialRules, rng: &mut impl Rng) -> Self {
        let skill_level = rng.gen_range(initial.skill_range.0..initial.skill_range.1);
        let adaptability = rng.gen_range(initial.adaptability_range.0..initial.adaptability_range.1);
        Self {
            skill_level,
            adaptability,
            employed: true,
            well_being: initial.well_being,
        }
    }

    /// Whether `automation_level` exceeds this worker's skill
    pub fn is_threatened(&self, automation_level: f64) -> bool {
        automation_level > self.skill_level
    }

    /// Run one turn against the current automation level
    pub fn step(&mut self, automation_level: f64, rules: &WorkerRules, rng: &mut impl Rng) -> WorkerOutcome {
        let mut outcome = WorkerOutcome::Secure;

        if self.is_threatened(automation_level) {
            if rng.gen::<f64>() < self.adaptability {
                self.skill_level += rules.reskill_gain;
                self.well_being -= rules.reskill_stress;
                outcome = WorkerOutcome::Reskilled;
            } else if rng.gen::<f64>() < automation_level - self.skill_level {
                self.employed = false;
                self.well_being -= rules.layoff_shock;
                outcome = WorkerOutcome::LaidOff;
            } else {
                outcome = WorkerOutcome::Held;
            }
        }

        self.well_being = if self.employed {
            (self.well_being + rules.employed_recovery).min(rules.well_being_ceiling)
        } else {
            (self.well_being - rules.unemployed_decline).max(rules.well_being_floor)
        };
        self.well_being = self.well_being.clamp(rules.well_being_floor, rules.well_being_ceiling);

        outcome
    }
}

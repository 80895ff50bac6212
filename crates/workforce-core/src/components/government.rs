//! Government Agent
//!
//! The government re-derives its policy from the employment rate every round
//! and funds reskilling for the unemployed while employment is low.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GovernmentRules;

/// Government stance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    #[default]
    Balanced,
    ProWorker,
    ProBusiness,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Balanced => "balanced",
            Policy::ProWorker => "pro-worker",
            Policy::ProBusiness => "pro-business",
        }
    }

    /// Whether this stance runs the reskilling program
    pub fn funds_reskilling(&self) -> bool {
        matches!(self, Policy::ProWorker)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "balanced" => Ok(Policy::Balanced),
            "pro-worker" => Ok(Policy::ProWorker),
            "pro-business" => Ok(Policy::ProBusiness),
            other => Err(format!("unknown policy: {}", other)),
        }
    }
}

/// Government state
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Government {
    pub policy: Policy,
}

impl Government {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the policy from the live employed-worker count.
    ///
    /// `num_workers` must be positive; the model refuses to build otherwise.
    pub fn step(&mut self, employed_workers: usize, num_workers: usize, rules: &GovernmentRules) -> Policy {
        let employment_rate = employed_workers as f64 / num_workers as f64;

        self.policy = if employment_rate < rules.pro_worker_below {
            Policy::ProWorker
        } else if employment_rate > rules.pro_business_above {
            Policy::ProBusiness
        } else {
            Policy::Balanced
        };

        self.policy
    }
}

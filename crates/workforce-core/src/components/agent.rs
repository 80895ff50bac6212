//! Agent Identity
//!
//! Components shared by every agent regardless of its variant.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable identifier, assigned in spawn order. Turn order is shuffled from
/// the agents sorted by this id.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// The closed set of agent variants.
///
/// Each entity carries exactly one kind, and the component matching that kind
/// ([`Worker`](super::Worker), [`Corporation`](super::Corporation) or
/// [`Government`](super::Government)).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Worker,
    Corporation,
    Government,
}

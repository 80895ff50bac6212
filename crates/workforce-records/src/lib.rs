//! Shared record types for the workforce simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core crate produces them; reports and external tooling consume them.

pub mod metrics;
pub mod report;

pub use metrics::{MetricsRecord, MetricsSeries};
pub use report::{EmploymentDecline, FinalValues, Report, ScenarioAnalysis, ScenarioReport};

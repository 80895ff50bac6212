//! ECS Systems
//!
//! The per-round pipeline: metrics collection, then agent activation.

pub mod activation;
pub mod metrics;

pub use activation::{activate_agents, activation_order, count_employed, run_reskilling_program};
pub use metrics::{collect_metrics, measure, MetricsCollector};

//! Per-round Metrics
//!
//! One record per round, captured before the round's agents act.

use serde::{Deserialize, Serialize};

/// Aggregate statistics captured at the start of a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Round index, starting at 0
    pub round: u64,
    /// Employed workers / total workers
    pub employment: f64,
    /// Mean worker skill level
    pub average_skill: f64,
    /// Mean worker well-being
    pub worker_wellbeing: f64,
    /// Mean corporation profit (0.0 without corporations)
    pub corporate_profit: f64,
    /// Shared automation level
    pub automation_level: f64,
}

/// Ordered, append-only sequence of round records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSeries {
    records: Vec<MetricsRecord>,
}

impl MetricsSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next record. Rounds must arrive in order.
    pub fn push(&mut self, record: MetricsRecord) {
        debug_assert_eq!(record.round, self.records.len() as u64);
        self.records.push(record);
    }

    pub fn records(&self) -> &[MetricsRecord] {
        &self.records
    }

    pub fn get(&self, round: u64) -> Option<&MetricsRecord> {
        self.records.get(round as usize)
    }

    pub fn first(&self) -> Option<&MetricsRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&MetricsRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricsRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a MetricsSeries {
    type Item = &'a MetricsRecord;
    type IntoIter = std::slice::Iter<'a, MetricsRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

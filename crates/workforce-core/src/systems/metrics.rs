//! Metrics Collection
//!
//! Records the population aggregates at the start of each round, before any
//! agent acts, so record `n` reflects the state left by round `n - 1`.

use bevy_ecs::prelude::*;
use workforce_records::{MetricsRecord, MetricsSeries};

use crate::components::{AutomationLevel, Corporation, PopulationSize, RoundClock, Worker};

/// Resource holding the append-only metrics series
#[derive(Resource, Debug, Default)]
pub struct MetricsCollector {
    series: MetricsSeries,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: MetricsRecord) {
        self.series.push(record);
    }

    pub fn series(&self) -> &MetricsSeries {
        &self.series
    }

    pub fn into_series(self) -> MetricsSeries {
        self.series
    }
}

/// Compute one round's record.
///
/// Worker means divide by `num_workers`; the corporate mean is 0.0 when the
/// model has no corporations.
pub fn measure<'a>(
    round: u64,
    size: &PopulationSize,
    automation_level: f64,
    workers: impl IntoIterator<Item = &'a Worker>,
    corporations: impl IntoIterator<Item = &'a Corporation>,
) -> MetricsRecord {
    let mut employed = 0usize;
    let mut skill_sum = 0.0;
    let mut well_being_sum = 0.0;
    for worker in workers {
        if worker.employed {
            employed += 1;
        }
        skill_sum += worker.skill_level;
        well_being_sum += worker.well_being;
    }

    let profit_sum: f64 = corporations.into_iter().map(|c| c.profit).sum();
    let corporate_profit = if size.num_corporations > 0 {
        profit_sum / size.num_corporations as f64
    } else {
        0.0
    };

    let num_workers = size.num_workers as f64;
    MetricsRecord {
        round,
        employment: employed as f64 / num_workers,
        average_skill: skill_sum / num_workers,
        worker_wellbeing: well_being_sum / num_workers,
        corporate_profit,
        automation_level,
    }
}

/// System to append the current round's record
pub fn collect_metrics(
    clock: Res<RoundClock>,
    size: Res<PopulationSize>,
    automation: Res<AutomationLevel>,
    workers: Query<&Worker>,
    corporations: Query<&Corporation>,
    mut collector: ResMut<MetricsCollector>,
) {
    let record = measure(
        clock.completed,
        &size,
        automation.get(),
        workers.iter(),
        corporations.iter(),
    );
    collector.record(record);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(skill_level: f64, employed: bool, well_being: f64) -> Worker {
        Worker {
            skill_level,
            adaptability: 0.5,
            employed,
            well_being,
        }
    }

    #[test]
    fn test_measure_means() {
        let size = PopulationSize { num_workers: 4, num_corporations: 2 };
        let workers = [
            worker(0.4, true, 0.7),
            worker(0.6, true, 0.9),
            worker(0.5, false, 0.1),
            worker(0.5, true, 0.5),
        ];
        let corporations = [
            Corporation { automation_investment: 0.5, competitiveness: 0.7, profit: 1.0 },
            Corporation { automation_investment: 0.5, competitiveness: 0.7, profit: 2.0 },
        ];

        let record = measure(3, &size, 0.42, &workers, &corporations);

        assert_eq!(record.round, 3);
        assert_eq!(record.employment, 0.75);
        assert!((record.average_skill - 0.5).abs() < 1e-12);
        assert!((record.worker_wellbeing - 0.55).abs() < 1e-12);
        assert_eq!(record.corporate_profit, 1.5);
        assert_eq!(record.automation_level, 0.42);
    }

    #[test]
    fn test_measure_without_corporations() {
        let size = PopulationSize { num_workers: 1, num_corporations: 0 };
        let workers = [worker(0.5, true, 0.7)];
        let record = measure(0, &size, 0.1, &workers, std::iter::empty());
        assert_eq!(record.corporate_profit, 0.0);
    }

    #[test]
    fn test_collect_metrics_system_appends() {
        let mut world = World::new();
        world.insert_resource(RoundClock::default());
        world.insert_resource(PopulationSize { num_workers: 2, num_corporations: 1 });
        world.insert_resource(AutomationLevel(0.3));
        world.insert_resource(MetricsCollector::new());
        world.spawn(worker(0.5, true, 0.7));
        world.spawn(worker(0.7, false, 0.3));
        world.spawn(Corporation { automation_investment: 0.5, competitiveness: 0.7, profit: 1.0 });

        let mut schedule = Schedule::default();
        schedule.add_systems(collect_metrics);
        schedule.run(&mut world);
        world.resource_mut::<RoundClock>().advance();
        schedule.run(&mut world);

        let series = world.resource::<MetricsCollector>().series();
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(0).unwrap().employment, 0.5);
        assert_eq!(series.get(1).unwrap().round, 1);
    }
}

//! Run Analysis
//!
//! Derives headline figures from a completed metrics series.

use workforce_records::{EmploymentDecline, FinalValues, MetricsSeries, ScenarioAnalysis};

/// Largest round-to-round employment drop, if employment ever fell.
///
/// The reported round is the one whose record shows the lower value.
pub fn steepest_decline(series: &MetricsSeries) -> Option<EmploymentDecline> {
    let records = series.records();
    let mut steepest: Option<EmploymentDecline> = None;

    for pair in records.windows(2) {
        let change = pair[1].employment - pair[0].employment;
        if change >= 0.0 {
            continue;
        }
        if steepest.map_or(true, |s| change < s.change) {
            steepest = Some(EmploymentDecline {
                round: pair[1].round,
                change,
            });
        }
    }

    steepest
}

/// Analyse a series. Returns `None` for an empty series.
pub fn analyze(series: &MetricsSeries) -> Option<ScenarioAnalysis> {
    let first = series.first()?;
    let last = series.last()?;

    Some(ScenarioAnalysis {
        final_values: FinalValues::from(last),
        employment_change: last.employment - first.employment,
        skill_growth: last.average_skill - first.average_skill,
        steepest_decline: steepest_decline(series),
    })
}

/// Human-readable summary, one figure per line
pub fn format_analysis(name: &str, analysis: &ScenarioAnalysis) -> String {
    let values = &analysis.final_values;
    let mut lines = vec![
        format!("=== {} ===", name),
        format!("Final Employment: {:.2}%", values.employment * 100.0),
        format!("Employment Change: {:.2}%", analysis.employment_change * 100.0),
        format!("Skill Growth: {:.2}", analysis.skill_growth),
        format!("Final Worker Well-being: {:.2}", values.worker_wellbeing),
        format!("Final Corporate Profit: {:.2}", values.corporate_profit),
        format!("Final Automation Level: {:.2}", values.automation_level),
    ];
    if let Some(decline) = analysis.steepest_decline {
        lines.push(format!(
            "Steepest Employment Decline: {:.2}% at round {}",
            decline.change * 100.0,
            decline.round
        ));
    }
    lines.join("\n")
}

//! Work-life radar: satisfaction-family averages for stayed vs. left

use serde::Serialize;

use super::domains::WORKLIFE_LABELS;
use super::round2;
use crate::types::EmployeeRecord;

/// Per-metric averages for the stayed and left populations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLifeAverages {
    /// Metric labels in fixed order
    pub labels: Vec<String>,
    /// Average per metric over records that stayed
    pub stayed: Vec<f64>,
    /// Average per metric over records that left
    pub left: Vec<f64>,
}

/// Compare satisfaction-family averages between stayers and leavers
///
/// Covers job satisfaction, environment satisfaction, relationship
/// satisfaction, work-life balance, and job involvement, all on the 1-4
/// scale. A population with no records reports 0.0 for every metric.
pub fn worklife_balance(subset: &[&EmployeeRecord]) -> WorkLifeAverages {
    let metrics: [fn(&EmployeeRecord) -> u8; 5] = [
        |r| r.job_satisfaction,
        |r| r.environment_satisfaction,
        |r| r.relationship_satisfaction,
        |r| r.work_life_balance,
        |r| r.job_involvement,
    ];

    let mut stayed = Vec::with_capacity(metrics.len());
    let mut left = Vec::with_capacity(metrics.len());

    for metric in metrics {
        stayed.push(population_average(subset, metric, false));
        left.push(population_average(subset, metric, true));
    }

    WorkLifeAverages {
        labels: WORKLIFE_LABELS.iter().map(|l| l.to_string()).collect(),
        stayed,
        left,
    }
}

fn population_average(
    subset: &[&EmployeeRecord],
    metric: fn(&EmployeeRecord) -> u8,
    attrition: bool,
) -> f64 {
    let mut sum = 0u64;
    let mut count = 0u64;
    for record in subset.iter().filter(|r| r.attrition == attrition) {
        sum += u64::from(metric(record));
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        round2(sum as f64 / count as f64)
    }
}

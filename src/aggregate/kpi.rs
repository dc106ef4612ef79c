//! KPI summary aggregation

use serde::Serialize;

use super::{rate_pct, round2};
use crate::types::EmployeeRecord;

/// Scalar summary metrics for a filtered subset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Number of records in the subset
    pub total: usize,
    /// Share of records marked attrition, as a percentage
    pub attrition_rate: f64,
    /// Average age
    pub avg_age: f64,
    /// Average monthly income, rounded to the nearest integer
    pub avg_income: u32,
    /// Average job satisfaction (1-4 scale)
    pub avg_satisfaction: f64,
}

/// Compute the KPI summary over a subset
///
/// An empty subset yields all-zero metrics.
pub fn kpi_summary(subset: &[&EmployeeRecord]) -> KpiSummary {
    let total = subset.len();
    if total == 0 {
        return KpiSummary {
            total: 0,
            attrition_rate: 0.0,
            avg_age: 0.0,
            avg_income: 0,
            avg_satisfaction: 0.0,
        };
    }

    let attrition = subset.iter().filter(|r| r.attrition).count();
    let age_sum: u64 = subset.iter().map(|r| u64::from(r.age)).sum();
    let income_sum: u64 = subset.iter().map(|r| u64::from(r.monthly_income)).sum();
    let satisfaction_sum: u64 = subset.iter().map(|r| u64::from(r.job_satisfaction)).sum();

    KpiSummary {
        total,
        attrition_rate: rate_pct(attrition, total),
        avg_age: round2(age_sum as f64 / total as f64),
        avg_income: (income_sum as f64 / total as f64).round() as u32,
        avg_satisfaction: round2(satisfaction_sum as f64 / total as f64),
    }
}

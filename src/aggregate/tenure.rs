//! Attrition rate by tenure bucket

use serde::Serialize;

use super::domains::{tenure_bucket_index, tenure_bucket_labels, TENURE_BUCKETS};
use super::rate_pct;
use crate::types::EmployeeRecord;

/// Attrition rate and headcount per tenure bucket, ascending tenure order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenureAttrition {
    /// Bucket labels, ascending
    pub labels: Vec<String>,
    /// Attrition rate per bucket, percentage with one decimal
    pub attrition_rate: Vec<f64>,
    /// Records per bucket
    pub total: Vec<usize>,
}

/// Attrition rate across the fixed tenure buckets
///
/// An empty bucket reports a 0.0 rate; labels never change with the filter
/// selection.
pub fn years_attrition(subset: &[&EmployeeRecord]) -> TenureAttrition {
    let mut total = vec![0usize; TENURE_BUCKETS.len()];
    let mut left = vec![0usize; TENURE_BUCKETS.len()];

    for record in subset {
        let index = tenure_bucket_index(record.years_at_company);
        total[index] += 1;
        if record.attrition {
            left[index] += 1;
        }
    }

    TenureAttrition {
        labels: tenure_bucket_labels(),
        attrition_rate: left
            .iter()
            .zip(&total)
            .map(|(&l, &t)| rate_pct(l, t))
            .collect(),
        total,
    }
}

//! Distribution aggregations: age bins, gender split, satisfaction levels,
//! overtime split
//!
//! Two shapes cover the four queries. Age and gender report totals alongside
//! the attrition count; satisfaction and overtime split each slot into
//! stayed/left counts for grouped-bar rendering.

use serde::Serialize;

use super::domains::{
    age_bin_index, age_bin_labels, AGE_BIN_COUNT, OVERTIME_LABELS, SATISFACTION_LABELS,
};
use crate::types::{EmployeeRecord, Gender};

/// Per-slot totals with an attrition overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinnedCounts {
    /// Slot labels in fixed order
    pub labels: Vec<String>,
    /// Records per slot
    pub total: Vec<usize>,
    /// Attrition count per slot
    pub attrition: Vec<usize>,
}

/// Per-slot stayed/left counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StayLeaveCounts {
    /// Slot labels in fixed order
    pub labels: Vec<String>,
    /// Records that stayed, per slot
    pub stayed: Vec<usize>,
    /// Records that left, per slot
    pub left: Vec<usize>,
}

/// Headcount and attrition across the fixed five-year age bins
pub fn age_distribution(subset: &[&EmployeeRecord]) -> BinnedCounts {
    let mut total = vec![0usize; AGE_BIN_COUNT];
    let mut attrition = vec![0usize; AGE_BIN_COUNT];

    for record in subset {
        let index = age_bin_index(record.age);
        total[index] += 1;
        if record.attrition {
            attrition[index] += 1;
        }
    }

    BinnedCounts {
        labels: age_bin_labels(),
        total,
        attrition,
    }
}

/// Headcount and attrition per gender, canonical order
pub fn gender_split(subset: &[&EmployeeRecord]) -> BinnedCounts {
    let mut total = vec![0usize; Gender::ALL.len()];
    let mut attrition = vec![0usize; Gender::ALL.len()];

    for record in subset {
        // Gender::ALL is exhaustive, position always succeeds.
        if let Some(index) = Gender::ALL.iter().position(|g| *g == record.gender) {
            total[index] += 1;
            if record.attrition {
                attrition[index] += 1;
            }
        }
    }

    BinnedCounts {
        labels: Gender::ALL.iter().map(|g| g.as_str().to_string()).collect(),
        total,
        attrition,
    }
}

/// Stayed/left counts per job satisfaction level (1-4)
pub fn satisfaction_distribution(subset: &[&EmployeeRecord]) -> StayLeaveCounts {
    let mut stayed = vec![0usize; SATISFACTION_LABELS.len()];
    let mut left = vec![0usize; SATISFACTION_LABELS.len()];

    for record in subset {
        // Codes are range-validated at load, 1-4.
        let index = usize::from(record.job_satisfaction - 1);
        if record.attrition {
            left[index] += 1;
        } else {
            stayed[index] += 1;
        }
    }

    StayLeaveCounts {
        labels: SATISFACTION_LABELS.iter().map(|l| l.to_string()).collect(),
        stayed,
        left,
    }
}

/// Stayed/left counts split by overtime status
pub fn overtime_attrition(subset: &[&EmployeeRecord]) -> StayLeaveCounts {
    let mut stayed = vec![0usize; 2];
    let mut left = vec![0usize; 2];

    for record in subset {
        let index = if record.overtime { 0 } else { 1 };
        if record.attrition {
            left[index] += 1;
        } else {
            stayed[index] += 1;
        }
    }

    StayLeaveCounts {
        labels: OVERTIME_LABELS.iter().map(|l| l.to_string()).collect(),
        stayed,
        left,
    }
}

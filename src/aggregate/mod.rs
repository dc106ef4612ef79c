//! Aggregation engine
//!
//! A family of named aggregation functions over a filtered record subset.
//! Each function returns one fixed, chart-ready shape: labels are pre-sorted,
//! rates pre-rounded, and the caller never needs further computation before
//! rendering.
//!
//! # Shape conventions
//!
//! - Rates are percentages rounded to one decimal place.
//! - Averages are rounded to two decimal places, except average income which
//!   rounds to the nearest integer.
//! - An empty subset produces zeros everywhere, never an error.
//! - Category sets and bucket boundaries are fixed constants (see
//!   [`domains`]), not derived from the data: a category with zero matching
//!   records still appears zero-filled, so chart axes never shift as the
//!   user changes filters.
//!
//! # Example
//!
//! ```rust,ignore
//! use attrition_engine::aggregate::kpi_summary;
//!
//! let subset = predicate.apply(&store);
//! let kpis = kpi_summary(&subset);
//! println!("attrition rate: {}%", kpis.attrition_rate);
//! ```

pub mod breakdown;
pub mod distribution;
pub mod domains;
pub mod income;
pub mod kpi;
pub mod tenure;
pub mod worklife;

pub use breakdown::{
    attrition_by_department, attrition_by_education_field, attrition_by_job_role,
    CategoryBreakdown,
};
pub use distribution::{
    age_distribution, gender_split, overtime_attrition, satisfaction_distribution, BinnedCounts,
    StayLeaveCounts,
};
pub use income::{income_by_role, IncomeByRole};
pub use kpi::{kpi_summary, KpiSummary};
pub use tenure::{years_attrition, TenureAttrition};
pub use worklife::{worklife_balance, WorkLifeAverages};

/// Round to one decimal place (rates)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (averages)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` in `whole`, rounded to one decimal place
///
/// An empty `whole` yields 0.0, never a division error.
pub(crate) fn rate_pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round1(part as f64 / whole as f64 * 100.0)
    }
}

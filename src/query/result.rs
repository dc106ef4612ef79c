//! Unified aggregation result type
//!
//! Every registered query returns one of the fixed shapes defined by the
//! aggregation engine. The enum serializes untagged: the caller sees exactly
//! the shape's own fields (`labels`/`total`/... or the KPI scalars), with no
//! transport framing around them.

use serde::Serialize;

use crate::aggregate::{
    BinnedCounts, CategoryBreakdown, IncomeByRole, KpiSummary, StayLeaveCounts, TenureAttrition,
    WorkLifeAverages,
};

/// Result of one dispatched query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AggregationResult {
    /// KPI summary scalars
    Kpis(KpiSummary),
    /// Per-category attrition breakdown
    Categories(CategoryBreakdown),
    /// Binned totals with attrition overlay
    Binned(BinnedCounts),
    /// Average income per role
    Income(IncomeByRole),
    /// Stayed/left counts per slot
    StayLeave(StayLeaveCounts),
    /// Attrition rate per tenure bucket
    Tenure(TenureAttrition),
    /// Stayed/left metric averages
    WorkLife(WorkLifeAverages),
}

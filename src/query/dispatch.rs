//! Query registry and engine
//!
//! The registry is the fixed set of published query names; the engine maps a
//! name plus filter parameters onto the matching aggregation over the shared
//! store.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use super::params::FilterParams;
use super::result::AggregationResult;
use crate::aggregate::{
    age_distribution, attrition_by_department, attrition_by_education_field,
    attrition_by_job_role, gender_split, income_by_role, kpi_summary, overtime_attrition,
    satisfaction_distribution, worklife_balance, years_attrition,
};
use crate::error::QueryError;
use crate::store::{FilterOptions, RecordStore};

/// One entry in the fixed query registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Scalar KPI summary
    Kpis,
    /// Attrition breakdown by department
    AttritionByDepartment,
    /// Attrition breakdown by job role
    AttritionByJobRole,
    /// Attrition breakdown by education field
    EducationField,
    /// Headcount/attrition per fixed age bin
    AgeDistribution,
    /// Headcount/attrition per gender
    GenderSplit,
    /// Average income per job role
    IncomeByRole,
    /// Stayed/left per job satisfaction level
    SatisfactionDistribution,
    /// Stayed/left by overtime status
    OvertimeAttrition,
    /// Attrition rate per tenure bucket
    YearsAttrition,
    /// Work-life radar averages
    WorklifeBalance,
}

impl QueryKind {
    /// The full registry in published order
    pub const ALL: [QueryKind; 11] = [
        QueryKind::Kpis,
        QueryKind::AttritionByDepartment,
        QueryKind::AttritionByJobRole,
        QueryKind::EducationField,
        QueryKind::AgeDistribution,
        QueryKind::GenderSplit,
        QueryKind::IncomeByRole,
        QueryKind::SatisfactionDistribution,
        QueryKind::OvertimeAttrition,
        QueryKind::YearsAttrition,
        QueryKind::WorklifeBalance,
    ];

    /// Published name of this query
    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::Kpis => "kpis",
            QueryKind::AttritionByDepartment => "attrition-by-department",
            QueryKind::AttritionByJobRole => "attrition-by-jobrole",
            QueryKind::EducationField => "education-field",
            QueryKind::AgeDistribution => "age-distribution",
            QueryKind::GenderSplit => "gender-split",
            QueryKind::IncomeByRole => "income-by-role",
            QueryKind::SatisfactionDistribution => "satisfaction-distribution",
            QueryKind::OvertimeAttrition => "overtime-attrition",
            QueryKind::YearsAttrition => "years-attrition",
            QueryKind::WorklifeBalance => "worklife-balance",
        }
    }

    /// Look a name up in the registry
    pub fn from_name(name: &str) -> Option<Self> {
        QueryKind::ALL.iter().find(|k| k.name() == name).copied()
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryKind::from_name(s).ok_or_else(|| QueryError::UnknownQuery {
            name: s.to_string(),
        })
    }
}

/// Stateless query dispatcher over the shared record store
///
/// Cheap to clone; every clone shares the same immutable store.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<RecordStore>,
}

impl QueryEngine {
    /// Create an engine over a loaded store
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Dispatch a query by published name
    ///
    /// Fails only on an unregistered name. Filter parameter values never
    /// fail: unrecognized values select the empty subset and produce a
    /// zero-filled result.
    pub fn run(&self, name: &str, params: &FilterParams) -> Result<AggregationResult, QueryError> {
        let kind = name.parse::<QueryKind>()?;
        Ok(self.execute(kind, params))
    }

    /// Execute a registry entry directly
    pub fn execute(&self, kind: QueryKind, params: &FilterParams) -> AggregationResult {
        let subset = params.predicate().apply(&self.store);
        debug!(query = kind.name(), matched = subset.len(), "query executed");

        match kind {
            QueryKind::Kpis => AggregationResult::Kpis(kpi_summary(&subset)),
            QueryKind::AttritionByDepartment => {
                AggregationResult::Categories(attrition_by_department(&subset))
            }
            QueryKind::AttritionByJobRole => {
                AggregationResult::Categories(attrition_by_job_role(&subset))
            }
            QueryKind::EducationField => {
                AggregationResult::Categories(attrition_by_education_field(&subset))
            }
            QueryKind::AgeDistribution => AggregationResult::Binned(age_distribution(&subset)),
            QueryKind::GenderSplit => AggregationResult::Binned(gender_split(&subset)),
            QueryKind::IncomeByRole => AggregationResult::Income(income_by_role(&subset)),
            QueryKind::SatisfactionDistribution => {
                AggregationResult::StayLeave(satisfaction_distribution(&subset))
            }
            QueryKind::OvertimeAttrition => {
                AggregationResult::StayLeave(overtime_attrition(&subset))
            }
            QueryKind::YearsAttrition => AggregationResult::Tenure(years_attrition(&subset)),
            QueryKind::WorklifeBalance => AggregationResult::WorkLife(worklife_balance(&subset)),
        }
    }

    /// The cached filterable-attribute domains
    pub fn filter_options(&self) -> &FilterOptions {
        self.store.filter_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Department, EducationField, EmployeeRecord, Gender, JobRole, MaritalStatus,
    };

    fn record(department: Department) -> EmployeeRecord {
        EmployeeRecord {
            age: 38,
            gender: Gender::Male,
            marital_status: MaritalStatus::Married,
            education: 3,
            education_field: EducationField::LifeSciences,
            department,
            job_role: JobRole::SalesExecutive,
            job_level: 2,
            years_at_company: 7,
            overtime: false,
            monthly_income: 6000,
            hourly_rate: 65,
            job_satisfaction: 3,
            environment_satisfaction: 3,
            relationship_satisfaction: 3,
            work_life_balance: 3,
            job_involvement: 3,
            attrition: false,
        }
    }

    fn engine() -> QueryEngine {
        let store = RecordStore::from_records(vec![
            record(Department::Sales),
            record(Department::ResearchAndDevelopment),
        ])
        .unwrap();
        QueryEngine::new(Arc::new(store))
    }

    #[test]
    fn test_registry_names_are_unique_and_resolvable() {
        for kind in QueryKind::ALL {
            assert_eq!(QueryKind::from_name(kind.name()), Some(kind));
        }
        let mut names: Vec<&str> = QueryKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), QueryKind::ALL.len());
    }

    #[test]
    fn test_unknown_query_is_rejected() {
        let engine = engine();
        let err = engine
            .run("attrition-by-planet", &FilterParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::UnknownQuery { ref name } if name == "attrition-by-planet"
        ));
    }

    #[test]
    fn test_every_registered_query_runs() {
        let engine = engine();
        for kind in QueryKind::ALL {
            assert!(engine.run(kind.name(), &FilterParams::default()).is_ok());
        }
    }

    #[test]
    fn test_unrecognized_filter_value_yields_zero_result() {
        let engine = engine();
        let params = FilterParams {
            department: Some("Nonexistent".to_string()),
            ..FilterParams::default()
        };
        match engine.run("kpis", &params).unwrap() {
            AggregationResult::Kpis(kpis) => {
                assert_eq!(kpis.total, 0);
                assert_eq!(kpis.attrition_rate, 0.0);
            }
            other => panic!("expected KPI result, got {:?}", other),
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let engine = engine();
        let params = FilterParams {
            gender: Some("Male".to_string()),
            ..FilterParams::default()
        };
        let first = engine.run("attrition-by-department", &params).unwrap();
        let second = engine.run("attrition-by-department", &params).unwrap();
        assert_eq!(first, second);
    }
}

//! Immutable in-memory record store
//!
//! The store is built exactly once at process start from the source CSV and
//! never mutated afterwards. It is shared behind an `Arc` by every concurrent
//! query; readers need no synchronization because there is nothing to
//! synchronize with.
//!
//! Construction either yields the full store or fails with
//! [`DatasetLoadError`](crate::error::DatasetLoadError) — no partial-load
//! state is ever exposed.
//!
//! # Example
//!
//! ```rust,ignore
//! use attrition_engine::store::RecordStore;
//!
//! let store = RecordStore::load("data.csv")?;
//! println!("{} employees loaded", store.len());
//! ```

mod loader;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::DatasetLoadError;
use crate::types::{education_label, EmployeeRecord};

/// One selectable education level, paired with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationOption {
    /// Request-parameter value ("1" through "5")
    pub value: String,
    /// Display label for the dropdown
    pub label: String,
}

/// Enumerated domain values for each filterable attribute
///
/// Genders, job roles, and departments are the distinct values observed in
/// the loaded data, sorted; education levels are the fixed code/label pairs
/// from the data dictionary. Computed once at load time and cached for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct genders present in the data
    pub genders: Vec<String>,
    /// Distinct job roles present in the data
    pub job_roles: Vec<String>,
    /// Fixed education level options
    pub educations: Vec<EducationOption>,
    /// Distinct departments present in the data
    pub departments: Vec<String>,
}

impl FilterOptions {
    fn derive(records: &[EmployeeRecord]) -> Self {
        let genders: BTreeSet<&str> = records.iter().map(|r| r.gender.as_str()).collect();
        let job_roles: BTreeSet<&str> = records.iter().map(|r| r.job_role.as_str()).collect();
        let departments: BTreeSet<&str> = records.iter().map(|r| r.department.as_str()).collect();

        let educations = (1u8..=5)
            .map(|code| EducationOption {
                value: code.to_string(),
                label: education_label(code).to_string(),
            })
            .collect();

        Self {
            genders: genders.into_iter().map(String::from).collect(),
            job_roles: job_roles.into_iter().map(String::from).collect(),
            educations,
            departments: departments.into_iter().map(String::from).collect(),
        }
    }
}

/// Ordered, immutable collection of employee records
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    options: FilterOptions,
}

impl RecordStore {
    /// Load the store from a CSV source
    ///
    /// Synchronous, called exactly once at startup. Fails fast on a missing
    /// column, a malformed value, or an empty dataset.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetLoadError> {
        let records = loader::read_csv(path.as_ref())?;
        let store = Self::from_records(records)?;
        info!(
            records = store.len(),
            departments = store.options.departments.len(),
            job_roles = store.options.job_roles.len(),
            "record store loaded"
        );
        Ok(store)
    }

    /// Build a store from already-typed records
    ///
    /// Used by tests and benchmarks; applies the same empty-dataset check as
    /// [`RecordStore::load`].
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<Self, DatasetLoadError> {
        if records.is_empty() {
            return Err(DatasetLoadError::Empty);
        }
        let options = FilterOptions::derive(&records);
        Ok(Self { records, options })
    }

    /// All records in original dataset order
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The cached filterable-attribute domains
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Department, EducationField, Gender, JobRole, MaritalStatus};

    fn record(department: Department, gender: Gender) -> EmployeeRecord {
        EmployeeRecord {
            age: 35,
            gender,
            marital_status: MaritalStatus::Married,
            education: 3,
            education_field: EducationField::LifeSciences,
            department,
            job_role: JobRole::ResearchScientist,
            job_level: 2,
            years_at_company: 5,
            overtime: false,
            monthly_income: 5000,
            hourly_rate: 60,
            job_satisfaction: 3,
            environment_satisfaction: 3,
            relationship_satisfaction: 3,
            work_life_balance: 3,
            job_involvement: 3,
            attrition: false,
        }
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(matches!(
            RecordStore::from_records(Vec::new()),
            Err(DatasetLoadError::Empty)
        ));
    }

    #[test]
    fn test_filter_options_are_sorted_distinct() {
        let store = RecordStore::from_records(vec![
            record(Department::Sales, Gender::Male),
            record(Department::HumanResources, Gender::Male),
            record(Department::Sales, Gender::Female),
        ])
        .unwrap();

        let options = store.filter_options();
        assert_eq!(options.departments, vec!["Human Resources", "Sales"]);
        assert_eq!(options.genders, vec!["Female", "Male"]);
        assert_eq!(options.job_roles, vec!["Research Scientist"]);
    }

    #[test]
    fn test_education_options_are_fixed() {
        let store = RecordStore::from_records(vec![record(Department::Sales, Gender::Male)]).unwrap();
        let educations = &store.filter_options().educations;
        assert_eq!(educations.len(), 5);
        assert_eq!(educations[0].value, "1");
        assert_eq!(educations[0].label, "Below College");
        assert_eq!(educations[4].label, "Doctor");
    }

    #[test]
    fn test_records_preserve_order() {
        let mut first = record(Department::Sales, Gender::Male);
        first.age = 20;
        let mut second = record(Department::Sales, Gender::Male);
        second.age = 30;

        let store = RecordStore::from_records(vec![first, second]).unwrap();
        assert_eq!(store.records()[0].age, 20);
        assert_eq!(store.records()[1].age, 30);
    }
}

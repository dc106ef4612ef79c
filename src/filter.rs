//! Filter predicate and filter engine
//!
//! A [`FilterPredicate`] is a conjunctive set of optional equality
//! constraints over the filterable employee attributes. Applying one to the
//! store is a pure, total function: every input produces a well-defined
//! subset, and a value outside an attribute's domain selects the empty
//! subset rather than raising an error.
//!
//! # Example
//!
//! ```rust
//! use attrition_engine::filter::{Constraint, FilterPredicate};
//! use attrition_engine::types::Department;
//!
//! let predicate = FilterPredicate::default().with_department(Constraint::Equals(Department::Sales));
//! assert!(!predicate.is_identity());
//! ```

use crate::store::RecordStore;
use crate::types::{Department, EmployeeRecord, Gender, JobRole};

/// One optional equality constraint
///
/// `Unmatched` is the typed form of "the caller named a value outside the
/// attribute's domain": it is a valid constraint that no record satisfies,
/// which keeps filtering total instead of turning a bad dropdown value into
/// an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<T> {
    /// No constraint on this attribute
    Any,
    /// Attribute must equal the value exactly
    Equals(T),
    /// Constraint that matches no record (out-of-domain request value)
    Unmatched,
}

// Manual impl: the derive would demand `T: Default`, which the field enums
// have no reason to provide.
impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Any
    }
}

impl<T: PartialEq> Constraint<T> {
    /// Whether `actual` satisfies this constraint
    pub fn matches(&self, actual: &T) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Equals(expected) => expected == actual,
            Constraint::Unmatched => false,
        }
    }

    /// Whether this constraint admits every value
    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }
}

/// Conjunctive equality constraints over the filterable attributes
///
/// A record matches iff it matches every present constraint (logical AND).
/// `education` compares on the underlying integer code; the other three
/// compare on the canonical enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPredicate {
    /// Gender constraint
    pub gender: Constraint<Gender>,
    /// Department constraint
    pub department: Constraint<Department>,
    /// Job role constraint
    pub job_role: Constraint<JobRole>,
    /// Education level constraint (integer code 1-5)
    pub education: Constraint<u8>,
}

impl FilterPredicate {
    /// Set the gender constraint
    pub fn with_gender(mut self, constraint: Constraint<Gender>) -> Self {
        self.gender = constraint;
        self
    }

    /// Set the department constraint
    pub fn with_department(mut self, constraint: Constraint<Department>) -> Self {
        self.department = constraint;
        self
    }

    /// Set the job role constraint
    pub fn with_job_role(mut self, constraint: Constraint<JobRole>) -> Self {
        self.job_role = constraint;
        self
    }

    /// Set the education level constraint
    pub fn with_education(mut self, constraint: Constraint<u8>) -> Self {
        self.education = constraint;
        self
    }

    /// Whether this predicate constrains nothing (returns the full store)
    pub fn is_identity(&self) -> bool {
        self.gender.is_any()
            && self.department.is_any()
            && self.job_role.is_any()
            && self.education.is_any()
    }

    /// Whether `record` satisfies every present constraint
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.gender.matches(&record.gender)
            && self.department.matches(&record.department)
            && self.job_role.matches(&record.job_role)
            && self.education.matches(&record.education)
    }

    /// Apply this predicate to the store
    ///
    /// Returns the matching records in their original dataset order.
    pub fn apply<'a>(&self, store: &'a RecordStore) -> Vec<&'a EmployeeRecord> {
        store.records().iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EducationField, MaritalStatus};

    fn record(gender: Gender, department: Department, education: u8) -> EmployeeRecord {
        EmployeeRecord {
            age: 30,
            gender,
            marital_status: MaritalStatus::Single,
            education,
            education_field: EducationField::Medical,
            department,
            job_role: JobRole::LaboratoryTechnician,
            job_level: 1,
            years_at_company: 3,
            overtime: false,
            monthly_income: 3000,
            hourly_rate: 50,
            job_satisfaction: 2,
            environment_satisfaction: 2,
            relationship_satisfaction: 2,
            work_life_balance: 2,
            job_involvement: 2,
            attrition: false,
        }
    }

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            record(Gender::Female, Department::Sales, 3),
            record(Gender::Male, Department::ResearchAndDevelopment, 4),
            record(Gender::Female, Department::Sales, 4),
            record(Gender::Male, Department::HumanResources, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_identity_predicate_returns_full_store() {
        let store = store();
        let subset = FilterPredicate::default().apply(&store);
        assert_eq!(subset.len(), store.len());
    }

    #[test]
    fn test_conjunction_of_constraints() {
        let store = store();
        let predicate = FilterPredicate::default()
            .with_gender(Constraint::Equals(Gender::Female))
            .with_department(Constraint::Equals(Department::Sales))
            .with_education(Constraint::Equals(4));
        let subset = predicate.apply(&store);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].education, 4);
    }

    #[test]
    fn test_order_is_preserved() {
        let store = store();
        let predicate =
            FilterPredicate::default().with_gender(Constraint::Equals(Gender::Male));
        let subset = predicate.apply(&store);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset[0].department, Department::ResearchAndDevelopment);
        assert_eq!(subset[1].department, Department::HumanResources);
    }

    #[test]
    fn test_unmatched_constraint_selects_nothing() {
        let store = store();
        let predicate = FilterPredicate::default().with_department(Constraint::Unmatched);
        assert!(predicate.apply(&store).is_empty());
    }

    #[test]
    fn test_unmatched_wins_over_other_matches() {
        let store = store();
        let predicate = FilterPredicate::default()
            .with_gender(Constraint::Equals(Gender::Female))
            .with_job_role(Constraint::Unmatched);
        assert!(predicate.apply(&store).is_empty());
    }
}

//! Attrition breakdown by categorical field
//!
//! One shape serves the three category groupings (department, job role,
//! education field). The label set is always the full fixed domain of the
//! grouping field; categories are ordered by descending total, with ties
//! keeping the canonical domain order so results stay deterministic.

use serde::Serialize;

use super::rate_pct;
use crate::types::{Department, EducationField, EmployeeRecord, JobRole};

/// Per-category attrition counts and rates, parallel-array layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Category labels, sorted by descending total
    pub labels: Vec<String>,
    /// Records per category
    pub total: Vec<usize>,
    /// Attrition count per category
    pub attrition: Vec<usize>,
    /// Attrition rate per category, percentage with one decimal
    pub rate: Vec<f64>,
}

fn grouped_attrition<C, K>(
    subset: &[&EmployeeRecord],
    domain: &[C],
    key: K,
    label: fn(&C) -> &'static str,
) -> CategoryBreakdown
where
    C: PartialEq,
    K: Fn(&EmployeeRecord) -> C,
{
    let mut total = vec![0usize; domain.len()];
    let mut attrition = vec![0usize; domain.len()];

    for record in subset {
        let value = key(record);
        // Domains are complete: every record value is a member.
        if let Some(index) = domain.iter().position(|c| *c == value) {
            total[index] += 1;
            if record.attrition {
                attrition[index] += 1;
            }
        }
    }

    // Stable sort: equal totals keep the canonical domain order.
    let mut order: Vec<usize> = (0..domain.len()).collect();
    order.sort_by(|&a, &b| total[b].cmp(&total[a]));

    CategoryBreakdown {
        labels: order.iter().map(|&i| label(&domain[i]).to_string()).collect(),
        rate: order.iter().map(|&i| rate_pct(attrition[i], total[i])).collect(),
        attrition: order.iter().map(|&i| attrition[i]).collect(),
        total: order.iter().map(|&i| total[i]).collect(),
    }
}

/// Attrition breakdown across the full department domain
pub fn attrition_by_department(subset: &[&EmployeeRecord]) -> CategoryBreakdown {
    grouped_attrition(subset, &Department::ALL, |r| r.department, Department::as_str)
}

/// Attrition breakdown across the full job-role domain
pub fn attrition_by_job_role(subset: &[&EmployeeRecord]) -> CategoryBreakdown {
    grouped_attrition(subset, &JobRole::ALL, |r| r.job_role, JobRole::as_str)
}

/// Attrition breakdown across the full education-field domain
pub fn attrition_by_education_field(subset: &[&EmployeeRecord]) -> CategoryBreakdown {
    grouped_attrition(
        subset,
        &EducationField::ALL,
        |r| r.education_field,
        EducationField::as_str,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Gender, MaritalStatus};

    fn record(department: Department, attrition: bool) -> EmployeeRecord {
        EmployeeRecord {
            age: 30,
            gender: Gender::Male,
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
            attrition,
        }
    }

    #[test]
    fn test_full_domain_even_when_empty() {
        let result = attrition_by_department(&[]);
        assert_eq!(result.labels.len(), 3);
        assert_eq!(result.total, vec![0, 0, 0]);
        assert_eq!(result.attrition, vec![0, 0, 0]);
        assert_eq!(result.rate, vec![0.0, 0.0, 0.0]);
        // All totals tie at zero, so canonical order holds.
        assert_eq!(
            result.labels,
            vec!["Human Resources", "Research & Development", "Sales"]
        );
    }

    #[test]
    fn test_sorted_by_descending_total() {
        let records: Vec<EmployeeRecord> = std::iter::empty()
            .chain(std::iter::repeat_with(|| record(Department::Sales, false)).take(5))
            .chain(std::iter::repeat_with(|| record(Department::HumanResources, true)).take(2))
            .chain(
                std::iter::repeat_with(|| record(Department::ResearchAndDevelopment, false))
                    .take(8),
            )
            .collect();
        let subset: Vec<&EmployeeRecord> = records.iter().collect();

        let result = attrition_by_department(&subset);
        assert_eq!(
            result.labels,
            vec!["Research & Development", "Sales", "Human Resources"]
        );
        assert_eq!(result.total, vec![8, 5, 2]);
        assert_eq!(result.attrition, vec![0, 0, 2]);
        assert_eq!(result.rate, vec![0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_totals_sum_to_subset_size() {
        let records: Vec<EmployeeRecord> = (0..13)
            .map(|i| record(Department::ALL[i % 3], i % 4 == 0))
            .collect();
        let subset: Vec<&EmployeeRecord> = records.iter().collect();

        for result in [
            attrition_by_department(&subset),
            attrition_by_job_role(&subset),
            attrition_by_education_field(&subset),
        ] {
            assert_eq!(result.total.iter().sum::<usize>(), subset.len());
        }
    }

    #[test]
    fn test_rate_rounding() {
        let mut records = vec![record(Department::Sales, true)];
        records.extend(std::iter::repeat_with(|| record(Department::Sales, false)).take(2));
        let subset: Vec<&EmployeeRecord> = records.iter().collect();

        let result = attrition_by_department(&subset);
        // Sales first (3 records), 1/3 = 33.3%
        assert_eq!(result.labels[0], "Sales");
        assert_eq!(result.rate[0], 33.3);
    }
}

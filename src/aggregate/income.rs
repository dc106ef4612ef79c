//! Average income by job role

use serde::Serialize;

use crate::types::{EmployeeRecord, JobRole};

/// Average monthly income per role, sorted by descending income
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeByRole {
    /// Role labels, highest average income first
    pub labels: Vec<String>,
    /// Average monthly income per role, nearest integer
    pub avg_income: Vec<u32>,
}

/// Average income across the full job-role domain
///
/// Roles with no matching records report a zero average and sort last.
pub fn income_by_role(subset: &[&EmployeeRecord]) -> IncomeByRole {
    let mut sums = vec![0u64; JobRole::ALL.len()];
    let mut counts = vec![0u64; JobRole::ALL.len()];

    for record in subset {
        // JobRole::ALL is exhaustive, position always succeeds.
        if let Some(index) = JobRole::ALL.iter().position(|r| *r == record.job_role) {
            sums[index] += u64::from(record.monthly_income);
            counts[index] += 1;
        }
    }

    let averages: Vec<u32> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| {
            if count == 0 {
                0
            } else {
                (sum as f64 / count as f64).round() as u32
            }
        })
        .collect();

    // Stable sort: equal averages keep the canonical domain order.
    let mut order: Vec<usize> = (0..JobRole::ALL.len()).collect();
    order.sort_by(|&a, &b| averages[b].cmp(&averages[a]));

    IncomeByRole {
        labels: order
            .iter()
            .map(|&i| JobRole::ALL[i].as_str().to_string())
            .collect(),
        avg_income: order.iter().map(|&i| averages[i]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Department, EducationField, Gender, MaritalStatus};

    fn record(job_role: JobRole, monthly_income: u32) -> EmployeeRecord {
        EmployeeRecord {
            age: 40,
            gender: Gender::Male,
            marital_status: MaritalStatus::Married,
            education: 4,
            education_field: EducationField::TechnicalDegree,
            department: Department::ResearchAndDevelopment,
            job_role,
            job_level: 3,
            years_at_company: 10,
            overtime: false,
            monthly_income,
            hourly_rate: 80,
            job_satisfaction: 3,
            environment_satisfaction: 3,
            relationship_satisfaction: 3,
            work_life_balance: 3,
            job_involvement: 3,
            attrition: false,
        }
    }

    #[test]
    fn test_all_roles_present_even_for_empty_subset() {
        let result = income_by_role(&[]);
        assert_eq!(result.labels.len(), 9);
        assert!(result.avg_income.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_sorted_by_descending_average() {
        let a = record(JobRole::Manager, 17_000);
        let b = record(JobRole::LaboratoryTechnician, 3_000);
        let c = record(JobRole::Manager, 19_000);
        let result = income_by_role(&[&a, &b, &c]);

        assert_eq!(result.labels[0], "Manager");
        assert_eq!(result.avg_income[0], 18_000);
        assert_eq!(result.labels[1], "Laboratory Technician");
        assert_eq!(result.avg_income[1], 3_000);
        // Remaining roles are zero-filled after the populated ones.
        assert_eq!(result.avg_income[2..], [0, 0, 0, 0, 0, 0, 0]);
    }
}

//! Core data types for the attrition analytics engine
//!
//! This module defines the employee record and the enumerated domains of its
//! categorical fields:
//!
//! # Key Types
//!
//! - **`EmployeeRecord`**: one immutable dataset row
//! - **`Gender`**, **`Department`**, **`JobRole`**, **`EducationField`**,
//!   **`MaritalStatus`**: categorical fields with fixed, canonical value sets
//!
//! Each categorical type exposes its canonical label via `as_str()` and the
//! full domain via an `ALL` constant. Parsing from the canonical label is
//! case-sensitive; the filter layer relies on a failed parse to mean "value
//! outside the domain", which is a valid (empty) selection, not an error.
//!
//! # Example
//!
//! ```rust
//! use attrition_engine::types::Department;
//!
//! let dept: Department = "Sales".parse().unwrap();
//! assert_eq!(dept.as_str(), "Sales");
//! assert_eq!(Department::ALL.len(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

/// Employee gender as recorded in the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// "Female"
    Female,
    /// "Male"
    Male,
}

impl Gender {
    /// Full domain in canonical order
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Canonical label as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Gender::Female),
            "Male" => Ok(Gender::Male),
            _ => Err(format!("unknown gender: {}", s)),
        }
    }
}

/// Organizational department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// "Human Resources"
    HumanResources,
    /// "Research & Development"
    ResearchAndDevelopment,
    /// "Sales"
    Sales,
}

impl Department {
    /// Full domain in canonical order
    pub const ALL: [Department; 3] = [
        Department::HumanResources,
        Department::ResearchAndDevelopment,
        Department::Sales,
    ];

    /// Canonical label as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::HumanResources => "Human Resources",
            Department::ResearchAndDevelopment => "Research & Development",
            Department::Sales => "Sales",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Human Resources" => Ok(Department::HumanResources),
            "Research & Development" => Ok(Department::ResearchAndDevelopment),
            "Sales" => Ok(Department::Sales),
            _ => Err(format!("unknown department: {}", s)),
        }
    }
}

/// Job role within a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobRole {
    /// "Healthcare Representative"
    HealthcareRepresentative,
    /// "Human Resources"
    HumanResources,
    /// "Laboratory Technician"
    LaboratoryTechnician,
    /// "Manager"
    Manager,
    /// "Manufacturing Director"
    ManufacturingDirector,
    /// "Research Director"
    ResearchDirector,
    /// "Research Scientist"
    ResearchScientist,
    /// "Sales Executive"
    SalesExecutive,
    /// "Sales Representative"
    SalesRepresentative,
}

impl JobRole {
    /// Full domain in canonical order
    pub const ALL: [JobRole; 9] = [
        JobRole::HealthcareRepresentative,
        JobRole::HumanResources,
        JobRole::LaboratoryTechnician,
        JobRole::Manager,
        JobRole::ManufacturingDirector,
        JobRole::ResearchDirector,
        JobRole::ResearchScientist,
        JobRole::SalesExecutive,
        JobRole::SalesRepresentative,
    ];

    /// Canonical label as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::HealthcareRepresentative => "Healthcare Representative",
            JobRole::HumanResources => "Human Resources",
            JobRole::LaboratoryTechnician => "Laboratory Technician",
            JobRole::Manager => "Manager",
            JobRole::ManufacturingDirector => "Manufacturing Director",
            JobRole::ResearchDirector => "Research Director",
            JobRole::ResearchScientist => "Research Scientist",
            JobRole::SalesExecutive => "Sales Executive",
            JobRole::SalesRepresentative => "Sales Representative",
        }
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobRole::ALL
            .iter()
            .find(|role| role.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown job role: {}", s))
    }
}

/// Field of study behind the employee's education
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    /// "Human Resources"
    HumanResources,
    /// "Life Sciences"
    LifeSciences,
    /// "Marketing"
    Marketing,
    /// "Medical"
    Medical,
    /// "Other"
    Other,
    /// "Technical Degree"
    TechnicalDegree,
}

impl EducationField {
    /// Full domain in canonical order
    pub const ALL: [EducationField; 6] = [
        EducationField::HumanResources,
        EducationField::LifeSciences,
        EducationField::Marketing,
        EducationField::Medical,
        EducationField::Other,
        EducationField::TechnicalDegree,
    ];

    /// Canonical label as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationField::HumanResources => "Human Resources",
            EducationField::LifeSciences => "Life Sciences",
            EducationField::Marketing => "Marketing",
            EducationField::Medical => "Medical",
            EducationField::Other => "Other",
            EducationField::TechnicalDegree => "Technical Degree",
        }
    }
}

impl fmt::Display for EducationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EducationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationField::ALL
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown education field: {}", s))
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaritalStatus {
    /// "Divorced"
    Divorced,
    /// "Married"
    Married,
    /// "Single"
    Single,
}

impl MaritalStatus {
    /// Canonical label as it appears in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Married => "Married",
            MaritalStatus::Single => "Single",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Divorced" => Ok(MaritalStatus::Divorced),
            "Married" => Ok(MaritalStatus::Married),
            "Single" => Ok(MaritalStatus::Single),
            _ => Err(format!("unknown marital status: {}", s)),
        }
    }
}

/// Human-readable label for an education level code (1-5)
///
/// The mapping is fixed by the source dataset's data dictionary and is not
/// derived from the loaded data.
pub fn education_label(code: u8) -> &'static str {
    match code {
        1 => "Below College",
        2 => "College",
        3 => "Bachelor",
        4 => "Master",
        5 => "Doctor",
        _ => "Unknown",
    }
}

/// One immutable employee row
///
/// All fields are fixed at load time; the store never mutates records after
/// construction, so references to them may be shared freely across concurrent
/// queries.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Marital status
    pub marital_status: MaritalStatus,
    /// Education level code, 1-5 (see [`education_label`])
    pub education: u8,
    /// Field of study
    pub education_field: EducationField,
    /// Department
    pub department: Department,
    /// Job role
    pub job_role: JobRole,
    /// Job level, 1-5
    pub job_level: u8,
    /// Tenure at the company in whole years
    pub years_at_company: u32,
    /// Whether the employee works overtime
    pub overtime: bool,
    /// Monthly income
    pub monthly_income: u32,
    /// Hourly rate
    pub hourly_rate: u32,
    /// Job satisfaction, 1-4
    pub job_satisfaction: u8,
    /// Environment satisfaction, 1-4
    pub environment_satisfaction: u8,
    /// Relationship satisfaction, 1-4
    pub relationship_satisfaction: u8,
    /// Work-life balance rating, 1-4
    pub work_life_balance: u8,
    /// Job involvement, 1-4
    pub job_involvement: u8,
    /// Target field: whether the employee has left
    pub attrition: bool,
}

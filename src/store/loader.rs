//! CSV loader for the employee dataset
//!
//! Reads the source file once, resolving every required column from the
//! header row and parsing each cell into its typed field. Extra columns are
//! ignored; the source dataset carries many columns the engine never reads.
//! Any malformed cell aborts the load with the column name and line number.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::DatasetLoadError;
use crate::types::EmployeeRecord;

/// Header-resolved index of each required column
struct ColumnMap {
    age: usize,
    attrition: usize,
    department: usize,
    education: usize,
    education_field: usize,
    environment_satisfaction: usize,
    gender: usize,
    hourly_rate: usize,
    job_involvement: usize,
    job_level: usize,
    job_role: usize,
    job_satisfaction: usize,
    marital_status: usize,
    monthly_income: usize,
    overtime: usize,
    relationship_satisfaction: usize,
    work_life_balance: usize,
    years_at_company: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetLoadError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DatasetLoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            age: find("Age")?,
            attrition: find("Attrition")?,
            department: find("Department")?,
            education: find("Education")?,
            education_field: find("EducationField")?,
            environment_satisfaction: find("EnvironmentSatisfaction")?,
            gender: find("Gender")?,
            hourly_rate: find("HourlyRate")?,
            job_involvement: find("JobInvolvement")?,
            job_level: find("JobLevel")?,
            job_role: find("JobRole")?,
            job_satisfaction: find("JobSatisfaction")?,
            marital_status: find("MaritalStatus")?,
            monthly_income: find("MonthlyIncome")?,
            overtime: find("OverTime")?,
            relationship_satisfaction: find("RelationshipSatisfaction")?,
            work_life_balance: find("WorkLifeBalance")?,
            years_at_company: find("YearsAtCompany")?,
        })
    }
}

/// Read and type-check the full dataset
pub(super) fn read_csv(path: &Path) -> Result<Vec<EmployeeRecord>, DatasetLoadError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Header occupies line 1; the first data row is line 2.
        let line = index as u64 + 2;
        records.push(parse_row(&columns, &row, line)?);
    }

    if records.is_empty() {
        return Err(DatasetLoadError::Empty);
    }
    Ok(records)
}

fn parse_row(
    columns: &ColumnMap,
    row: &StringRecord,
    line: u64,
) -> Result<EmployeeRecord, DatasetLoadError> {
    let cell = |index: usize, column: &str| {
        row.get(index).ok_or_else(|| DatasetLoadError::InvalidValue {
            column: column.to_string(),
            line,
            message: "row is shorter than the header".to_string(),
        })
    };

    Ok(EmployeeRecord {
        age: parse_number(cell(columns.age, "Age")?, "Age", line)?,
        gender: parse_enum(cell(columns.gender, "Gender")?, "Gender", line)?,
        marital_status: parse_enum(
            cell(columns.marital_status, "MaritalStatus")?,
            "MaritalStatus",
            line,
        )?,
        education: parse_scale(cell(columns.education, "Education")?, "Education", line, 1, 5)?,
        education_field: parse_enum(
            cell(columns.education_field, "EducationField")?,
            "EducationField",
            line,
        )?,
        department: parse_enum(cell(columns.department, "Department")?, "Department", line)?,
        job_role: parse_enum(cell(columns.job_role, "JobRole")?, "JobRole", line)?,
        job_level: parse_scale(cell(columns.job_level, "JobLevel")?, "JobLevel", line, 1, 5)?,
        years_at_company: parse_number(
            cell(columns.years_at_company, "YearsAtCompany")?,
            "YearsAtCompany",
            line,
        )?,
        overtime: parse_yes_no(cell(columns.overtime, "OverTime")?, "OverTime", line)?,
        monthly_income: parse_number(
            cell(columns.monthly_income, "MonthlyIncome")?,
            "MonthlyIncome",
            line,
        )?,
        hourly_rate: parse_number(cell(columns.hourly_rate, "HourlyRate")?, "HourlyRate", line)?,
        job_satisfaction: parse_scale(
            cell(columns.job_satisfaction, "JobSatisfaction")?,
            "JobSatisfaction",
            line,
            1,
            4,
        )?,
        environment_satisfaction: parse_scale(
            cell(columns.environment_satisfaction, "EnvironmentSatisfaction")?,
            "EnvironmentSatisfaction",
            line,
            1,
            4,
        )?,
        relationship_satisfaction: parse_scale(
            cell(columns.relationship_satisfaction, "RelationshipSatisfaction")?,
            "RelationshipSatisfaction",
            line,
            1,
            4,
        )?,
        work_life_balance: parse_scale(
            cell(columns.work_life_balance, "WorkLifeBalance")?,
            "WorkLifeBalance",
            line,
            1,
            4,
        )?,
        job_involvement: parse_scale(
            cell(columns.job_involvement, "JobInvolvement")?,
            "JobInvolvement",
            line,
            1,
            4,
        )?,
        attrition: parse_yes_no(cell(columns.attrition, "Attrition")?, "Attrition", line)?,
    })
}

fn invalid(column: &str, line: u64, message: String) -> DatasetLoadError {
    DatasetLoadError::InvalidValue {
        column: column.to_string(),
        line,
        message,
    }
}

fn parse_number(raw: &str, column: &str, line: u64) -> Result<u32, DatasetLoadError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| invalid(column, line, format!("non-numeric value '{}'", raw)))
}

/// Parse a bounded integer code, rejecting values outside `[min, max]`
///
/// Range validation here is what lets the bucketed aggregations index
/// directly by code without a bounds check per record.
fn parse_scale(
    raw: &str,
    column: &str,
    line: u64,
    min: u8,
    max: u8,
) -> Result<u8, DatasetLoadError> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| invalid(column, line, format!("non-numeric value '{}'", raw)))?;
    if value < min || value > max {
        return Err(invalid(
            column,
            line,
            format!("value {} outside range {}-{}", value, min, max),
        ));
    }
    Ok(value)
}

fn parse_yes_no(raw: &str, column: &str, line: u64) -> Result<bool, DatasetLoadError> {
    match raw.trim() {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(invalid(
            column,
            line,
            format!("expected Yes or No, got '{}'", other),
        )),
    }
}

fn parse_enum<T>(raw: &str, column: &str, line: u64) -> Result<T, DatasetLoadError>
where
    T: FromStr<Err = String>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|message| invalid(column, line, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Age,Attrition,Department,Education,EducationField,\
EnvironmentSatisfaction,Gender,HourlyRate,JobInvolvement,JobLevel,JobRole,\
JobSatisfaction,MaritalStatus,MonthlyIncome,OverTime,RelationshipSatisfaction,\
WorkLifeBalance,YearsAtCompany,ExtraColumn";

    const ROW: &str = "41,Yes,Sales,2,Life Sciences,2,Female,94,3,2,\
Sales Executive,4,Single,5993,Yes,1,1,6,ignored";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        for l in lines {
            writeln!(file, "{}", l).expect("write");
        }
        file
    }

    #[test]
    fn test_parses_valid_rows_and_ignores_extra_columns() {
        let file = write_csv(&[HEADER, ROW]);
        let records = read_csv(file.path()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.age, 41);
        assert!(r.attrition);
        assert!(r.overtime);
        assert_eq!(r.department.as_str(), "Sales");
        assert_eq!(r.job_role.as_str(), "Sales Executive");
        assert_eq!(r.monthly_income, 5993);
        assert_eq!(r.job_satisfaction, 4);
        assert_eq!(r.years_at_company, 6);
    }

    #[test]
    fn test_missing_column_fails() {
        let file = write_csv(&["Age,Attrition", "41,Yes"]);
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_non_numeric_value_fails_with_location() {
        let bad = ROW.replacen("41", "forty-one", 1);
        let file = write_csv(&[HEADER, ROW, &bad]);
        let err = read_csv(file.path()).unwrap_err();
        match err {
            DatasetLoadError::InvalidValue { column, line, .. } => {
                assert_eq!(column, "Age");
                assert_eq!(line, 3);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_satisfaction_fails() {
        let bad = "41,Yes,Sales,2,Life Sciences,2,Female,94,3,2,\
Sales Executive,9,Single,5993,Yes,1,1,6,ignored";
        let file = write_csv(&[HEADER, bad]);
        let err = read_csv(file.path()).unwrap_err();
        match err {
            DatasetLoadError::InvalidValue { column, .. } => {
                assert_eq!(column, "JobSatisfaction");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_department_fails_at_load() {
        let bad = ROW.replacen("Sales,2", "Shipping,2", 1);
        let file = write_csv(&[HEADER, &bad]);
        let err = read_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            DatasetLoadError::InvalidValue { ref column, .. } if column == "Department"
        ));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let file = write_csv(&[HEADER]);
        assert!(matches!(
            read_csv(file.path()),
            Err(DatasetLoadError::Empty)
        ));
    }
}

//! Raw request parameters and their conversion to a typed predicate
//!
//! `FilterParams` mirrors the query string of the published endpoints: four
//! optional string-valued keys. Conversion to a
//! [`FilterPredicate`](crate::filter::FilterPredicate) is total — absent or
//! empty values mean "no constraint", and a value outside the attribute's
//! domain becomes the never-matching constraint instead of an error.

use std::str::FromStr;

use serde::Deserialize;

use crate::filter::{Constraint, FilterPredicate};
use crate::types::{Department, Gender, JobRole};

/// Optional filter parameters, as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterParams {
    /// Gender label, e.g. "Female"
    #[serde(default)]
    pub gender: Option<String>,
    /// Department label, e.g. "Sales"
    #[serde(default)]
    pub department: Option<String>,
    /// Job role label, e.g. "Research Scientist"
    #[serde(default)]
    pub job_role: Option<String>,
    /// Education level code as a string, "1" through "5"
    #[serde(default)]
    pub education: Option<String>,
}

impl FilterParams {
    /// Build the typed predicate for these parameters
    pub fn predicate(&self) -> FilterPredicate {
        FilterPredicate::default()
            .with_gender(parse_constraint::<Gender>(&self.gender))
            .with_department(parse_constraint::<Department>(&self.department))
            .with_job_role(parse_constraint::<JobRole>(&self.job_role))
            .with_education(parse_education(&self.education))
    }
}

fn parse_constraint<T: FromStr>(raw: &Option<String>) -> Constraint<T> {
    match raw.as_deref() {
        None | Some("") => Constraint::Any,
        Some(value) => value
            .parse::<T>()
            .map(Constraint::Equals)
            .unwrap_or(Constraint::Unmatched),
    }
}

fn parse_education(raw: &Option<String>) -> Constraint<u8> {
    match raw.as_deref() {
        None | Some("") => Constraint::Any,
        Some(value) => match value.parse::<u8>() {
            Ok(code @ 1..=5) => Constraint::Equals(code),
            _ => Constraint::Unmatched,
        },
    }
}

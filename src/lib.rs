//! Attrition Engine - in-memory filter-and-aggregate analytics
//!
//! This library serves interactive analytics over a fixed, small tabular
//! employee dataset:
//! - Typed, immutable record store built once at process start
//! - Conjunctive equality filters that are total (bad values select the
//!   empty subset, never an error)
//! - A fixed family of chart-ready aggregations with stable axes
//! - A name-based query dispatcher consumed by the HTTP layer
//!
//! Queries are independent, synchronous, side-effect-free computations over
//! shared immutable data; arbitrarily many may run concurrently without
//! locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod query;
pub mod store;
pub mod types;

// Re-export main types
pub use config::Config;
pub use error::{DatasetLoadError, Error, QueryError, Result};
pub use filter::{Constraint, FilterPredicate};
pub use query::{AggregationResult, FilterParams, QueryEngine, QueryKind};
pub use store::{FilterOptions, RecordStore};
pub use types::EmployeeRecord;

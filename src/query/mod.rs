//! Query dispatch for the attrition analytics engine
//!
//! This module is the external-facing entry point: it maps a query name plus
//! raw filter parameters to the right filter + aggregation composition.
//!
//! # Architecture
//!
//! ```text
//! query name + filter params
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Registry lookup │  name → QueryKind, UnknownQuery on miss
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Param typing    │  raw strings → FilterPredicate (never fails)
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  Filter + agg    │  one linear pass over the shared store
//! └──────────────────┘
//!          │
//!          ▼
//!   AggregationResult
//! ```
//!
//! The dispatcher holds no data beyond a shared reference to the immutable
//! [`RecordStore`](crate::store::RecordStore); every query is an independent,
//! synchronous, side-effect-free computation, so arbitrarily many may run
//! concurrently without locking.

pub mod dispatch;
pub mod params;
pub mod result;

pub use dispatch::{QueryEngine, QueryKind};
pub use params::FilterParams;
pub use result::AggregationResult;

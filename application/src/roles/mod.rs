//! The two cooperating prompt-driven roles
//!
//! The Planner plans and judges; the Executor produces candidate enrichment
//! values. Both hold only read-only configuration set at construction and a
//! shared gateway handle.

pub mod executor;
pub mod planner;

pub use executor::Executor;
pub use planner::Planner;

//! Caller-side workflows built on top of the harvester.
//!
//! - `run_snapshot`: harvest every course of a department

pub mod snapshot;

pub use snapshot::{CourseSnapshot, DepartmentSnapshot, run_snapshot};

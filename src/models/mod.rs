// src/models/mod.rs

//! Domain models for the harvester.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod level;
mod offering;

// Re-export all public types
pub use config::{Config, CrawlerConfig, LoggingConfig, PortalConfig};
pub use level::{AcademicLevel, Page};
pub use offering::{
    AndGroup, CourseMap, Department, DepartmentMap, Prerequisites, Section, SectionMap,
    WaitlistDemand,
};

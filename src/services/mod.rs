//! Extraction layer of the harvester.
//!
//! This module contains one extractor per portal page:
//! - Department listing (`DepartmentLister`)
//! - Course listing (`CourseLister`)
//! - Waitlist demand (`WaitlistExtractor`)
//! - Prerequisites (`PrerequisiteResolver`)
//! - Sections (`SectionExtractor`)
//!
//! `Harvester` fetches pages and runs them through the extractors.

mod courses;
mod departments;
mod extractor;
mod harvester;
pub mod matchers;
mod prerequisites;
mod sections;
mod waitlist;

pub use courses::{CourseLister, DEFAULT_DEPARTMENT};
pub use departments::{ANY_DEPARTMENT, DepartmentLister};
pub use extractor::{Extracted, Extractor, Outcome};
pub use harvester::Harvester;
pub use prerequisites::PrerequisiteResolver;
pub use sections::SectionExtractor;
pub use waitlist::{ANY_SECTION, WaitlistExtractor};

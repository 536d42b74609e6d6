// src/services/departments.rs

//! Department lister.
//!
//! Reads the department listing of an academic level and returns every
//! department with courses on offer.

use regex::Regex;

use crate::error::Result;
use crate::models::{AcademicLevel, Department, DepartmentMap, Page};
use crate::services::extractor::Extractor;
use crate::services::matchers;
use crate::utils::clean_text;

/// Filter matching any department code.
pub const ANY_DEPARTMENT: &str = r"\d+";

/// Identifier the portal expects for the department listing.
const LISTING_CODE: &str = "1";

/// Extractor for `oferta_dep`.
#[derive(Debug, Clone)]
pub struct DepartmentLister {
    level: AcademicLevel,
    row: Regex,
}

impl DepartmentLister {
    /// Create a lister keeping only codes matched by `code_filter`, a regular
    /// expression fragment (`None` keeps every department).
    pub fn new(level: AcademicLevel, code_filter: Option<&str>) -> Result<Self> {
        let row = matchers::department_row(code_filter.unwrap_or(ANY_DEPARTMENT))?;
        Ok(Self { level, row })
    }
}

impl Extractor for DepartmentLister {
    type Output = DepartmentMap;

    fn page(&self) -> Page {
        Page::Departments
    }

    fn code(&self) -> &str {
        LISTING_CODE
    }

    fn level(&self) -> AcademicLevel {
        self.level
    }

    fn parse(&self, html: &str) -> DepartmentMap {
        let mut departments = DepartmentMap::new();
        for caps in self.row.captures_iter(html) {
            departments.insert(
                caps["code"].to_string(),
                Department {
                    abbreviation: caps["abbreviation"].to_string(),
                    name: clean_text(&caps["name"]),
                },
            );
        }
        departments
    }
}

// src/services/courses.rs

//! Course lister for a department.

use regex::Regex;

use crate::error::Result;
use crate::models::{AcademicLevel, CourseMap, Page};
use crate::services::extractor::Extractor;
use crate::services::matchers;
use crate::utils::clean_text;

/// Department listed when the caller does not name one (CIC).
pub const DEFAULT_DEPARTMENT: &str = "116";

/// Extractor for `oferta_dis`.
#[derive(Debug, Clone)]
pub struct CourseLister {
    department: String,
    level: AcademicLevel,
    link: Regex,
}

impl CourseLister {
    pub fn new(department: impl Into<String>, level: AcademicLevel) -> Result<Self> {
        Ok(Self {
            department: department.into(),
            level,
            link: matchers::course_link()?,
        })
    }
}

impl Extractor for CourseLister {
    type Output = CourseMap;

    fn page(&self) -> Page {
        Page::Courses
    }

    fn code(&self) -> &str {
        &self.department
    }

    fn level(&self) -> AcademicLevel {
        self.level
    }

    fn parse(&self, html: &str) -> CourseMap {
        let mut courses = CourseMap::new();
        for caps in self.link.captures_iter(html) {
            courses.insert(caps["code"].to_string(), clean_text(&caps["name"]));
        }
        courses
    }
}

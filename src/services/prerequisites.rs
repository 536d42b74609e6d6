// src/services/prerequisites.rs

//! Prerequisite resolver.
//!
//! The detail page renders the rule as free text in a single cell: course
//! codes joined by `E` inside an alternative, alternatives separated by
//! ` OU<br>`. Whether codes are required together or are alternatives
//! depends only on that separator.

use regex::Regex;

use crate::error::Result;
use crate::models::{AcademicLevel, AndGroup, Page, Prerequisites};
use crate::services::extractor::Extractor;
use crate::services::matchers::{self, OR_MARKER};

/// Extractor for `disciplina_pop`.
#[derive(Debug, Clone)]
pub struct PrerequisiteResolver {
    course: String,
    level: AcademicLevel,
    cell: Regex,
    code: Regex,
}

impl PrerequisiteResolver {
    pub fn new(course: impl Into<String>, level: AcademicLevel) -> Result<Self> {
        Ok(Self {
            course: course.into(),
            level,
            cell: matchers::prerequisite_cell()?,
            code: matchers::course_code()?,
        })
    }

    /// Split the raw cell text into AND-groups.
    pub fn parse_requirements(&self, requirements: &str) -> Vec<AndGroup> {
        requirements
            .split(OR_MARKER)
            .filter_map(|alternative| {
                AndGroup::from_codes(self.code.find_iter(alternative).map(|m| m.as_str()))
            })
            .collect()
    }
}

impl Extractor for PrerequisiteResolver {
    type Output = Prerequisites;

    fn page(&self) -> Page {
        Page::CourseDetail
    }

    fn code(&self) -> &str {
        &self.course
    }

    fn level(&self) -> AcademicLevel {
        self.level
    }

    fn parse(&self, html: &str) -> Prerequisites {
        let groups = self
            .cell
            .captures_iter(html)
            .flat_map(|caps| self.parse_requirements(&caps["requirements"]))
            .collect();
        Prerequisites::new(groups)
    }
}

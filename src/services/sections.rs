// src/services/sections.rs

//! Section ("turma") extractor.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::models::{AcademicLevel, Page, Section, SectionMap};
use crate::services::extractor::Extractor;
use crate::services::matchers::{self, INSTRUCTOR_SEPARATOR};
use crate::utils::clean_text;

/// Extractor for `oferta_dados`.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    course: String,
    level: AcademicLevel,
    block: Regex,
}

impl SectionExtractor {
    pub fn new(course: impl Into<String>, level: AcademicLevel) -> Result<Self> {
        Ok(Self {
            course: course.into(),
            level,
            block: matchers::section_block()?,
        })
    }

    /// Build a section from a matched block.
    ///
    /// Sections nobody enrolled in are rendered by the portal but skipped here.
    fn section(&self, caps: &Captures<'_>) -> Option<Section> {
        let enrolled = match caps["enrolled"].parse::<u32>() {
            Ok(0) => return None,
            Ok(n) => n,
            Err(e) => {
                log::debug!(
                    "Skipping section {} of {}: {e}",
                    &caps["label"],
                    self.course
                );
                return None;
            }
        };

        let instructors = caps["instructors"]
            .split(INSTRUCTOR_SEPARATOR)
            .map(clean_text)
            .filter(|name| !name.is_empty())
            .collect();

        Some(Section {
            enrolled,
            instructors,
            reserved: caps.name("reserved").map(|m| clean_text(m.as_str())),
        })
    }
}

impl Extractor for SectionExtractor {
    type Output = SectionMap;

    fn page(&self) -> Page {
        Page::Offering
    }

    fn code(&self) -> &str {
        &self.course
    }

    fn level(&self) -> AcademicLevel {
        self.level
    }

    fn parse(&self, html: &str) -> SectionMap {
        let mut sections = SectionMap::new();
        for caps in self.block.captures_iter(html) {
            if let Some(section) = self.section(&caps) {
                sections.insert(caps["label"].to_string(), section);
            }
        }
        sections
    }
}

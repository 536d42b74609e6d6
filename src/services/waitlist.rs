// src/services/waitlist.rs

//! Waitlist demand extractor.
//!
//! The waitlist page carries several tables with the same row shape, so the
//! requested seats table is isolated first and the section rows are read only
//! inside it.

use regex::Regex;

use crate::error::Result;
use crate::models::{AcademicLevel, Page, WaitlistDemand};
use crate::services::extractor::Extractor;
use crate::services::matchers;

/// Filter matching any section label.
pub const ANY_SECTION: &str = r"\w+";

/// Extractor for `faltavaga_rel`.
#[derive(Debug, Clone)]
pub struct WaitlistExtractor {
    course: String,
    level: AcademicLevel,
    table: Regex,
    row: Regex,
}

impl WaitlistExtractor {
    /// Create an extractor keeping only section labels matched by
    /// `label_filter` (`None` keeps every section).
    pub fn new(
        course: impl Into<String>,
        label_filter: Option<&str>,
        level: AcademicLevel,
    ) -> Result<Self> {
        Ok(Self {
            course: course.into(),
            level,
            table: matchers::waitlist_table()?,
            row: matchers::waitlist_row(label_filter.unwrap_or(ANY_SECTION))?,
        })
    }
}

impl Extractor for WaitlistExtractor {
    type Output = WaitlistDemand;

    fn page(&self) -> Page {
        Page::Waitlist
    }

    fn code(&self) -> &str {
        &self.course
    }

    fn level(&self) -> AcademicLevel {
        self.level
    }

    fn parse(&self, html: &str) -> WaitlistDemand {
        let mut demand = WaitlistDemand::new();
        for table in self.table.find_iter(html) {
            for caps in self.row.captures_iter(table.as_str()) {
                let label = &caps["label"];
                match caps["count"].parse::<u32>() {
                    Ok(0) => {}
                    Ok(count) => {
                        demand.insert(label.to_string(), count);
                    }
                    Err(e) => {
                        log::debug!("Skipping waitlist row {label} of {}: {e}", self.course);
                    }
                }
            }
        }
        demand
    }
}

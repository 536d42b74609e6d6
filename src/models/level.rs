// src/models/level.rs

//! Academic level and portal page identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Program scope that selects which page set of the portal is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicLevel {
    /// Undergraduate programs (`graduacao`)
    #[default]
    #[serde(rename = "graduacao")]
    Undergraduate,

    /// Graduate programs (`posgraduacao`)
    #[serde(rename = "posgraduacao")]
    Graduate,
}

impl AcademicLevel {
    /// Path segment used by the portal for this level.
    pub fn as_path(&self) -> &'static str {
        match self {
            AcademicLevel::Undergraduate => "graduacao",
            AcademicLevel::Graduate => "posgraduacao",
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for AcademicLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "graduacao" => Ok(AcademicLevel::Undergraduate),
            "posgraduacao" => Ok(AcademicLevel::Graduate),
            other => Err(AppError::validation(format!(
                "unknown academic level '{other}' (expected graduacao or posgraduacao)"
            ))),
        }
    }
}

/// Portal pages the harvester reads, one per extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Department listing (`oferta_dep`), always queried with code 1
    Departments,
    /// Courses offered by a department (`oferta_dis`)
    Courses,
    /// Seat requests beyond capacity (`faltavaga_rel`)
    Waitlist,
    /// Course detail with the prerequisite cell (`disciplina_pop`)
    CourseDetail,
    /// Offered sections of a course (`oferta_dados`)
    Offering,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Departments => "oferta_dep",
            Page::Courses => "oferta_dis",
            Page::Waitlist => "faltavaga_rel",
            Page::CourseDetail => "disciplina_pop",
            Page::Offering => "oferta_dados",
        }
    }
}

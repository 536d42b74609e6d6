// src/models/offering.rs

//! Records harvested from the offering pages.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Departments keyed by department code.
pub type DepartmentMap = BTreeMap<String, Department>;

/// Course names keyed by course code.
pub type CourseMap = BTreeMap<String, String>;

/// Requested seats keyed by section label. Counts are always positive.
pub type WaitlistDemand = BTreeMap<String, u32>;

/// Offered sections keyed by section label.
pub type SectionMap = BTreeMap<String, Section>;

/// A department with courses on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Short label (e.g. "CIC")
    pub abbreviation: String,

    /// Full department name
    pub name: String,
}

/// A class section ("turma") of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Number of occupied seats, always greater than zero
    pub enrolled: u32,

    /// Instructor names in page order
    #[serde(default)]
    pub instructors: Vec<String>,

    /// Seats reserved for a program cohort, when the page lists one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<String>,
}

/// Course codes that must all be passed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AndGroup {
    codes: Vec<String>,
}

impl AndGroup {
    /// Build a group from codes in order of appearance.
    ///
    /// Repeated codes keep their first position. Returns `None` when no code
    /// is left, so a group is never empty.
    pub fn from_codes<I, S>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let codes: Vec<String> = codes
            .into_iter()
            .map(Into::into)
            .filter(|code| seen.insert(code.clone()))
            .collect();

        if codes.is_empty() {
            None
        } else {
            Some(Self { codes })
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether every code of the group is in `passed`.
    pub fn is_satisfied_by(&self, passed: &HashSet<String>) -> bool {
        self.codes.iter().all(|code| passed.contains(code))
    }
}

impl TryFrom<Vec<String>> for AndGroup {
    type Error = AppError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_codes(codes).ok_or_else(|| AppError::validation("empty prerequisite group"))
    }
}

impl From<AndGroup> for Vec<String> {
    fn from(group: AndGroup) -> Self {
        group.codes
    }
}

impl fmt::Display for AndGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.codes.join(" E "))
    }
}

/// Prerequisite rule of a course: any one of the groups suffices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prerequisites {
    groups: Vec<AndGroup>,
}

impl Prerequisites {
    pub fn new(groups: Vec<AndGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[AndGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Evaluate the rule against the set of passed courses.
    ///
    /// A course without prerequisites is always satisfied.
    pub fn is_satisfied_by(&self, passed: &HashSet<String>) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|g| g.is_satisfied_by(passed))
    }
}

impl fmt::Display for Prerequisites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.groups.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join(" OU "))
    }
}

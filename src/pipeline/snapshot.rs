// src/pipeline/snapshot.rs

//! Department snapshot: every course of a department with its sections,
//! waitlist and prerequisites.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use crate::models::{AcademicLevel, CrawlerConfig, Prerequisites, SectionMap, WaitlistDemand};
use crate::services::Harvester;

/// Offering data of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub code: String,
    pub name: String,
    pub sections: SectionMap,
    pub waitlist: WaitlistDemand,
    pub prerequisites: Prerequisites,
}

/// Offering data of a department, courses ordered by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSnapshot {
    pub department: String,
    pub level: AcademicLevel,
    pub courses: Vec<CourseSnapshot>,
}

impl DepartmentSnapshot {
    pub fn section_count(&self) -> usize {
        self.courses.iter().map(|c| c.sections.len()).sum()
    }

    pub fn enrolled_count(&self) -> u64 {
        self.courses
            .iter()
            .flat_map(|c| c.sections.values())
            .map(|s| u64::from(s.enrolled))
            .sum()
    }
}

/// Collect a snapshot of `department`.
///
/// Courses are harvested with at most `config.max_concurrent` in flight,
/// pausing `config.request_delay_ms` after each one completes.
pub async fn run_snapshot(
    harvester: &Harvester,
    config: &CrawlerConfig,
    department: &str,
    level: AcademicLevel,
) -> DepartmentSnapshot {
    let delay = Duration::from_millis(config.request_delay_ms);
    let concurrency = config.max_concurrent.max(1);

    let courses = harvester.courses(department, level).await;
    log::info!(
        "Department {department} ({level}): {} courses on offer",
        courses.len()
    );

    let mut course_stream = stream::iter(courses)
        .map(|(code, name)| async move {
            let (sections, waitlist, prerequisites) = tokio::join!(
                harvester.sections(&code, level),
                harvester.waitlist(&code, None, level),
                harvester.prerequisites(&code, level),
            );
            CourseSnapshot {
                code,
                name,
                sections,
                waitlist,
                prerequisites,
            }
        })
        .buffer_unordered(concurrency);

    let mut snapshots = Vec::new();
    while let Some(course) = course_stream.next().await {
        log::debug!(
            "Course {} {}: {} sections",
            course.code,
            course.name,
            course.sections.len()
        );
        snapshots.push(course);

        if delay.as_millis() > 0 {
            tokio::time::sleep(delay).await;
        }
    }

    snapshots.sort_by(|a, b| a.code.cmp(&b.code));

    let snapshot = DepartmentSnapshot {
        department: department.to_string(),
        level,
        courses: snapshots,
    };
    log::info!(
        "Department {department}: {} sections, {} students enrolled",
        snapshot.section_count(),
        snapshot.enrolled_count()
    );
    snapshot
}

// src/services/harvester.rs

//! Public entry point of the library.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    AcademicLevel, Config, CourseMap, DepartmentMap, Prerequisites, SectionMap, WaitlistDemand,
};
use crate::services::extractor::{Extractor, Outcome};
use crate::services::{
    CourseLister, DepartmentLister, PrerequisiteResolver, SectionExtractor, WaitlistExtractor,
};
use crate::utils::http::{HttpFetcher, PageFetcher};
use crate::utils::url::{PORTAL_BASE, page_url};

/// Reads offering data from the portal.
///
/// Every operation fetches one page and parses it. Failures of any kind yield
/// the empty result; use [`Harvester::extract`] to tell them apart.
#[derive(Clone)]
pub struct Harvester {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl Harvester {
    /// Create a harvester for the public portal.
    pub fn new(fetcher: impl PageFetcher + 'static) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            base_url: PORTAL_BASE.to_string(),
        }
    }

    /// Create a harvester with an HTTP client and base URL from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config.crawler)?;
        Ok(Self::new(fetcher).with_base_url(&config.portal.base_url))
    }

    /// Point the harvester at another copy of the portal.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the page of `extractor` and parse it.
    pub async fn extract<E: Extractor>(&self, extractor: &E) -> Outcome<E::Output> {
        let url = page_url(
            &self.base_url,
            extractor.level(),
            extractor.page(),
            extractor.code(),
        );
        log::debug!("Fetching {url}");

        match self.fetcher.fetch(&url).await {
            Ok(html) => {
                let outcome = Outcome::from_parsed(extractor.parse(&html));
                if !outcome.is_found() {
                    log::debug!("No records matched on {url}");
                }
                outcome
            }
            Err(e) => {
                log::warn!("Failed to fetch {url}: {e}");
                Outcome::Failed(e)
            }
        }
    }

    async fn run<E: Extractor>(&self, extractor: Result<E>) -> Outcome<E::Output> {
        match extractor {
            Ok(extractor) => self.extract(&extractor).await,
            Err(e) => {
                log::warn!("Cannot build extractor: {e}");
                Outcome::Failed(e)
            }
        }
    }

    /// Departments with offerings, keyed by code.
    ///
    /// `code_filter` is a regular expression fragment matched against the
    /// department code; `None` lists every department.
    pub async fn departments(
        &self,
        level: AcademicLevel,
        code_filter: Option<&str>,
    ) -> DepartmentMap {
        self.run(DepartmentLister::new(level, code_filter))
            .await
            .into_value()
    }

    /// Courses offered by `department`, name keyed by code.
    pub async fn courses(&self, department: &str, level: AcademicLevel) -> CourseMap {
        self.run(CourseLister::new(department, level))
            .await
            .into_value()
    }

    /// Seats requested beyond capacity for each section of `course`.
    ///
    /// `label_filter` is a regular expression fragment matched against the
    /// section label; `None` keeps every section.
    pub async fn waitlist(
        &self,
        course: &str,
        label_filter: Option<&str>,
        level: AcademicLevel,
    ) -> WaitlistDemand {
        self.run(WaitlistExtractor::new(course, label_filter, level))
            .await
            .into_value()
    }

    /// Prerequisite rule of `course`.
    pub async fn prerequisites(&self, course: &str, level: AcademicLevel) -> Prerequisites {
        self.run(PrerequisiteResolver::new(course, level))
            .await
            .into_value()
    }

    /// Sections of `course` with at least one enrolled student.
    pub async fn sections(&self, course: &str, level: AcademicLevel) -> SectionMap {
        self.run(SectionExtractor::new(course, level))
            .await
            .into_value()
    }
}

// src/services/extractor.rs

//! Shared shape of the page extractors.

use std::collections::BTreeMap;

use crate::error::AppError;
use crate::models::{AcademicLevel, Page, Prerequisites};

/// A parser for one kind of portal page.
///
/// Implementations are pure: `parse` depends only on the page content, so the
/// same content always yields the same records.
pub trait Extractor: Send + Sync {
    type Output: Extracted;

    /// Page this extractor reads.
    fn page(&self) -> Page;

    /// Identifier passed in the `cod` query parameter.
    fn code(&self) -> &str;

    fn level(&self) -> AcademicLevel;

    /// Build records from raw page content.
    fn parse(&self, html: &str) -> Self::Output;
}

/// Output of an extractor, with an empty form for "nothing found".
pub trait Extracted: Default {
    fn is_empty(&self) -> bool;
}

impl<K, V> Extracted for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl Extracted for Prerequisites {
    fn is_empty(&self) -> bool {
        Prerequisites::is_empty(self)
    }
}

/// Result of one extraction.
///
/// Keeps "the page had nothing" apart from "the page could not be read",
/// although [`Outcome::into_value`] collapses both to the empty output.
#[derive(Debug)]
pub enum Outcome<T> {
    /// At least one record was parsed
    Found(T),
    /// The page was read but no fragment matched
    Empty,
    /// The page could not be fetched or the matcher could not be built
    Failed(AppError),
}

impl<T: Extracted> Outcome<T> {
    /// Classify parsed output.
    pub fn from_parsed(value: T) -> Self {
        if value.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Found(value)
        }
    }

    /// The parsed records, or the empty output for `Empty` and `Failed`.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Found(value) => value,
            Outcome::Empty | Outcome::Failed(_) => T::default(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

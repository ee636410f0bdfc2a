//! Day coverage audit for an aggregated curriculum.
//!
//! Reports duplicated, missing and out-of-range day numbers without changing
//! the lesson list. The aggregation step keeps duplicates on purpose, so a
//! default curriculum is expected to show every authored day from 3 upward as
//! duplicated.

use super::error::CurriculumError;
use super::lesson::{LessonRecord, FIRST_DAY, LAST_DAY};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicateDay {
    pub day: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub total: usize,
    pub unique_days: usize,
    pub duplicates: Vec<DuplicateDay>,
    pub missing: Vec<u32>,
    pub out_of_range: Vec<u32>,
}

impl CoverageReport {
    pub fn from_lessons(lessons: &[LessonRecord]) -> Self {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for lesson in lessons {
            *counts.entry(lesson.day).or_insert(0) += 1;
        }

        let duplicates = counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(day, count)| DuplicateDay { day: *day, count: *count })
            .collect();
        let missing = (FIRST_DAY..=LAST_DAY).filter(|day| !counts.contains_key(day)).collect();
        let out_of_range = counts
            .keys()
            .filter(|day| !(FIRST_DAY..=LAST_DAY).contains(*day))
            .copied()
            .collect();

        Self {
            total: lessons.len(),
            unique_days: counts.len(),
            duplicates,
            missing,
            out_of_range,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.duplicates.is_empty() && self.missing.is_empty() && self.out_of_range.is_empty()
    }

    /// Converts an incomplete report into an error, for strict mode.
    pub fn ensure_complete(&self) -> Result<(), CurriculumError> {
        if self.is_complete() {
            return Ok(());
        }
        Err(CurriculumError::IncompleteCoverage {
            duplicates: self.duplicates.len(),
            missing: self.missing.len(),
            out_of_range: self.out_of_range.len(),
        })
    }
}

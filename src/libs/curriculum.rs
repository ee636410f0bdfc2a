//! Aggregation of hand-authored and generated lessons.
//!
//! The full curriculum is the hand-authored registry followed by the 98
//! generated placeholder days, concatenated as-is:
//!
//! - no deduplication: a day that is both authored and generated appears twice
//! - no sorting: authored lessons keep registry order, generated ones follow
//! - no caching: every call rebuilds the list
//!
//! Callers must not assume the list is ordered by day or that it holds exactly
//! 100 unique days. [`crate::libs::audit::CoverageReport`] reports how far the
//! list is from that ideal.

use super::{
    config::Config,
    error::{CurriculumError, Result},
    generator::generate_remaining_days,
    lesson::{LessonOrigin, LessonRecord, FIRST_DAY, LAST_DAY},
};
use crate::content;
use tracing::debug;

/// Built-in registry followed by every generated day.
///
/// Length is always `content::curriculum().len() + 98`.
pub fn get_all_lessons() -> Vec<LessonRecord> {
    let mut lessons = content::curriculum();
    lessons.extend(generate_remaining_days());
    lessons
}

/// The aggregated curriculum together with how many leading records were
/// hand-authored.
#[derive(Debug, Clone)]
pub struct Curriculum {
    lessons: Vec<LessonRecord>,
    authored: usize,
}

impl Curriculum {
    /// Aggregates the registry described by `config` (built-ins plus any extra
    /// lesson files) with the generated days.
    pub fn load(config: &Config) -> Result<Self> {
        let authored = content::registry(config)?;
        Ok(Self::from_parts(authored, generate_remaining_days()))
    }

    pub fn from_parts(authored: Vec<LessonRecord>, generated: Vec<LessonRecord>) -> Self {
        debug!(authored = authored.len(), generated = generated.len(), "aggregating curriculum");
        let authored_count = authored.len();
        let mut lessons = authored;
        lessons.extend(generated);
        Self {
            lessons,
            authored: authored_count,
        }
    }

    pub fn lessons(&self) -> &[LessonRecord] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn authored_count(&self) -> usize {
        self.authored
    }

    /// Every record paired with its origin, in aggregation order.
    pub fn tagged(&self) -> Vec<(LessonOrigin, &LessonRecord)> {
        self.lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| {
                let origin = if i < self.authored {
                    LessonOrigin::Authored
                } else {
                    LessonOrigin::Generated
                };
                (origin, lesson)
            })
            .collect()
    }

    /// All records for `day`, in aggregation order.
    ///
    /// Returns more than one record when a day is both authored and generated.
    pub fn by_day(&self, day: u32) -> Result<Vec<(LessonOrigin, &LessonRecord)>> {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return Err(CurriculumError::DayOutOfRange(day));
        }

        let matches = self.tagged().into_iter().filter(|(_, lesson)| lesson.day == day).collect::<Vec<_>>();
        if matches.is_empty() {
            return Err(CurriculumError::DayNotFound(day));
        }
        Ok(matches)
    }
}

//! Category index used to browse the curriculum.
//!
//! Lessons are folded into per-category buckets in encounter order. Buckets
//! are then ordered by the smallest day they contain and each bucket is
//! sorted by day. Both sorts are stable, so categories sharing a first day and
//! lessons sharing a day keep the order in which they were encountered.
//! Duplicate days are kept side by side.

use super::lesson::LessonRecord;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: String,
    /// Smallest day in the group, used to order categories.
    pub first_day: u32,
    pub lessons: Vec<LessonRecord>,
}

pub fn group_by_category(lessons: &[LessonRecord]) -> Vec<CategoryGroup> {
    let mut buckets: IndexMap<&str, Vec<LessonRecord>> = IndexMap::new();
    for lesson in lessons {
        buckets.entry(lesson.category.as_str()).or_default().push(lesson.clone());
    }

    let mut groups = buckets
        .into_iter()
        .map(|(category, mut lessons)| {
            lessons.sort_by_key(|lesson| lesson.day);
            CategoryGroup {
                category: category.to_string(),
                // Buckets are never empty and were just sorted
                first_day: lessons.first().map(|lesson| lesson.day).unwrap_or_default(),
                lessons,
            }
        })
        .collect::<Vec<_>>();

    groups.sort_by_key(|group| group.first_day);
    groups
}

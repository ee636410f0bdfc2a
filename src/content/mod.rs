//! Hand-authored lessons.
//!
//! Each built-in day lives in its own module and exposes `lesson()`. The
//! registry is the list of those lessons in the order the modules appear in
//! [`curriculum`], which is not necessarily sorted by day. Nothing here checks
//! for duplicate or missing days; see [`crate::libs::audit`] for that.
//!
//! Additional hand-authored lessons can be supplied as JSON files (one record
//! per file) in the directory named by `extra_lessons_dir` in the config.

mod day001;
mod day002;
mod day021;
mod day050;
mod day100;

use crate::libs::{
    config::Config,
    error::{CurriculumError, Result},
    lesson::LessonRecord,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// The built-in hand-authored registry.
pub fn curriculum() -> Vec<LessonRecord> {
    vec![day001::lesson(), day002::lesson(), day021::lesson(), day050::lesson(), day100::lesson()]
}

/// Reads every `*.json` lesson file in `dir`, in file-name order.
pub fn load_dir(dir: &Path) -> Result<Vec<LessonRecord>> {
    if !dir.is_dir() {
        return Err(CurriculumError::LessonDirMissing(dir.to_path_buf()));
    }

    let lesson_file_error = |path: &Path, reason: String| CurriculumError::LessonFile {
        path: path.to_path_buf(),
        reason,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(|e| lesson_file_error(dir, e.to_string()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    paths.sort();

    let mut lessons = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read_to_string(&path).map_err(|e| lesson_file_error(&path, e.to_string()))?;
        let lesson: LessonRecord = serde_json::from_str(&raw).map_err(|e| lesson_file_error(&path, e.to_string()))?;
        debug!(day = lesson.day, file = %path.display(), "loaded extra lesson");
        lessons.push(lesson);
    }

    Ok(lessons)
}

/// Built-in lessons followed by any extra lessons from the config.
pub fn registry(config: &Config) -> Result<Vec<LessonRecord>> {
    let mut lessons = curriculum();
    if let Some(dir) = &config.extra_lessons_dir {
        lessons.extend(load_dir(dir)?);
    }
    Ok(lessons)
}

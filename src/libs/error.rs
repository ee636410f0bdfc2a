//! Error types for curriculum lookups and lesson file loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurriculumError {
    /// Day number outside 1..=100
    #[error("Day {0} is outside the curriculum (expected 1-100)")]
    DayOutOfRange(u32),

    #[error("No lesson found for day {0}")]
    DayNotFound(u32),

    /// Configured extra lessons directory does not exist
    #[error("Lessons directory not found: {}", .0.display())]
    LessonDirMissing(PathBuf),

    /// A lesson file could not be read or parsed
    #[error("Invalid lesson file {}: {reason}", path.display())]
    LessonFile {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O or JSON error text
        reason: String,
    },

    #[error("Curriculum coverage is incomplete: {duplicates} duplicated, {missing} missing and {out_of_range} out-of-range day(s)")]
    IncompleteCoverage {
        duplicates: usize,
        missing: usize,
        out_of_range: usize,
    },
}

pub type Result<T> = std::result::Result<T, CurriculumError>;

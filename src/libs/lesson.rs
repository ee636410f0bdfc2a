//! Lesson records for the 100-day curriculum.
//!
//! A [`LessonRecord`] is the single entity of the curriculum: one day's
//! metadata, explanation, key terms and exercises. Records serialize with the
//! camelCase field names used by the lesson data files, so a record written by
//! `devdays export lessons -f json` can be dropped into an extra lessons
//! directory and read back unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use devdays::libs::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord};
//!
//! let lesson = LessonRecord {
//!     day: 1,
//!     title: "Welcome to the Web".to_string(),
//!     category: "HTML Basics".to_string(),
//!     description: "How browsers fetch and render pages.".to_string(),
//!     learning_objectives: vec!["Explain what a URL is".to_string()],
//!     detailed_explanation: "## The Web\n...".to_string(),
//!     key_terms: vec![KeyTerm::new("URL", "Address of a resource on the web")],
//!     exercises: vec![Exercise::new(1, "Inspect a page", ExerciseType::Classwork, Difficulty::Easy, &["Open DevTools"])],
//! };
//! assert_eq!(lesson.exercises[0].kind.to_string(), "classwork");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// First and last day numbers of the curriculum.
pub const FIRST_DAY: u32 = 1;
pub const LAST_DAY: u32 = 100;

/// Whether an exercise is done in class or at home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Classwork,
    Homework,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::Classwork => write!(f, "classwork"),
            ExerciseType::Homework => write!(f, "homework"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

impl KeyTerm {
    pub fn new(term: &str, definition: &str) -> Self {
        KeyTerm {
            term: term.to_string(),
            definition: definition.to_string(),
        }
    }
}

/// A single classwork or homework assignment attached to a lesson.
///
/// `id` is only unique within its lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
}

impl Exercise {
    pub fn new(id: u32, title: &str, kind: ExerciseType, difficulty: Difficulty, instructions: &[&str]) -> Self {
        Exercise {
            id,
            title: title.to_string(),
            kind,
            difficulty,
            instructions: instructions.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// One day of the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub day: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
    /// Markdown-like long form text. Opaque to all curriculum logic.
    pub detailed_explanation: String,
    pub key_terms: Vec<KeyTerm>,
    pub exercises: Vec<Exercise>,
}

impl LessonRecord {
    pub fn is_in_range(&self) -> bool {
        (FIRST_DAY..=LAST_DAY).contains(&self.day)
    }

    pub fn exercises_of(&self, kind: ExerciseType) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |exercise| exercise.kind == kind)
    }
}

/// Where a record in the aggregated curriculum came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LessonOrigin {
    Authored,
    Generated,
}

impl fmt::Display for LessonOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonOrigin::Authored => write!(f, "authored"),
            LessonOrigin::Generated => write!(f, "generated"),
        }
    }
}

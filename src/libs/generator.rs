//! Placeholder lesson generation for days without hand-authored content.
//!
//! Every day from [`GENERATED_FIRST_DAY`] to [`LAST_DAY`] gets a templated
//! record built from two fixed rotation tables:
//!
//! - **Topic**: `TOPICS[(day - 3) % 30]`, advancing one topic per day
//! - **Category**: `CATEGORIES[((day - 1) / 10) % 10]`, advancing every ten days
//!
//! The generator does not look at the hand-authored registry. Days that also
//! have an authored lesson therefore appear twice once both lists are
//! concatenated by [`crate::libs::curriculum::get_all_lessons`].
//!
//! ## Usage
//!
//! ```rust
//! use devdays::libs::generator::generate_remaining_days;
//!
//! let lessons = generate_remaining_days();
//! assert_eq!(lessons.len(), 98);
//! assert_eq!(lessons[0].title, "HTML Lists");
//! ```

use super::lesson::{Difficulty, Exercise, ExerciseType, KeyTerm, LessonRecord, LAST_DAY};

/// First day covered by the generator. Days 1 and 2 are always hand-authored.
pub const GENERATED_FIRST_DAY: u32 = 3;

pub const TOPICS: [&str; 30] = [
    "HTML Lists",
    "HTML Tables",
    "HTML Forms",
    "HTML Semantic Elements",
    "HTML Media",
    "HTML Accessibility",
    "HTML Meta Tags",
    "HTML Best Practices",
    "CSS Introduction",
    "CSS Syntax",
    "CSS Selectors",
    "CSS Box Model",
    "CSS Colors and Backgrounds",
    "CSS Typography",
    "CSS Flexbox",
    "CSS Grid",
    "CSS Positioning",
    "Responsive Design",
    "CSS Animations",
    "CSS Variables",
    "JavaScript Basics",
    "JavaScript Variables",
    "JavaScript Functions",
    "JavaScript Arrays",
    "JavaScript Objects",
    "DOM Manipulation",
    "JavaScript Events",
    "Async JavaScript",
    "Fetch API",
    "ES6+ Features",
];

pub const CATEGORIES: [&str; 10] = [
    "HTML Basics",
    "HTML Advanced",
    "CSS Basics",
    "CSS Layouts",
    "JavaScript Basics",
    "JavaScript Advanced",
    "DOM & Events",
    "Frontend Frameworks",
    "Backend Development",
    "Full-Stack Projects",
];

/// Fixed shape of the five exercises every generated day carries:
/// tier label, type and difficulty by position.
const EXERCISE_TIERS: [(&str, ExerciseType, Difficulty); 5] = [
    ("Basic", ExerciseType::Classwork, Difficulty::Easy),
    ("Intermediate", ExerciseType::Classwork, Difficulty::Medium),
    ("Advanced Challenge", ExerciseType::Classwork, Difficulty::Hard),
    ("Project - Part 1", ExerciseType::Homework, Difficulty::Medium),
    ("Project - Part 2", ExerciseType::Homework, Difficulty::Hard),
];

pub fn topic_index(day: u32) -> usize {
    (day.saturating_sub(GENERATED_FIRST_DAY) as usize) % TOPICS.len()
}

pub fn category_index(day: u32) -> usize {
    (day.saturating_sub(1) as usize / 10) % CATEGORIES.len()
}

pub fn topic_for_day(day: u32) -> &'static str {
    TOPICS[topic_index(day)]
}

pub fn category_for_day(day: u32) -> &'static str {
    CATEGORIES[category_index(day)]
}

/// Builds the placeholder record for a single day.
///
/// Pure function of `day` and the rotation tables; no per-topic content
/// beyond string interpolation.
pub fn generate_day(day: u32) -> LessonRecord {
    let topic = topic_for_day(day);

    LessonRecord {
        day,
        title: topic.to_string(),
        category: category_for_day(day).to_string(),
        description: format!("Learn the fundamentals of {topic} and how to apply them in real web projects."),
        learning_objectives: vec![
            format!("Understand the core concepts of {topic}"),
            format!("Apply {topic} in practical examples"),
            format!("Identify common mistakes when working with {topic}"),
            format!("Build a small project using {topic}"),
        ],
        detailed_explanation: explanation(day, topic),
        key_terms: vec![
            KeyTerm {
                term: topic.to_string(),
                definition: format!("The main subject of day {day}, covering the essential ideas behind {topic}."),
            },
            KeyTerm {
                term: "Best Practice".to_string(),
                definition: format!("A widely accepted way of working with {topic} that keeps code readable and maintainable."),
            },
            KeyTerm {
                term: "Browser Support".to_string(),
                definition: format!("Which browsers implement the {topic} features used in this lesson."),
            },
        ],
        exercises: exercises(topic),
    }
}

fn explanation(day: u32, topic: &str) -> String {
    format!(
        "# Day {day}: {topic}\n\n\
         ## Overview\n\n\
         Today we focus on **{topic}**. This lesson introduces the key ideas, walks through \
         typical usage and ends with hands-on practice.\n\n\
         ## Why It Matters\n\n\
         {topic} is part of the everyday toolkit of a web developer. Knowing it well makes \
         your pages easier to build, read and maintain.\n\n\
         ## Key Concepts\n\n\
         - What {topic} is and where it fits in a web page\n\
         - The most common syntax and patterns\n\
         - How {topic} interacts with the rest of HTML, CSS and JavaScript\n\n\
         ## Practice\n\n\
         Work through the classwork exercises first, then complete the two-part homework project.\n"
    )
}

fn exercises(topic: &str) -> Vec<Exercise> {
    EXERCISE_TIERS
        .iter()
        .enumerate()
        .map(|(i, (tier, kind, difficulty))| Exercise {
            id: i as u32 + 1,
            title: format!("{tier}: {topic}"),
            kind: *kind,
            difficulty: *difficulty,
            instructions: instructions(i, topic),
        })
        .collect()
}

fn instructions(position: usize, topic: &str) -> Vec<String> {
    match position {
        0 => vec![
            format!("Create a new HTML file for practicing {topic}"),
            format!("Write a minimal example that uses {topic}"),
            "Open the file in your browser and check the result".to_string(),
            "Add comments explaining each part of your code".to_string(),
        ],
        1 => vec![
            format!("Extend the basic example with more {topic} features"),
            "Combine it with what you learned in previous lessons".to_string(),
            "Test your page in at least two different browsers".to_string(),
            "Refactor the code so it is easy to read".to_string(),
        ],
        2 => vec![
            format!("Build a complex component that relies on {topic}"),
            "Handle edge cases such as empty content or very long text".to_string(),
            "Make sure the result is accessible and responsive".to_string(),
            "Write a short note describing the trade-offs you made".to_string(),
        ],
        3 => vec![
            format!("Plan a small website section that showcases {topic}"),
            "Sketch the layout and list the required elements".to_string(),
            "Implement the structure of the section".to_string(),
            "Commit your work to a Git repository".to_string(),
        ],
        _ => vec![
            "Finish the website section started in Part 1".to_string(),
            format!("Polish the {topic} details and styling"),
            "Validate your code and fix any warnings".to_string(),
            "Publish the project and share the link".to_string(),
        ],
    }
}

/// Placeholder records for every day from 3 to 100, ascending.
///
/// Always returns 98 records; two calls produce identical output.
pub fn generate_remaining_days() -> Vec<LessonRecord> {
    (GENERATED_FIRST_DAY..=LAST_DAY).map(generate_day).collect()
}


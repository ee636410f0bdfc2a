//! Display implementation for devdays application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent across commands. Parameterised variants interpolate their
//! values; everything else is a fixed string.
//!
//! ```rust
//! use devdays::libs::messages::Message;
//!
//! assert_eq!(Message::ConfigSaved.to_string(), "Configuration saved successfully");
//! assert_eq!(Message::LessonsHeader(103).to_string(), "Curriculum: 103 lessons");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CURRICULUM MESSAGES ===
            Message::LessonsHeader(total) => format!("Curriculum: {} lessons", total),
            Message::LessonsFiltered(shown, total) => format!("Showing {} of {} lessons", shown, total),
            Message::NoLessonsMatch => "No lessons match the given filters.".to_string(),
            Message::ExtraLessonsLoaded(count, dir) => format!("Loaded {} extra lesson(s) from {}", count, dir),
            Message::LessonHeader { day, title, origin } => format!("Day {}: {} [{}]", day, title, origin),
            Message::DuplicateDayRecords(day, count) => format!("Day {} has {} records in the curriculum", day, count),
            Message::LessonCategory(category) => format!("Category: {}", category),
            Message::ObjectivesHeader => "Learning objectives:".to_string(),
            Message::KeyTermsHeader => "Key terms:".to_string(),
            Message::ExercisesHeader => "Exercises:".to_string(),
            Message::ExplanationHeader => "Explanation:".to_string(),

            // === INDEX MESSAGES ===
            Message::IndexHeader(categories) => format!("Curriculum index: {} categories", categories),
            Message::CategoryHeader {
                category,
                first_day,
                lessons,
            } => format!("{} (from day {}, {} lessons)", category, first_day, lessons),

            // === AUDIT MESSAGES ===
            Message::AuditHeader => "Curriculum coverage".to_string(),
            Message::AuditSummary { total, unique_days } => format!("{} records covering {} distinct days", total, unique_days),
            Message::AuditComplete => "Every day from 1 to 100 has exactly one lesson.".to_string(),
            Message::AuditDuplicates(days) => format!("Duplicated days: {}", days),
            Message::AuditMissing(days) => format!("Missing days: {}", days),
            Message::AuditOutOfRange(days) => format!("Days outside 1-100: {}", days),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::ConfigModuleLessons => "Extra lessons settings".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptExtraLessonsDir => "Directory with extra lesson JSON files (empty to disable)".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
            Message::PromptExportOutputDir => "Directory for export files (empty for current directory)".to_string(),
        };
        write!(f, "{}", text)
    }
}

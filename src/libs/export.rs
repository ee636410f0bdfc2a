//! Curriculum export to CSV, JSON and Excel.
//!
//! Exports are one-way snapshots of the aggregated curriculum, written to a
//! file the user names (or a timestamped default name).
//!
//! ## Data Types
//!
//! - **Lessons**: one entry per lesson record
//! - **Exercises**: one entry per exercise, flattened with its lesson's day and title
//! - **Index**: the category index, one entry per lesson in display order
//!
//! JSON lesson exports keep the camelCase lesson wire format, so any single
//! record can be copied into an extra lessons directory as-is.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use devdays::libs::curriculum::get_all_lessons;
//! use devdays::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(ExportData::Lessons, &get_all_lessons())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{
        config::Config,
        index::{group_by_category, CategoryGroup},
        lesson::LessonRecord,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Lessons,
    Exercises,
    Index,
}

impl fmt::Display for ExportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportData::Lessons => write!(f, "lessons"),
            ExportData::Exercises => write!(f, "exercises"),
            ExportData::Index => write!(f, "index"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportExercise {
    pub day: u32,
    pub lesson: String,
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub instructions: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportIndexRow {
    pub category: String,
    pub first_day: u32,
    pub day: u32,
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportIndexDocument<'a> {
    generator: &'static str,
    version: &'static str,
    edition: &'static str,
    export_date: String,
    categories: &'a [CategoryGroup],
}

pub fn exercise_rows(lessons: &[LessonRecord]) -> Vec<ExportExercise> {
    lessons
        .iter()
        .flat_map(|lesson| {
            lesson.exercises.iter().map(move |exercise| ExportExercise {
                day: lesson.day,
                lesson: lesson.title.clone(),
                id: exercise.id,
                title: exercise.title.clone(),
                kind: exercise.kind.to_string(),
                difficulty: exercise.difficulty.to_string(),
                instructions: exercise.instructions.join(" | "),
            })
        })
        .collect()
}

pub fn index_rows(groups: &[CategoryGroup]) -> Vec<ExportIndexRow> {
    groups
        .iter()
        .flat_map(|group| {
            group.lessons.iter().map(move |lesson| ExportIndexRow {
                category: group.category.clone(),
                first_day: group.first_day,
                day: lesson.day,
                title: lesson.title.clone(),
            })
        })
        .collect()
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(Self::default_file_name(format)));
        Self { format, output_path }
    }

    /// Resolves format and output path, falling back to the `export` section
    /// of the config for anything not given explicitly.
    pub fn from_config(format: Option<ExportFormat>, output_path: Option<PathBuf>, config: &Config) -> Self {
        let defaults = config.export.clone().unwrap_or_default();
        let format = format.unwrap_or(defaults.default_format);
        let output_path = output_path.or_else(|| defaults.output_dir.map(|dir| dir.join(Self::default_file_name(format))));
        Self::new(format, output_path)
    }

    fn default_file_name(format: ExportFormat) -> String {
        format!("devdays_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension())
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn export(&self, data: ExportData, lessons: &[LessonRecord]) -> Result<PathBuf> {
        debug!(%data, format = %self.format, lessons = lessons.len(), path = %self.output_path.display(), "exporting");

        match data {
            ExportData::Lessons => self.export_lessons(lessons)?,
            ExportData::Exercises => self.export_exercises(&exercise_rows(lessons))?,
            ExportData::Index => self.export_index(&group_by_category(lessons))?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(self.output_path.clone())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_lessons(&self, lessons: &[LessonRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(lessons),
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(LESSON_HEADERS)?;
                for lesson in lessons {
                    wtr.write_record(lesson_cells(lesson))?;
                }
                wtr.flush()?;
                Ok(())
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                worksheet.set_name("Lessons")?;
                write_headers(worksheet, &LESSON_HEADERS)?;
                for (i, lesson) in lessons.iter().enumerate() {
                    let row = i as u32 + 1;
                    worksheet.write_number(row, 0, lesson.day as f64)?;
                    for (col, cell) in lesson_cells(lesson).iter().enumerate().skip(1) {
                        worksheet.write_string(row, col as u16, cell)?;
                    }
                }
                worksheet.autofit();
                workbook.save(&self.output_path)?;
                Ok(())
            }
        }
    }

    fn export_exercises(&self, rows: &[ExportExercise]) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(rows),
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(EXERCISE_HEADERS)?;
                for row in rows {
                    wtr.write_record(&[
                        row.day.to_string(),
                        row.lesson.clone(),
                        row.id.to_string(),
                        row.title.clone(),
                        row.kind.clone(),
                        row.difficulty.clone(),
                        row.instructions.clone(),
                    ])?;
                }
                wtr.flush()?;
                Ok(())
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                worksheet.set_name("Exercises")?;
                write_headers(worksheet, &EXERCISE_HEADERS)?;
                for (i, row) in rows.iter().enumerate() {
                    let r = i as u32 + 1;
                    worksheet.write_number(r, 0, row.day as f64)?;
                    worksheet.write_string(r, 1, &row.lesson)?;
                    worksheet.write_number(r, 2, row.id as f64)?;
                    worksheet.write_string(r, 3, &row.title)?;
                    worksheet.write_string(r, 4, &row.kind)?;
                    worksheet.write_string(r, 5, &row.difficulty)?;
                    worksheet.write_string(r, 6, &row.instructions)?;
                }
                worksheet.autofit();
                workbook.save(&self.output_path)?;
                Ok(())
            }
        }
    }

    fn export_index(&self, groups: &[CategoryGroup]) -> Result<()> {
        match self.format {
            ExportFormat::Json => self.write_json(&ExportIndexDocument {
                generator: APP_METADATA_NAME,
                version: APP_METADATA_VERSION,
                edition: APP_METADATA_EDITION,
                export_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                categories: groups,
            }),
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(INDEX_HEADERS)?;
                for row in index_rows(groups) {
                    wtr.write_record(&[row.category, row.first_day.to_string(), row.day.to_string(), row.title])?;
                }
                wtr.flush()?;
                Ok(())
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                worksheet.set_name("Index")?;
                write_headers(worksheet, &INDEX_HEADERS)?;
                for (i, row) in index_rows(groups).iter().enumerate() {
                    let r = i as u32 + 1;
                    worksheet.write_string(r, 0, &row.category)?;
                    worksheet.write_number(r, 1, row.first_day as f64)?;
                    worksheet.write_number(r, 2, row.day as f64)?;
                    worksheet.write_string(r, 3, &row.title)?;
                }
                worksheet.autofit();
                workbook.save(&self.output_path)?;
                Ok(())
            }
        }
    }
}

const LESSON_HEADERS: [&str; 7] = ["Day", "Title", "Category", "Description", "Objectives", "Key Terms", "Exercises"];
const EXERCISE_HEADERS: [&str; 7] = ["Day", "Lesson", "ID", "Title", "Type", "Difficulty", "Instructions"];
const INDEX_HEADERS: [&str; 4] = ["Category", "First Day", "Day", "Title"];

fn lesson_cells(lesson: &LessonRecord) -> [String; 7] {
    [
        lesson.day.to_string(),
        lesson.title.clone(),
        lesson.category.clone(),
        lesson.description.clone(),
        lesson.learning_objectives.join(" | "),
        lesson.key_terms.iter().map(|term| term.term.as_str()).collect::<Vec<_>>().join(", "),
        lesson.exercises.len().to_string(),
    ]
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    Ok(())
}

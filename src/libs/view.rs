use super::{
    audit::CoverageReport,
    index::CategoryGroup,
    lesson::{ExerciseType, LessonOrigin, LessonRecord},
    messages::Message,
};
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn lessons(lessons: &[(LessonOrigin, &LessonRecord)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TITLE", "CATEGORY", "SOURCE", "CLASSWORK", "HOMEWORK"]);
        for (origin, lesson) in lessons {
            let classwork = lesson.exercises_of(ExerciseType::Classwork).count();
            let homework = lesson.exercises_of(ExerciseType::Homework).count();
            table.add_row(row![lesson.day, lesson.title, lesson.category, origin, classwork, homework]);
        }
        table.printstd();

        Ok(())
    }

    pub fn lesson(origin: LessonOrigin, lesson: &LessonRecord, full: bool) -> Result<()> {
        msg_print!(
            Message::LessonHeader {
                day: lesson.day,
                title: lesson.title.clone(),
                origin: origin.to_string(),
            },
            true
        );
        msg_print!(Message::LessonCategory(lesson.category.clone()));
        println!("{}", lesson.description);

        msg_print!(Message::ObjectivesHeader, true);
        for objective in &lesson.learning_objectives {
            println!("  • {}", objective);
        }

        if !lesson.key_terms.is_empty() {
            msg_print!(Message::KeyTermsHeader, true);
            let mut terms = Table::new();
            terms.add_row(row!["TERM", "DEFINITION"]);
            for key_term in &lesson.key_terms {
                terms.add_row(row![key_term.term, key_term.definition]);
            }
            terms.printstd();
        }

        if !lesson.exercises.is_empty() {
            msg_print!(Message::ExercisesHeader, true);
            let mut exercises = Table::new();
            exercises.add_row(row!["ID", "TITLE", "TYPE", "DIFFICULTY", "STEPS"]);
            for exercise in &lesson.exercises {
                exercises.add_row(row![
                    exercise.id,
                    exercise.title,
                    exercise.kind,
                    exercise.difficulty,
                    exercise.instructions.join("\n")
                ]);
            }
            exercises.printstd();
        }

        if full {
            msg_print!(Message::ExplanationHeader, true);
            println!("{}", lesson.detailed_explanation);
        }

        Ok(())
    }

    pub fn index(groups: &[CategoryGroup]) -> Result<()> {
        for group in groups {
            msg_print!(
                Message::CategoryHeader {
                    category: group.category.clone(),
                    first_day: group.first_day,
                    lessons: group.lessons.len(),
                },
                true
            );

            let mut table = Table::new();
            table.add_row(row!["DAY", "TITLE"]);
            for lesson in &group.lessons {
                table.add_row(row![lesson.day, lesson.title]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn audit(report: &CoverageReport) -> Result<()> {
        msg_print!(Message::AuditHeader, true);
        msg_info!(Message::AuditSummary {
            total: report.total,
            unique_days: report.unique_days,
        });

        if report.is_complete() {
            msg_success!(Message::AuditComplete);
            return Ok(());
        }

        if !report.duplicates.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["DAY", "RECORDS"]);
            for duplicate in &report.duplicates {
                table.add_row(row![duplicate.day, duplicate.count]);
            }
            msg_warning!(Message::AuditDuplicates(join_days(report.duplicates.iter().map(|d| d.day))));
            table.printstd();
        }
        if !report.missing.is_empty() {
            msg_warning!(Message::AuditMissing(join_days(report.missing.iter().copied())));
        }
        if !report.out_of_range.is_empty() {
            msg_warning!(Message::AuditOutOfRange(join_days(report.out_of_range.iter().copied())));
        }

        Ok(())
    }
}

fn join_days(days: impl Iterator<Item = u32>) -> String {
    days.map(|day| day.to_string()).collect::<Vec<_>>().join(", ")
}

use super::load_curriculum;
use crate::{
    libs::{lesson::LessonOrigin, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Only lessons in this category (case-insensitive)")]
    category: Option<String>,

    #[arg(short, long, value_enum, help = "Only authored or only generated lessons")]
    source: Option<LessonOrigin>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let curriculum = load_curriculum()?;
    let tagged = curriculum.tagged();
    let total = tagged.len();

    let lessons = tagged
        .into_iter()
        .filter(|(origin, _)| args.source.map_or(true, |source| source == *origin))
        .filter(|(_, lesson)| {
            args.category
                .as_ref()
                .map_or(true, |category| lesson.category.eq_ignore_ascii_case(category))
        })
        .collect::<Vec<_>>();

    if lessons.is_empty() {
        msg_info!(Message::NoLessonsMatch);
        return Ok(());
    }

    if lessons.len() == total {
        msg_print!(Message::LessonsHeader(total), true);
    } else {
        msg_print!(Message::LessonsFiltered(lessons.len(), total), true);
    }
    View::lessons(&lessons)?;

    Ok(())
}

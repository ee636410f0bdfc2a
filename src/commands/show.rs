use super::load_curriculum;
use crate::{
    libs::{messages::Message, view::View},
    msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Day number (1-100)")]
    day: u32,

    #[arg(short, long, help = "Include the detailed explanation")]
    full: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let curriculum = load_curriculum()?;
    let records = curriculum.by_day(args.day)?;

    // Authored and generated records for the same day are both shown
    if records.len() > 1 {
        msg_warning!(Message::DuplicateDayRecords(args.day, records.len()));
    }

    for (origin, lesson) in records {
        View::lesson(origin, lesson, args.full)?;
    }

    Ok(())
}

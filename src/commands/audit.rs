use super::load_curriculum;
use crate::libs::{audit::CoverageReport, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AuditArgs {
    #[arg(long, help = "Exit with an error unless every day has exactly one lesson")]
    strict: bool,
}

pub fn cmd(args: AuditArgs) -> Result<()> {
    let curriculum = load_curriculum()?;
    let report = CoverageReport::from_lessons(curriculum.lessons());

    View::audit(&report)?;

    if args.strict {
        report.ensure_complete()?;
    }

    Ok(())
}

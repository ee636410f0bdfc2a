//! Curriculum export command.
//!
//! Writes a snapshot of the aggregated curriculum for use in spreadsheets or
//! other tools.
//!
//! - **Lessons**: one row per lesson record
//! - **Exercises**: one row per exercise
//! - **Index**: the category index in display order
//!
//! Format and output directory default to the `export` section of the config,
//! then to CSV in the current directory.

use super::load_curriculum;
use crate::{
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "lessons")]
    data: ExportData,

    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let exporter = Exporter::from_config(args.format, args.output, &config);

    msg_info!(Message::ExportingData(args.data.to_string(), exporter.format().to_string()));

    let curriculum = load_curriculum()?;
    exporter.export(args.data, curriculum.lessons())?;

    Ok(())
}

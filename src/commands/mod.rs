pub mod audit;
pub mod export;
pub mod index;
pub mod init;
pub mod list;
pub mod show;

use crate::{
    content,
    libs::{config::Config, curriculum::Curriculum, messages::Message},
    msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List every lesson in the curriculum")]
    List(list::ListArgs),
    #[command(about = "Show the lesson(s) for a day", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Browse lessons grouped by category")]
    Index,
    #[command(about = "Check which days are duplicated or missing")]
    Audit(audit::AuditArgs),
    #[command(about = "Export lessons, exercises or the index")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Index => index::cmd(),
            Commands::Audit(args) => audit::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Reads the config and aggregates the curriculum it describes.
fn load_curriculum() -> Result<Curriculum> {
    let config = Config::read()?;
    let curriculum = Curriculum::load(&config)?;

    if let Some(dir) = &config.extra_lessons_dir {
        let extra = curriculum.authored_count().saturating_sub(content::curriculum().len());
        msg_debug!(Message::ExtraLessonsLoaded(extra, dir.display().to_string()));
    }

    Ok(curriculum)
}

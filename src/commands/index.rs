use super::load_curriculum;
use crate::{
    libs::{index::group_by_category, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let curriculum = load_curriculum()?;
    let groups = group_by_category(curriculum.lessons());

    msg_print!(Message::IndexHeader(groups.len()), true);
    View::index(&groups)?;

    Ok(())
}

use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::{Menu, SpiceLevel};
use crate::state::Session;

/// Handles a spice filter button click: re-selecting the active level
/// clears the filter, any other level replaces it.
pub fn run(menu: &Menu, session: &mut Session, level: SpiceLevel) -> Result<CmdResult> {
    session.filters.toggle_spice(level);

    let tab = helpers::active_tab(menu, session)?;
    let mut commands = helpers::spice_button_commands(&session.filters);
    commands.extend(helpers::visibility_commands(tab, &session.filters));
    Ok(CmdResult::default().with_commands(commands))
}

use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Menu;
use crate::state::{Session, ALL_TAG};

/// Handles a dietary filter button click.
///
/// A tag that appears nowhere in the menu is a silent no-op. Otherwise the
/// toggle is applied and the full button state plus the active tab's
/// recomputed visibility are emitted.
pub fn run(menu: &Menu, session: &mut Session, tag: &str) -> Result<CmdResult> {
    if tag != ALL_TAG && !menu.dietary_tags().contains(tag) {
        return Ok(CmdResult::default());
    }

    session.filters.dietary.toggle(tag);

    let tab = helpers::active_tab(menu, session)?;
    let mut commands = helpers::dietary_button_commands(menu, &session.filters);
    commands.extend(helpers::visibility_commands(tab, &session.filters));
    Ok(CmdResult::default().with_commands(commands))
}

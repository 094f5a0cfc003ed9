use crate::commands::{helpers, CmdResult};
use crate::config::CartaConfig;
use crate::error::Result;
use crate::model::Menu;
use crate::state::Session;

/// Handles a tab button click.
///
/// An unknown tab id is a silent no-op: the click came from stale or foreign
/// markup and must not disturb the current state. A known id activates the
/// tab, resets the filters, and emits the full switch sequence including the
/// URL fragment update.
pub fn run(
    menu: &Menu,
    session: &mut Session,
    config: &CartaConfig,
    tab_id: &str,
) -> Result<CmdResult> {
    if menu.tab(tab_id).is_none() {
        return Ok(CmdResult::default());
    }
    let commands = helpers::activate(menu, session, config, tab_id, true)?;
    Ok(CmdResult::default().with_commands(commands))
}

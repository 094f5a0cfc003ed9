use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::config::CartaConfig;
use crate::error::{CartaError, Result};
use crate::model::Menu;
use crate::state::Session;

/// Resolves a URL fragment (page load, hash change, back/forward).
///
/// A fragment naming a known tab behaves exactly like a tab click, fragment
/// update included—re-writing the same value is idempotent, so the handler
/// can run on every navigation event. Anything else (empty, `#` only, or an
/// unknown name) falls back to the first tab without touching the fragment.
pub fn run(
    menu: &Menu,
    session: &mut Session,
    config: &CartaConfig,
    fragment: &str,
) -> Result<CmdResult> {
    let name = fragment.trim().trim_start_matches('#');

    if menu.tab(name).is_some() {
        let commands = helpers::activate(menu, session, config, name, true)?;
        return Ok(CmdResult::default().with_commands(commands));
    }

    let first = menu
        .first_tab()
        .ok_or_else(|| CartaError::Menu("menu has no tabs".to_string()))?
        .id
        .clone();
    let commands = helpers::activate(menu, session, config, &first, false)?;
    let mut result = CmdResult::default().with_commands(commands);
    if !name.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "'{}' does not name a tab, showing '{}'",
            name, first
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpiceLevel;
    use crate::state::FilterState;
    use crate::store::memory::fixtures::sample_menu;
    use crate::view::ViewCommand;

    fn setup() -> (Menu, Session, CartaConfig) {
        let menu = sample_menu();
        let session = Session::new(&menu).unwrap();
        (menu, session, CartaConfig::default())
    }

    #[test]
    fn known_fragment_switches_tab_and_resets_filters() {
        let (menu, mut session, config) = setup();
        session.activate("mains");
        session.filters.dietary.toggle("vegan");
        session.filters.toggle_spice(SpiceLevel::Hot);

        let result = run(&menu, &mut session, &config, "starters").unwrap();
        assert_eq!(session.active_tab, "starters");
        assert_eq!(session.filters, FilterState::default());
        assert!(result.commands.contains(&ViewCommand::SetTabActive {
            tab_id: "starters".into()
        }));
    }

    #[test]
    fn leading_hash_is_stripped() {
        let (menu, mut session, config) = setup();
        run(&menu, &mut session, &config, "#mains").unwrap();
        assert_eq!(session.active_tab, "mains");
    }

    #[test]
    fn unknown_fragment_falls_back_to_first_tab() {
        let (menu, mut session, config) = setup();
        session.activate("mains");

        let result = run(&menu, &mut session, &config, "dessert-specials").unwrap();
        assert_eq!(session.active_tab, "starters");
        // Fallback never rewrites the fragment.
        assert!(!result
            .commands
            .iter()
            .any(|c| matches!(c, ViewCommand::SetUrlFragment { .. })));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_fragment_selects_first_tab_silently() {
        let (menu, mut session, config) = setup();
        session.activate("drinks");

        let result = run(&menu, &mut session, &config, "").unwrap();
        assert_eq!(session.active_tab, "starters");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn resolution_is_idempotent() {
        let (menu, mut session, config) = setup();

        let first = run(&menu, &mut session, &config, "mains").unwrap();
        let second = run(&menu, &mut session, &config, "mains").unwrap();
        assert_eq!(first.commands, second.commands);
        assert_eq!(session.active_tab, "mains");
    }

    #[test]
    fn known_fragment_emits_fragment_update() {
        let (menu, mut session, config) = setup();
        let result = run(&menu, &mut session, &config, "mains").unwrap();
        assert!(result.commands.contains(&ViewCommand::SetUrlFragment {
            tab_id: "mains".into()
        }));
    }
}

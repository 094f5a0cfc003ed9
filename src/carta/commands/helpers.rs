use crate::config::CartaConfig;
use crate::error::{CartaError, Result};
use crate::filter::resolve_tab;
use crate::model::{Menu, SpiceLevel, Tab};
use crate::state::{FilterState, Session, ALL_TAG};
use crate::view::ViewCommand;

/// Looks up the session's active tab, which must exist as long as the
/// session was created from this menu.
pub fn active_tab<'a>(menu: &'a Menu, session: &Session) -> Result<&'a Tab> {
    menu.tab(&session.active_tab).ok_or_else(|| {
        CartaError::Api(format!(
            "active tab '{}' is not in the menu",
            session.active_tab
        ))
    })
}

/// Full dietary button state: one command per known tag plus the `all`
/// button. Re-emitting the whole state keeps commands idempotent.
pub fn dietary_button_commands(menu: &Menu, filters: &FilterState) -> Vec<ViewCommand> {
    let mut commands = vec![ViewCommand::SetFilterButtonActive {
        tag: ALL_TAG.to_string(),
        active: filters.dietary.is_all(),
    }];
    for tag in menu.dietary_tags() {
        commands.push(ViewCommand::SetFilterButtonActive {
            active: filters.dietary.is_active(&tag),
            tag,
        });
    }
    commands
}

/// Full spice button state, one command per level.
pub fn spice_button_commands(filters: &FilterState) -> Vec<ViewCommand> {
    SpiceLevel::ALL
        .iter()
        .map(|level| ViewCommand::SetSpiceButtonActive {
            level: *level,
            active: filters.spice == Some(*level),
        })
        .collect()
}

/// Visibility commands for every item in a tab. Combo parents get their own
/// command and one per option; plain items get a single command.
pub fn visibility_commands(tab: &Tab, filters: &FilterState) -> Vec<ViewCommand> {
    let mut commands = Vec::new();
    for item in resolve_tab(tab, filters) {
        for option in &item.options {
            commands.push(ViewCommand::SetComboOptionVisible {
                parent_id: item.item_id.clone(),
                option_id: option.option_id.clone(),
                visible: option.visible,
            });
        }
        commands.push(ViewCommand::SetItemVisible {
            item_id: item.item_id,
            visible: item.visible,
        });
    }
    commands
}

/// Switches the session to `tab_id` (which must exist) and emits the full
/// command sequence: activation, optional fragment update, filter-section
/// mode, reset button states, and the new tab's visibility.
pub fn activate(
    menu: &Menu,
    session: &mut Session,
    config: &CartaConfig,
    tab_id: &str,
    set_fragment: bool,
) -> Result<Vec<ViewCommand>> {
    let tab = menu
        .tab(tab_id)
        .ok_or_else(|| CartaError::Api(format!("tab '{}' is not in the menu", tab_id)))?;
    session.activate(tab_id);

    let mut commands = Vec::new();
    if set_fragment {
        commands.push(ViewCommand::SetUrlFragment {
            tab_id: tab_id.to_string(),
        });
    }
    commands.push(ViewCommand::SetTabActive {
        tab_id: tab_id.to_string(),
    });
    commands.push(ViewCommand::SetFilterSectionVisible {
        visible: !config.is_reserved(tab_id),
    });
    commands.extend(dietary_button_commands(menu, &session.filters));
    commands.extend(spice_button_commands(&session.filters));
    commands.extend(visibility_commands(tab, &session.filters));
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_menu;

    #[test]
    fn dietary_buttons_cover_menu_tags_plus_all() {
        let menu = sample_menu();
        let commands = dietary_button_commands(&menu, &FilterState::default());
        // all, gluten-free, vegan
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            ViewCommand::SetFilterButtonActive { tag, active: true } if tag == ALL_TAG
        ));
    }

    #[test]
    fn spice_buttons_reflect_active_level() {
        let mut filters = FilterState::default();
        filters.toggle_spice(SpiceLevel::Hot);
        let commands = spice_button_commands(&filters);
        assert_eq!(commands.len(), SpiceLevel::ALL.len());
        for command in commands {
            match command {
                ViewCommand::SetSpiceButtonActive { level, active } => {
                    assert_eq!(active, level == SpiceLevel::Hot);
                }
                other => panic!("unexpected command: {}", other),
            }
        }
    }

    #[test]
    fn visibility_commands_include_combo_options() {
        let menu = sample_menu();
        let mains = menu.tab("mains").unwrap();
        let commands = visibility_commands(mains, &FilterState::default());
        // 3 items + 3 options of the combo
        assert_eq!(commands.len(), 6);
        assert!(commands
            .iter()
            .any(|c| matches!(c, ViewCommand::SetComboOptionVisible { option_id, .. } if option_id == "opt-tofu")));
    }

    #[test]
    fn activate_unknown_tab_is_an_error_here() {
        // Callers are responsible for the silent no-op policy; the helper
        // itself insists on a valid id.
        let menu = sample_menu();
        let mut session = Session::new(&menu).unwrap();
        let result = activate(
            &menu,
            &mut session,
            &CartaConfig::default(),
            "desserts",
            true,
        );
        assert!(result.is_err());
        assert_eq!(session.active_tab, "starters");
    }
}

use crate::commands::{CmdResult, ListedTab};
use crate::config::CartaConfig;
use crate::error::Result;
use crate::model::Menu;
use crate::state::Session;

/// Lists every tab in menu order, marking the active and reserved ones.
pub fn run(menu: &Menu, session: &Session, config: &CartaConfig) -> Result<CmdResult> {
    let listed = menu
        .tabs
        .iter()
        .map(|tab| ListedTab {
            id: tab.id.clone(),
            title: tab.display_title().to_string(),
            active: tab.id == session.active_tab,
            reserved: config.is_reserved(&tab.id),
        })
        .collect();
    Ok(CmdResult::default().with_listed_tabs(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_menu;

    #[test]
    fn lists_tabs_with_active_and_reserved_flags() {
        let menu = sample_menu();
        let mut session = Session::new(&menu).unwrap();
        session.activate("mains");

        let result = run(&menu, &session, &CartaConfig::default()).unwrap();
        let tabs = &result.listed_tabs;
        assert_eq!(tabs.len(), 3);
        assert!(!tabs[0].active);
        assert!(tabs[1].active);
        assert!(tabs[2].reserved); // drinks
        assert!(!tabs[1].reserved);
    }
}

use crate::commands::{helpers, CmdResult, ListedItem, ListedOption};
use crate::error::Result;
use crate::filter::resolve_item;
use crate::model::Menu;
use crate::state::Session;

/// Lists the active tab's items with their resolved visibility. The read
/// path for clients; mutates nothing.
pub fn run(menu: &Menu, session: &Session) -> Result<CmdResult> {
    let tab = helpers::active_tab(menu, session)?;

    let listed = tab
        .items
        .iter()
        .map(|item| {
            let resolved = resolve_item(item, &session.filters);
            let options = item
                .combo_options
                .iter()
                .flatten()
                .zip(&resolved.options)
                .map(|(option, vis)| ListedOption {
                    id: option.id.clone(),
                    name: option.name.clone(),
                    visible: vis.visible,
                })
                .collect();
            ListedItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price.clone(),
                visible: resolved.visible,
                options,
            }
        })
        .collect();

    Ok(CmdResult::default().with_listed_items(listed))
}

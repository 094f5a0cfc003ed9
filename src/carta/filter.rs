//! # Item Visibility Resolver
//!
//! Pure functions from (item, filter state) to show/hide decisions. Nothing
//! here mutates anything or touches a presentation layer, which is what
//! makes the filtering behavior independently testable.
//!
//! Plain items pass when the dietary check AND the spice check both pass.
//! Combo items are different: the combo's own attributes are ignored, every
//! option is evaluated independently, and the combo is shown iff at least
//! one option matches. Options that don't match are hidden individually even
//! when their parent stays visible—a combo is relevant to a diner if any of
//! its options fits their constraints.

use std::collections::BTreeSet;

use crate::model::{MenuItem, SpiceLevel, Tab};
use crate::state::FilterState;

/// Resolved visibility for one combo option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionVisibility {
    pub option_id: String,
    pub visible: bool,
}

/// Resolved visibility for one menu item. `options` is empty for plain
/// items and carries one entry per combo option for composite items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVisibility {
    pub item_id: String,
    pub visible: bool,
    pub options: Vec<OptionVisibility>,
}

/// The non-composite predicate: dietary intersection AND exact spice match.
///
/// An absent spice level passes only when no spice filter is active; it
/// never matches a concrete filter.
pub fn matches(tags: &BTreeSet<String>, spice: Option<SpiceLevel>, filters: &FilterState) -> bool {
    if !filters.dietary.matches(tags) {
        return false;
    }
    match filters.spice {
        None => true,
        Some(active) => spice == Some(active),
    }
}

/// Resolves one item against the current filter state.
pub fn resolve_item(item: &MenuItem, filters: &FilterState) -> ItemVisibility {
    if let Some(combo_options) = &item.combo_options {
        let options: Vec<OptionVisibility> = combo_options
            .iter()
            .map(|option| OptionVisibility {
                option_id: option.id.clone(),
                visible: matches(&option.dietary, option.spice, filters),
            })
            .collect();
        // OR across options; a combo with no matching option is hidden.
        let visible = options.iter().any(|o| o.visible);
        ItemVisibility {
            item_id: item.id.clone(),
            visible,
            options,
        }
    } else {
        ItemVisibility {
            item_id: item.id.clone(),
            visible: matches(&item.dietary, item.spice, filters),
            options: Vec::new(),
        }
    }
}

/// Resolves every item in a tab. Callers pass the active tab only—items in
/// inactive tabs are never visited.
pub fn resolve_tab(tab: &Tab, filters: &FilterState) -> Vec<ItemVisibility> {
    tab.items
        .iter()
        .map(|item| resolve_item(item, filters))
        .collect()
}

//! # View Commands
//!
//! The output half of the view-binder contract. Commands describe what a
//! presentation layer should change—visibility, button highlights, the URL
//! fragment—without assuming anything about how it renders them. The CLI
//! prints them; a web binder would apply them to the DOM.

use std::fmt;

use crate::model::SpiceLevel;

/// A single instruction for the view binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Highlight `tab_id` as the active tab (and un-highlight the rest).
    SetTabActive { tab_id: String },
    /// Write `tab_id` into the location's URL fragment.
    SetUrlFragment { tab_id: String },
    /// Show or hide the whole filter section (reserved tabs hide it).
    SetFilterSectionVisible { visible: bool },
    /// Set the active state of one dietary filter button.
    SetFilterButtonActive { tag: String, active: bool },
    /// Set the active state of one spice filter button.
    SetSpiceButtonActive { level: SpiceLevel, active: bool },
    /// Show or hide one menu item.
    SetItemVisible { item_id: String, visible: bool },
    /// Show or hide one option inside a combo item.
    SetComboOptionVisible {
        parent_id: String,
        option_id: String,
        visible: bool,
    },
}

fn on_off(active: bool) -> &'static str {
    if active {
        "on"
    } else {
        "off"
    }
}

fn show_hide(visible: bool) -> &'static str {
    if visible {
        "show"
    } else {
        "hide"
    }
}

impl fmt::Display for ViewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCommand::SetTabActive { tab_id } => write!(f, "tab-active {}", tab_id),
            ViewCommand::SetUrlFragment { tab_id } => write!(f, "url-fragment #{}", tab_id),
            ViewCommand::SetFilterSectionVisible { visible } => {
                write!(f, "filter-section {}", show_hide(*visible))
            }
            ViewCommand::SetFilterButtonActive { tag, active } => {
                write!(f, "filter-btn {} {}", tag, on_off(*active))
            }
            ViewCommand::SetSpiceButtonActive { level, active } => {
                write!(f, "spice-btn {} {}", level, on_off(*active))
            }
            ViewCommand::SetItemVisible { item_id, visible } => {
                write!(f, "item {} {}", item_id, show_hide(*visible))
            }
            ViewCommand::SetComboOptionVisible {
                parent_id,
                option_id,
                visible,
            } => write!(
                f,
                "combo-option {}/{} {}",
                parent_id,
                option_id,
                show_hide(*visible)
            ),
        }
    }
}

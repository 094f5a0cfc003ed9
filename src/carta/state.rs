//! # Filter State and Session
//!
//! Interactive state for a menu page, kept explicit instead of being inferred
//! from rendered markup. [`DietaryFilters`] encodes its two invariants by
//! construction:
//!
//! - the active set is never empty: an emptied `Tags` set collapses back to
//!   [`DietaryFilters::All`];
//! - `All` never coexists with a concrete tag: selecting a tag leaves `All`,
//!   selecting `all` discards every tag.
//!
//! The `"all"` sentinel string ([`ALL_TAG`]) exists only at the event
//! boundary, where the view binder reports which button was clicked.

use std::collections::BTreeSet;

use crate::error::{CartaError, Result};
use crate::model::{Menu, SpiceLevel};

/// The wire name of the catch-all dietary filter button.
pub const ALL_TAG: &str = "all";

/// The active dietary filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DietaryFilters {
    /// No concrete tag selected; every item passes the dietary check.
    #[default]
    All,
    /// One or more concrete tags; an item passes if its tag set intersects
    /// this set. Never empty.
    Tags(BTreeSet<String>),
}

impl DietaryFilters {
    pub fn is_all(&self) -> bool {
        matches!(self, DietaryFilters::All)
    }

    /// Whether the button for `tag` should render as active. The `all`
    /// button is active exactly when no concrete tag is selected.
    pub fn is_active(&self, tag: &str) -> bool {
        match self {
            DietaryFilters::All => tag == ALL_TAG,
            DietaryFilters::Tags(tags) => tags.contains(tag),
        }
    }

    /// Applies a dietary filter button click.
    ///
    /// `all` resets the selection. A concrete tag toggles its own
    /// membership; removing the last tag collapses back to `All`.
    pub fn toggle(&mut self, tag: &str) {
        if tag == ALL_TAG {
            *self = DietaryFilters::All;
            return;
        }
        match self {
            DietaryFilters::All => {
                let mut tags = BTreeSet::new();
                tags.insert(tag.to_string());
                *self = DietaryFilters::Tags(tags);
            }
            DietaryFilters::Tags(tags) => {
                if !tags.remove(tag) {
                    tags.insert(tag.to_string());
                }
                if tags.is_empty() {
                    *self = DietaryFilters::All;
                }
            }
        }
    }

    /// Dietary check: `All` passes everything, otherwise the item's tag set
    /// must intersect the active set.
    pub fn matches(&self, tags: &BTreeSet<String>) -> bool {
        match self {
            DietaryFilters::All => true,
            DietaryFilters::Tags(active) => active.iter().any(|t| tags.contains(t)),
        }
    }
}

/// The full filter state of the page: dietary selection plus at most one
/// spice level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub dietary: DietaryFilters,
    pub spice: Option<SpiceLevel>,
}

impl FilterState {
    /// Applies a spice button click: re-selecting the active level clears
    /// it, anything else replaces it.
    pub fn toggle_spice(&mut self, level: SpiceLevel) {
        self.spice = if self.spice == Some(level) {
            None
        } else {
            Some(level)
        };
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

/// Transient per-page state: which tab is active and what filters are set.
/// Re-derived from the URL fragment on load, never persisted elsewhere.
#[derive(Debug, Clone)]
pub struct Session {
    pub active_tab: String,
    pub filters: FilterState,
}

impl Session {
    /// Starts a session on the menu's first tab with default filters.
    pub fn new(menu: &Menu) -> Result<Self> {
        let first = menu
            .first_tab()
            .ok_or_else(|| CartaError::Menu("menu has no tabs".to_string()))?;
        Ok(Session {
            active_tab: first.id.clone(),
            filters: FilterState::default(),
        })
    }

    /// Switches the active tab. Always resets the filter state, regardless
    /// of what was selected before.
    pub fn activate(&mut self, tab_id: &str) {
        self.active_tab = tab_id.to_string();
        self.filters.reset();
    }
}

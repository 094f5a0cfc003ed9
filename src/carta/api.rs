//! # API Facade
//!
//! The single entry point for all carta operations, regardless of the view
//! binder driving it. One method per UI event, plus the read paths. The
//! facade dispatches to the command layer and returns structured
//! `Result<CmdResult>` values—no business logic, no I/O, no presentation
//! concerns.
//!
//! Mutating methods take `&mut self`, so the single-writer, synchronous
//! event ordering of the original page is enforced by the borrow checker:
//! each event runs to completion and hands back its view commands before
//! the next one can be dispatched.

use crate::commands;
use crate::config::CartaConfig;
use crate::error::Result;
use crate::event::UiEvent;
use crate::model::{Menu, SpiceLevel};
use crate::state::Session;
use crate::store::MenuSource;

/// The main API facade for a loaded menu page.
pub struct MenuApi {
    menu: Menu,
    session: Session,
    config: CartaConfig,
}

impl MenuApi {
    /// Loads a menu from a source and starts a session on its first tab.
    /// The view binder should follow up with [`Self::location_hash_changed`]
    /// to honor any fragment present at load time.
    pub fn open<S: MenuSource>(source: &S, config: CartaConfig) -> Result<Self> {
        let menu = source.load()?;
        let session = Session::new(&menu)?;
        Ok(Self {
            menu,
            session,
            config,
        })
    }

    pub fn tab_clicked(&mut self, tab_id: &str) -> Result<commands::CmdResult> {
        commands::select_tab::run(&self.menu, &mut self.session, &self.config, tab_id)
    }

    pub fn dietary_filter_clicked(&mut self, tag: &str) -> Result<commands::CmdResult> {
        commands::dietary::run(&self.menu, &mut self.session, tag)
    }

    pub fn spice_filter_clicked(&mut self, level: SpiceLevel) -> Result<commands::CmdResult> {
        commands::spice::run(&self.menu, &mut self.session, level)
    }

    pub fn location_hash_changed(&mut self, fragment: &str) -> Result<commands::CmdResult> {
        commands::fragment::run(&self.menu, &mut self.session, &self.config, fragment)
    }

    /// Routes one input event to its handler.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<commands::CmdResult> {
        match event {
            UiEvent::TabClicked(tab_id) => self.tab_clicked(&tab_id),
            UiEvent::DietaryFilterClicked(tag) => self.dietary_filter_clicked(&tag),
            UiEvent::SpiceFilterClicked(level) => self.spice_filter_clicked(level),
            UiEvent::LocationHashChanged(fragment) => self.location_hash_changed(&fragment),
        }
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.menu, &self.session)
    }

    pub fn tabs(&self) -> Result<commands::CmdResult> {
        commands::tabs::run(&self.menu, &self.session, &self.config)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

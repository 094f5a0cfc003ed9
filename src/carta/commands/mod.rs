use crate::view::ViewCommand;

pub mod dietary;
pub mod fragment;
pub mod helpers;
pub mod select_tab;
pub mod show;
pub mod spice;
pub mod tabs;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A combo option as the read path reports it.
#[derive(Debug, Clone)]
pub struct ListedOption {
    pub id: String,
    pub name: String,
    pub visible: bool,
}

/// A menu item plus its resolved visibility, for listing output.
#[derive(Debug, Clone)]
pub struct ListedItem {
    pub id: String,
    pub name: String,
    pub price: Option<String>,
    pub visible: bool,
    pub options: Vec<ListedOption>,
}

/// A tab as the read path reports it.
#[derive(Debug, Clone)]
pub struct ListedTab {
    pub id: String,
    pub title: String,
    pub active: bool,
    pub reserved: bool,
}

/// The structured result every command returns. Mutating commands fill
/// `commands`; read commands fill the listing fields; any command may attach
/// messages for the client to surface.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub commands: Vec<ViewCommand>,
    pub listed_items: Vec<ListedItem>,
    pub listed_tabs: Vec<ListedTab>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_commands(mut self, commands: Vec<ViewCommand>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<ListedItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_listed_tabs(mut self, tabs: Vec<ListedTab>) -> Self {
        self.listed_tabs = tabs;
        self
    }

    /// True when the command changed nothing and emitted nothing—the silent
    /// no-op case for unknown identifiers.
    pub fn is_noop(&self) -> bool {
        self.commands.is_empty()
            && self.listed_items.is_empty()
            && self.listed_tabs.is_empty()
            && self.messages.is_empty()
    }
}

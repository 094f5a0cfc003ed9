//! # Menu Sources
//!
//! This module defines where menu content comes from. The [`MenuSource`]
//! trait abstracts the document backend the way a page's markup is the
//! backend for the original: content is loaded once at startup and is
//! read-only afterwards.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: production JSON document loading
//! - [`memory::InMemorySource`]: canned menus for testing
//!
//! Every source validates the menu after loading (non-empty, unique ids),
//! so downstream code can rely on a well-formed [`Menu`].

use crate::error::Result;
use crate::model::Menu;

pub mod fs;
pub mod memory;

/// Abstract interface for loading menu content.
pub trait MenuSource {
    /// Load and validate the menu document.
    fn load(&self) -> Result<Menu>;
}

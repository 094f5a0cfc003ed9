//! # Carta Architecture
//!
//! Carta is a **UI-agnostic menu tab/filter engine**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The library models the interactive part of a restaurant menu page: a set
//! of named tabs, each holding menu items (some of them fixed-price combos
//! with selectable options), plus the dietary and spice filters a diner can
//! toggle. Any real presentation layer—a web view, a terminal, a kiosk—acts
//! as a *view binder*: it feeds [`event::UiEvent`]s in and applies the
//! [`view::ViewCommand`]s that come back.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - One method per UI event (tab click, filter click, ...)   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Mutates the session, emits view commands                 │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - Abstract MenuSource trait                                │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, filter resolution), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Event Flow
//!
//! Everything is single-threaded and synchronous: an event mutates the
//! [`state::Session`], the pure resolver in [`filter`] recomputes visibility
//! for the active tab, and the resulting [`view::ViewCommand`]s are returned
//! before the next event is accepted. Unknown identifiers (a tab id or
//! dietary tag that doesn't exist in the menu) are silent no-ops, never
//! errors—errors are reserved for the I/O boundary and malformed menu
//! documents.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Menu source abstraction and implementations
//! - [`model`]: Menu content types (`Menu`, `Tab`, `MenuItem`, `ComboOption`)
//! - [`state`]: Filter state and the per-page session
//! - [`filter`]: The pure item-visibility resolver
//! - [`event`]: Input events delivered by a view binder
//! - [`view`]: Output commands for a view binder to apply
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

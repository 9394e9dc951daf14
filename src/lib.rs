//! # Introduction
//!
//! Envista captures a snapshot of the process environment and lets the user
//! browse and edit it in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), with type-aware editors for values
//! that look like IP addresses, paths, or whole path lists.
//!
//! ## Session pipeline
//!
//! ```text
//! Environment → Snapshot → App (browse/search/edit) → Snapshot → Environment
//! ```
//!
//! 1. [`snapshot`] — ordered in-memory copy of the environment; the sole
//!    source of truth for one session, written back with
//!    [`snapshot::Snapshot::apply`].
//! 2. [`classify`] — infers a [`classify::VarKind`] from a value's text and
//!    selects the specialized editor.
//! 3. [`pathgroup`] — path-list splitting, deduplication, and
//!    executable-collision analysis.
//! 4. [`ui`] — the modal navigator and the nested path-list editor.
//! 5. [`commands`] — the non-interactive surface: list, save, set, clip,
//!    conflict, dedup.

pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod pathgroup;
pub mod platform;
pub mod snapshot;
pub mod ui;

//! Terminal user interface built on [ratatui](https://docs.rs/ratatui).
//!
//! Organized in layers:
//!
//! - **[`app`]** — session state, modal keyboard loop, prompt handling
//! - **[`panes`]** — stateless render functions (variable table, path list,
//!   status bar, prompt line)
//! - **[`scroll`]** — the sliding-window viewport shared by both lists
//! - **[`theme`]** — centralized color palette
//!
//! Consumers construct an [`App`] from a captured snapshot and call
//! [`App::run`] on a raw-mode terminal.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod scroll;
pub mod theme;

pub use app::App;

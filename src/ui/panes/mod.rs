//! Stateless render functions for the visible panes.
//!
//! - [`table`]: the two-column Name/Value variable table
//! - [`paths`]: the nested path-list editor view
//! - [`status`]: bottom status bar with keybindings and the last message
//! - [`prompt`]: one-line input prompt shown while a prompt mode is active

pub mod paths;
pub mod prompt;
pub mod status;
pub mod table;

pub use paths::render_path_pane;
pub use prompt::render_prompt_line;
pub use status::render_status_bar;
pub use table::render_table_pane;

//! Interactive session state and keyboard event loop.
//!
//! [`App`] owns the [`Snapshot`] for the lifetime of one `edit` session and
//! drives a modal state machine:
//!
//! - **Browse** — navigate the variable table, search, jump, start edits
//! - **Prompt** — collect one line of input on the bottom row (search text,
//!   goto index, replacement values, new path elements)
//! - **Group** — the nested path-list editor over one delimited value
//!
//! Every committed edit goes through [`Snapshot::set`] followed by
//! [`Snapshot::apply`], so the process environment tracks the table. The
//! whole screen is redrawn after each input event; input is human-paced, so
//! there is no incremental diffing.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

use crate::classify::{self, VarKind};
use crate::error::EnvError;
use crate::pathgroup;
use crate::snapshot::Snapshot;
use crate::ui::panes::{
    self,
    paths::PATHS_CHROME_ROWS,
    status::StatusHints,
    table::TABLE_CHROME_ROWS,
};
use crate::ui::scroll;

/// What the bottom-line prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Case-insensitive substring search over variable names.
    Search,
    /// Jump to a list index.
    Goto,
    /// Unconditional value replacement.
    PlainEdit,
    /// Replacement validated against the given kind; one attempt only.
    TypedEdit(VarKind),
    /// New path element for the rear of the group (validated).
    GroupAppend,
    /// New path element for the front of the group (validated).
    GroupPrepend,
    /// In-place element replacement (not validated).
    GroupEditInPlace,
}

impl PromptKind {
    fn label(self) -> String {
        match self {
            PromptKind::Search => "/".to_string(),
            PromptKind::Goto => ":".to_string(),
            PromptKind::PlainEdit => "New value:".to_string(),
            PromptKind::TypedEdit(kind) => format!("New value ({}):", kind),
            PromptKind::GroupAppend => "Add path (rear):".to_string(),
            PromptKind::GroupPrepend => "Add path (front):".to_string(),
            PromptKind::GroupEditInPlace => "Edit path:".to_string(),
        }
    }

    /// Prompts opened from inside the path-group editor return there.
    fn belongs_to_group(self) -> bool {
        matches!(
            self,
            PromptKind::GroupAppend | PromptKind::GroupPrepend | PromptKind::GroupEditInPlace
        )
    }
}

/// Current input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Prompt { kind: PromptKind, buffer: String },
    Group,
}

/// Nested editing session over one delimiter-separated value.
#[derive(Debug, Clone)]
pub struct PathGroupState {
    pub name: String,
    pub elements: Vec<String>,
    pub selected: usize,
    pub position: usize,
}

impl PathGroupState {
    fn new(name: String, value: &str) -> Self {
        PathGroupState {
            name,
            elements: pathgroup::split(value),
            selected: 0,
            position: 0,
        }
    }

    fn clamp_selection(&mut self) {
        if self.elements.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.elements.len() {
            self.selected = self.elements.len() - 1;
        }
    }
}

/// The interactive session.
pub struct App {
    pub snapshot: Snapshot,

    /// Selected row in the variable table.
    pub selected: usize,
    /// First visible row of the table window.
    pub position: usize,

    /// Indices of the last non-empty search result, in table order.
    pub search_matches: Vec<usize>,
    /// Cursor into `search_matches`.
    pub search_cursor: usize,

    pub mode: Mode,
    /// Present exactly while a path-group editing session is open.
    pub group: Option<PathGroupState>,

    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(snapshot: Snapshot) -> Self {
        let status_message = format!("{} variables", snapshot.len());
        App {
            snapshot,
            selected: 0,
            position: 0,
            search_matches: Vec::new(),
            search_cursor: 0,
            mode: Mode::Browse,
            group: None,
            status_message,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Full-screen redraw. A terminal too small for the minimum layout
    /// renders nothing rather than panicking.
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        if size.width < 5 || size.height < 4 {
            return;
        }

        let prompt_rows = u16::from(matches!(self.mode, Mode::Prompt { .. }));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(prompt_rows),
                Constraint::Length(1),
            ])
            .split(size);
        let pane_area = chunks[0];
        let prompt_area = chunks[1];
        let status_area = chunks[2];

        let (indicator, hints);
        if let Some(group) = &mut self.group {
            let rows = (pane_area.height as usize).saturating_sub(PATHS_CHROME_ROWS);
            let (position, selected) =
                scroll::recompute(group.selected, group.elements.len(), group.position, rows);
            group.position = position;
            group.selected = selected;
            panes::render_path_pane(
                frame,
                pane_area,
                &group.name,
                &group.elements,
                group.selected,
                group.position,
            );
            indicator = format!("{}/{}", group.selected + 1, group.elements.len());
            hints = StatusHints::PathGroup;
        } else {
            let rows = (pane_area.height as usize).saturating_sub(TABLE_CHROME_ROWS);
            let (position, selected) =
                scroll::recompute(self.selected, self.snapshot.len(), self.position, rows);
            self.position = position;
            self.selected = selected;
            panes::render_table_pane(
                frame,
                pane_area,
                self.snapshot.entries(),
                self.selected,
                self.position,
            );
            indicator = format!("{}/{}", self.selected + 1, self.snapshot.len());
            hints = StatusHints::Browse;
        }

        if let Mode::Prompt { kind, buffer } = &self.mode {
            panes::render_prompt_line(frame, prompt_area, &kind.label(), buffer);
        }

        panes::render_status_bar(frame, status_area, &self.status_message, &indicator, hints);
    }

    /// Feed one keypress through the state machine.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Group => self.handle_group_key(key),
            Mode::Prompt { kind, buffer } => self.handle_prompt_key(key, kind, buffer),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let count = self.snapshot.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(count.saturating_sub(1));
            }
            KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('g') => {
                self.selected = 0;
            }
            KeyCode::Char('G') => {
                self.selected = count.saturating_sub(1);
            }
            KeyCode::Char(':') => {
                self.open_prompt(PromptKind::Goto, String::new());
            }
            KeyCode::Char('/') => {
                self.open_prompt(PromptKind::Search, String::new());
            }
            KeyCode::Char('n') => {
                if !self.search_matches.is_empty()
                    && self.search_cursor + 1 < self.search_matches.len()
                {
                    self.search_cursor += 1;
                    self.selected = self.search_matches[self.search_cursor];
                }
            }
            KeyCode::Char('N') => {
                if !self.search_matches.is_empty() && self.search_cursor > 0 {
                    self.search_cursor -= 1;
                    self.selected = self.search_matches[self.search_cursor];
                }
            }
            KeyCode::Char('e') => {
                if let Some(entry) = self.snapshot.entry(self.selected) {
                    let current = entry.value.clone();
                    self.open_prompt(PromptKind::PlainEdit, current);
                }
            }
            KeyCode::Char('i') => {
                self.start_intelligent_edit();
            }
            _ => {}
        }
    }

    /// Classify the selected value fresh and dispatch to the matching editor.
    fn start_intelligent_edit(&mut self) {
        let entry = match self.snapshot.entry(self.selected) {
            Some(entry) => entry,
            None => return,
        };
        let name = entry.name.clone();
        let value = entry.value.clone();
        match classify::classify(&value) {
            kind @ (VarKind::Ipv4 | VarKind::Ipv6 | VarKind::Path) => {
                self.status_message = format!("suggested type: {}", kind);
                self.open_prompt(PromptKind::TypedEdit(kind), String::new());
            }
            VarKind::PathGroup => {
                self.group = Some(PathGroupState::new(name, &value));
                self.mode = Mode::Group;
                self.status_message = "editing path group".to_string();
            }
            VarKind::Undefined => {
                self.open_prompt(PromptKind::PlainEdit, value);
            }
        }
    }

    fn handle_group_key(&mut self, key: KeyEvent) {
        let group = match self.group.as_mut() {
            Some(group) => group,
            None => return,
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Down => {
                group.selected = (group.selected + 1).min(group.elements.len().saturating_sub(1));
            }
            KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Up => {
                group.selected = group.selected.saturating_sub(1);
            }
            KeyCode::Char('a') => {
                self.open_prompt(PromptKind::GroupAppend, String::new());
            }
            KeyCode::Char('A') => {
                self.open_prompt(PromptKind::GroupPrepend, String::new());
            }
            KeyCode::Char('=') | KeyCode::Char('+') => {
                if group.selected + 1 < group.elements.len() {
                    group.elements.swap(group.selected, group.selected + 1);
                    group.selected += 1;
                }
            }
            KeyCode::Char('-') => {
                if group.selected > 0 {
                    group.elements.swap(group.selected, group.selected - 1);
                    group.selected -= 1;
                }
            }
            KeyCode::Char('r') => {
                if !group.elements.is_empty() {
                    group
                        .elements
                        .remove(group.selected.min(group.elements.len() - 1));
                    group.clamp_selection();
                }
            }
            KeyCode::Char('e') => {
                if let Some(element) = group.elements.get(group.selected) {
                    let current = element.clone();
                    self.open_prompt(PromptKind::GroupEditInPlace, current);
                }
            }
            KeyCode::Char('q') => {
                self.finish_group_edit();
            }
            _ => {}
        }
    }

    /// Join the elements back together, commit, and apply.
    fn finish_group_edit(&mut self) {
        if let Some(group) = self.group.take() {
            let joined = pathgroup::join(&group.elements);
            self.commit(&group.name, joined);
        }
        self.mode = Mode::Browse;
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, kind: PromptKind, mut buffer: String) {
        match key.code {
            KeyCode::Enter => {
                self.close_prompt(kind);
                self.submit_prompt(kind, buffer);
            }
            KeyCode::Esc => {
                self.close_prompt(kind);
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::Prompt { kind, buffer };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::Prompt { kind, buffer };
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, kind: PromptKind, buffer: String) {
        self.mode = Mode::Prompt { kind, buffer };
    }

    fn close_prompt(&mut self, kind: PromptKind) {
        self.mode = if kind.belongs_to_group() && self.group.is_some() {
            Mode::Group
        } else {
            Mode::Browse
        };
    }

    fn submit_prompt(&mut self, kind: PromptKind, input: String) {
        match kind {
            PromptKind::Search => self.run_search(&input),
            PromptKind::Goto => match input.trim().parse::<usize>() {
                Ok(index) => {
                    self.selected = index.min(self.snapshot.len());
                }
                Err(_) => {
                    self.status_message = format!("not a number: '{}'", input.trim());
                }
            },
            PromptKind::PlainEdit => {
                if let Some(entry) = self.snapshot.entry(self.selected) {
                    let name = entry.name.clone();
                    self.commit(&name, input);
                }
            }
            PromptKind::TypedEdit(expected) => self.submit_typed_edit(expected, input),
            PromptKind::GroupAppend => {
                if classify::is_path(&input) {
                    if let Some(group) = self.group.as_mut() {
                        group.elements.push(input);
                    }
                } else {
                    self.status_message = EnvError::InvalidPath { input }.to_string();
                }
            }
            PromptKind::GroupPrepend => {
                if classify::is_path(&input) {
                    if let Some(group) = self.group.as_mut() {
                        group.elements.insert(0, input);
                        group.selected += 1;
                    }
                } else {
                    self.status_message = EnvError::InvalidPath { input }.to_string();
                }
            }
            PromptKind::GroupEditInPlace => {
                if let Some(group) = self.group.as_mut() {
                    if let Some(element) = group.elements.get_mut(group.selected) {
                        *element = input;
                    }
                }
            }
        }
    }

    /// One validation attempt; a rejected value leaves the variable untouched
    /// and surfaces the reason in the status bar.
    fn submit_typed_edit(&mut self, expected: VarKind, input: String) {
        let verdict = match expected {
            VarKind::Ipv4 if classify::is_ipv4(&input) => Ok(()),
            VarKind::Ipv6 if classify::is_ipv6(&input) => Ok(()),
            VarKind::Path if classify::is_path(&input) => Ok(()),
            VarKind::Path => Err(EnvError::InvalidPath {
                input: input.clone(),
            }),
            kind => Err(EnvError::InvalidAddress {
                kind,
                input: input.clone(),
            }),
        };
        match verdict {
            Ok(()) => {
                if let Some(entry) = self.snapshot.entry(self.selected) {
                    let name = entry.name.clone();
                    self.commit(&name, input);
                }
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Case-insensitive substring search over names. A search with no hits
    /// changes nothing, including the previous match list.
    fn run_search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        let matches: Vec<usize> = self
            .snapshot
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        if matches.is_empty() {
            self.status_message = format!("no match for '{}'", query);
            return;
        }
        self.status_message = format!("{} match(es) for '{}'", matches.len(), query);
        self.search_matches = matches;
        self.search_cursor = 0;
        self.selected = self.search_matches[0];
    }

    fn commit(&mut self, name: &str, value: String) {
        self.snapshot.set(name, value);
        self.snapshot.apply();
        self.status_message = format!("{} updated", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(pairs: &[(&str, &str)]) -> App {
        App::new(Snapshot::from_pairs(
            pairs.iter().map(|(n, v)| (n.to_string(), v.to_string())),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_move_and_clamp() {
        let mut app = app_with(&[("A", "1"), ("B", "2"), ("C", "3")]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(&[("A", "1")]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_collects_all_matches_without_wrap() {
        let mut app = app_with(&[
            ("PATH", "x"),
            ("HOME", "x"),
            ("MANPATH", "x"),
            ("SHELL", "x"),
            ("CDPATH", "x"),
        ]);
        press(&mut app, KeyCode::Char('/'));
        type_line(&mut app, "path");
        assert_eq!(app.search_matches, [0, 2, 4]);
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.selected, 4);
        // no wrap past the last match
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.selected, 4);
        press(&mut app, KeyCode::Char('N'));
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_search_without_match_changes_nothing() {
        let mut app = app_with(&[("PATH", "x"), ("HOME", "x")]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('/'));
        type_line(&mut app, "zzz");
        assert_eq!(app.selected, 1);
        assert!(app.search_matches.is_empty());
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_goto_clamps_to_count() {
        let mut app = app_with(&[("A", "1"), ("B", "2"), ("C", "3")]);
        press(&mut app, KeyCode::Char(':'));
        type_line(&mut app, "99");
        // clamped to the entry count; the viewport recompute pins it to the
        // last row at render time
        assert_eq!(app.selected, 3);
        press(&mut app, KeyCode::Char(':'));
        type_line(&mut app, "1");
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_plain_edit_replaces_unconditionally() {
        let mut app = app_with(&[("ENVISTA_TEST_PLAIN", "old")]);
        press(&mut app, KeyCode::Char('e'));
        // prompt is prefilled with the current value
        assert!(matches!(
            &app.mode,
            Mode::Prompt { kind: PromptKind::PlainEdit, buffer } if buffer == "old"
        ));
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_line(&mut app, "not a path at all");
        assert_eq!(
            app.snapshot.get("ENVISTA_TEST_PLAIN"),
            Some("not a path at all")
        );
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_typed_edit_rejects_bad_ipv4() {
        let mut app = app_with(&[("ENVISTA_TEST_IP", "10.0.0.1")]);
        press(&mut app, KeyCode::Char('i'));
        assert!(matches!(
            app.mode,
            Mode::Prompt {
                kind: PromptKind::TypedEdit(VarKind::Ipv4),
                ..
            }
        ));
        type_line(&mut app, "10.0.0.999");
        assert_eq!(app.snapshot.get("ENVISTA_TEST_IP"), Some("10.0.0.1"));
        assert!(app.status_message.contains("not a valid IPv4"));
    }

    #[test]
    fn test_typed_edit_accepts_good_ipv6() {
        let mut app = app_with(&[("ENVISTA_TEST_IP6", "::1")]);
        press(&mut app, KeyCode::Char('i'));
        type_line(&mut app, "fe80::2");
        assert_eq!(app.snapshot.get("ENVISTA_TEST_IP6"), Some("fe80::2"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_group_round_trip_without_mutation() {
        let original = "/usr/bin:/usr/local/bin:/opt/bin";
        let mut app = app_with(&[("ENVISTA_TEST_RT", original)]);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Group);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.snapshot.get("ENVISTA_TEST_RT"), Some(original));
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.group.is_none());
    }

    #[test]
    #[cfg(not(windows))]
    fn test_group_reorder_and_remove() {
        let mut app = app_with(&[("ENVISTA_TEST_GRP", "/a:/b:/c")]);
        press(&mut app, KeyCode::Char('i'));
        // swap /a and /b, selection follows the moved element
        press(&mut app, KeyCode::Char('='));
        assert_eq!(app.group.as_ref().unwrap().selected, 1);
        // remove the moved /a
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.snapshot.get("ENVISTA_TEST_GRP"), Some("/b:/c"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_group_append_validates_and_prepend_shifts() {
        let mut app = app_with(&[("ENVISTA_TEST_ADD", "/a:/b")]);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "no slash");
        // invalid path is rejected, group unchanged
        assert_eq!(app.group.as_ref().unwrap().elements, ["/a", "/b"]);
        assert!(app.status_message.contains("not a valid path"));

        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "/c");
        press(&mut app, KeyCode::Char('A'));
        type_line(&mut app, "/front");
        let group = app.group.as_ref().unwrap();
        assert_eq!(group.elements, ["/front", "/a", "/b", "/c"]);
        assert_eq!(group.selected, 1);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(
            app.snapshot.get("ENVISTA_TEST_ADD"),
            Some("/front:/a:/b:/c")
        );
    }

    #[test]
    #[cfg(not(windows))]
    fn test_group_may_become_empty() {
        let mut app = app_with(&[("ENVISTA_TEST_EMPTY", "/a:/b")]);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('r'));
        let group = app.group.as_ref().unwrap();
        assert!(group.elements.is_empty());
        assert_eq!(group.selected, 0);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.snapshot.get("ENVISTA_TEST_EMPTY"), Some(""));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_group_edit_in_place_skips_validation() {
        let mut app = app_with(&[("ENVISTA_TEST_EIP", "/a:/b")]);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(
            &app.mode,
            Mode::Prompt { kind: PromptKind::GroupEditInPlace, buffer } if buffer == "/a"
        ));
        for _ in 0..2 {
            press(&mut app, KeyCode::Backspace);
        }
        type_line(&mut app, "anything goes");
        assert_eq!(
            app.group.as_ref().unwrap().elements,
            ["anything goes", "/b"]
        );
    }

    #[test]
    fn test_prompt_escape_cancels() {
        let mut app = app_with(&[("ENVISTA_TEST_ESC", "old")]);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.snapshot.get("ENVISTA_TEST_ESC"), Some("old"));
    }

    #[test]
    fn test_intelligent_edit_undefined_falls_back_to_plain() {
        let mut app = app_with(&[("ENVISTA_TEST_UNDEF", "some words")]);
        press(&mut app, KeyCode::Char('i'));
        assert!(matches!(
            &app.mode,
            Mode::Prompt { kind: PromptKind::PlainEdit, buffer } if buffer == "some words"
        ));
    }
}

//! In-memory snapshot of the process environment.
//!
//! One [`Snapshot`] is captured at session start and is the sole source of
//! truth for everything rendered afterwards. Edits mutate the snapshot
//! through [`Snapshot::set`], and [`Snapshot::apply`] pushes the whole set
//! back across the process boundary. Entry order is the enumeration order at
//! capture time and is significant: navigation, search, and export all index
//! into it.

use rustc_hash::FxHashMap;
use std::env;

use crate::platform;

/// One environment variable. The name is unique within a snapshot.
#[derive(Debug, Clone)]
pub struct VarEntry {
    pub name: String,
    pub value: String,
}

/// Ordered mapping of environment variables for one session.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: Vec<VarEntry>,
    index: FxHashMap<String, usize>,
}

impl Snapshot {
    /// Capture the current process environment. Non-UTF-8 names or values are
    /// converted lossily.
    pub fn capture() -> Self {
        Self::from_pairs(
            env::vars_os().map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            }),
        )
    }

    /// Build a snapshot from explicit pairs, keeping iteration order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut snapshot = Snapshot::default();
        for (name, value) in pairs {
            snapshot.set(name, value);
        }
        snapshot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VarEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&VarEntry> {
        self.entries.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].value.as_str())
    }

    /// Update a variable in place, or append a new entry when the name is not
    /// present yet (the `set` command creates variables).
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].value = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(VarEntry { name, value });
            }
        }
    }

    /// Push every in-memory value back to the real process environment.
    pub fn apply(&self) {
        for entry in &self.entries {
            env::set_var(&entry.name, &entry.value);
        }
    }

    /// Printable single-line representation of a value: control characters
    /// and backslashes are shown escaped, as in the table view.
    pub fn printable(value: &str) -> String {
        value.escape_debug().to_string()
    }

    /// One shell assignment line for a variable.
    ///
    /// The value is inserted in its printable representation, not
    /// shell-escaped. A value containing `"` therefore produces a line the
    /// shell reads differently than we wrote it; this matches the historical
    /// export format and is deliberately left as-is.
    pub fn export_line(name: &str, value: &str) -> String {
        platform::export_line(name, &Self::printable(value))
    }

    /// The whole snapshot as an export script, one line per variable, in
    /// snapshot order. Shared by file save and clipboard copy.
    pub fn export_script(&self) -> String {
        let mut script = String::new();
        for entry in &self.entries {
            script.push_str(&Self::export_line(&entry.name, &entry.value));
            script.push('\n');
        }
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Snapshot {
        Snapshot::from_pairs([
            ("HOME".to_string(), "/home/user".to_string()),
            ("SHELL".to_string(), "/bin/bash".to_string()),
            ("EMPTY".to_string(), String::new()),
        ])
    }

    #[test]
    fn test_capture_order_preserved() {
        let snapshot = fixture();
        let names: Vec<&str> = snapshot.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["HOME", "SHELL", "EMPTY"]);
    }

    #[test]
    fn test_get_and_set_existing() {
        let mut snapshot = fixture();
        assert_eq!(snapshot.get("SHELL"), Some("/bin/bash"));
        snapshot.set("SHELL", "/bin/zsh");
        assert_eq!(snapshot.get("SHELL"), Some("/bin/zsh"));
        // in-place update keeps position and count
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.entry(1).unwrap().name, "SHELL");
    }

    #[test]
    fn test_set_absent_appends() {
        let mut snapshot = fixture();
        snapshot.set("NEW_VAR", "1");
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.entry(3).unwrap().name, "NEW_VAR");
        assert_eq!(snapshot.get("NEW_VAR"), Some("1"));
    }

    #[test]
    fn test_duplicate_pairs_keep_last_value() {
        let snapshot = Snapshot::from_pairs([
            ("A".to_string(), "1".to_string()),
            ("A".to_string(), "2".to_string()),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("A"), Some("2"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_export_line_format() {
        assert_eq!(
            Snapshot::export_line("HOME", "/home/user"),
            "export HOME=\"/home/user\""
        );
        // printable representation, not shell escaping
        assert_eq!(
            Snapshot::export_line("MULTI", "a\nb"),
            "export MULTI=\"a\\nb\""
        );
    }

    #[test]
    #[cfg(not(windows))]
    fn test_export_script_order() {
        let script = fixture().export_script();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(
            lines,
            [
                "export HOME=\"/home/user\"",
                "export SHELL=\"/bin/bash\"",
                "export EMPTY=\"\"",
            ]
        );
    }
}

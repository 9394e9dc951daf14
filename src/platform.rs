//! Platform-specific constants for path lists and export scripts.
//!
//! Mirrors the split the shell world forces on us: POSIX path lists are
//! `:`-joined and exported with `export NAME="VALUE"`, Windows path lists are
//! `;`-joined and exported as PowerShell `${env:NAME}="VALUE"` assignments.

/// Character separating entries in a path-list variable.
#[cfg(not(windows))]
pub const PATH_DELIMITER: char = ':';
#[cfg(windows)]
pub const PATH_DELIMITER: char = ';';

/// Default file name offered by the `save` command.
#[cfg(not(windows))]
pub const DEFAULT_SAVE_FILE: &str = "env.txt";
#[cfg(windows)]
pub const DEFAULT_SAVE_FILE: &str = "env.ps1";

/// Format one variable as a shell assignment line (without trailing newline).
#[cfg(not(windows))]
pub fn export_line(name: &str, printable_value: &str) -> String {
    format!("export {}=\"{}\"", name, printable_value)
}

/// Format one variable as a PowerShell assignment line (without trailing
/// newline).
#[cfg(windows)]
pub fn export_line(name: &str, printable_value: &str) -> String {
    format!("${{env:{}}}=\"{}\"", name, printable_value)
}

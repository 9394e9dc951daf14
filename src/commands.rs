//! Non-interactive command bodies.
//!
//! Everything here is thin glue over [`Snapshot`] and [`pathgroup`]: read,
//! analyze, print. `NotFound` and `NotAPathGroup` bubble up to the caller,
//! which reports them as plain messages rather than failures.

use crossterm::style::Stylize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::classify::{self, VarKind};
use crate::error::EnvError;
use crate::pathgroup;
use crate::platform::DEFAULT_SAVE_FILE;
use crate::snapshot::Snapshot;

/// Shared executables listed per collision before truncating.
const CONFLICT_LIST_LIMIT: usize = 20;

/// Print `NAME = VALUE` for every variable, snapshot order.
pub fn list(snapshot: &Snapshot) {
    for entry in snapshot.entries() {
        println!(
            "{}{}{}",
            entry.name.as_str().green(),
            " = ".red(),
            Snapshot::printable(&entry.value).yellow()
        );
    }
}

/// Update one variable and push it to the process environment.
pub fn set(snapshot: &mut Snapshot, name: &str, value: &str) {
    snapshot.set(name, value);
    snapshot.apply();
}

/// Write the export script, prompting for a file name and for overwrite
/// confirmation. Declining the overwrite leaves the file untouched and is
/// still a success.
pub fn save(snapshot: &Snapshot, file: Option<PathBuf>) -> Result<(), EnvError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    save_with(snapshot, file, &mut input, &mut output)
}

/// `save` with injectable streams for testing.
pub fn save_with<R: BufRead, W: Write>(
    snapshot: &Snapshot,
    file: Option<PathBuf>,
    input: &mut R,
    output: &mut W,
) -> Result<(), EnvError> {
    let path = match file {
        Some(path) => path,
        None => {
            writeln!(output, "Save file name: (Default: {})", DEFAULT_SAVE_FILE)?;
            let line = read_line(input)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                PathBuf::from(DEFAULT_SAVE_FILE)
            } else {
                PathBuf::from(trimmed)
            }
        }
    };

    if path.exists() {
        writeln!(output, "File already exists. Overwrite? ([y]/n)")?;
        let answer = read_line(input)?;
        if answer.trim().eq_ignore_ascii_case("n") {
            return Ok(());
        }
    }

    fs::write(&path, snapshot.export_script())?;
    writeln!(output, "Saved {} variables to {}", snapshot.len(), path.display())?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Push the export script to the system clipboard in one write.
pub fn clip(snapshot: &Snapshot) -> Result<(), EnvError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| EnvError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(snapshot.export_script())
        .map_err(|e| EnvError::Clipboard(e.to_string()))?;
    println!("Copied {} variables to the clipboard", snapshot.len());
    Ok(())
}

/// Look up `name` and insist its value is a path group.
fn path_group_value<'a>(snapshot: &'a Snapshot, name: &str) -> Result<&'a str, EnvError> {
    let value = snapshot.get(name).ok_or_else(|| EnvError::NotFound {
        name: name.to_string(),
    })?;
    if classify::classify(value) != VarKind::PathGroup {
        return Err(EnvError::NotAPathGroup {
            name: name.to_string(),
        });
    }
    Ok(value)
}

/// Report every executable-name collision across the entries of a path-group
/// variable, earliest entry winning.
pub fn conflict(snapshot: &Snapshot, name: &str) -> Result<(), EnvError> {
    let value = path_group_value(snapshot, name)?;
    let collisions = pathgroup::find_conflicts(value);
    if collisions.is_empty() {
        println!("No conflicts found in {}", name);
        return Ok(());
    }
    for collision in &collisions {
        println!(
            "Conflict found between {} and {}. Executables in {} are used first.",
            collision.first_dir.as_str().blue(),
            collision.second_dir.as_str().blue(),
            collision.first_dir.as_str().blue(),
        );
        println!("The following executables are in both:");
        let shown = collision.shared.len().min(CONFLICT_LIST_LIMIT);
        let names: Vec<String> = collision.shared[..shown]
            .iter()
            .map(|n| n.as_str().red().to_string())
            .collect();
        let suffix = if collision.shared.len() > shown {
            " ..."
        } else {
            ""
        };
        println!("{}{}", names.join(", "), suffix);
    }
    Ok(())
}

/// Rewrite a path-group variable with duplicate entries removed,
/// first-occurrence order preserved.
pub fn dedup(snapshot: &mut Snapshot, name: &str) -> Result<(), EnvError> {
    let value = path_group_value(snapshot, name)?;
    let before = pathgroup::split(value).len();
    let deduplicated = pathgroup::deduplicate(value);
    let after = pathgroup::split(&deduplicated).len();
    snapshot.set(name, deduplicated);
    snapshot.apply();
    println!("{}: removed {} duplicate entries", name, before - after);
    Ok(())
}

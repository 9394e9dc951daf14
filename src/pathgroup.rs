//! Path-group analysis: splitting, deduplication, and executable-collision
//! detection across the entries of a search-path variable.

use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

use crate::platform::PATH_DELIMITER;

/// Split a path-group value on the platform delimiter.
pub fn split(value: &str) -> Vec<String> {
    value.split(PATH_DELIMITER).map(str::to_string).collect()
}

/// Join elements back into a single path-group value.
pub fn join(elements: &[String]) -> String {
    let delimiter = PATH_DELIMITER.to_string();
    elements.join(delimiter.as_str())
}

/// Remove duplicate entries, keeping the first occurrence of each and the
/// relative order of survivors.
pub fn deduplicate(value: &str) -> String {
    let mut seen = FxHashSet::default();
    let kept: Vec<String> = split(value)
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect();
    join(&kept)
}

/// Names of executable files directly inside `dir`.
///
/// A missing or unreadable directory yields an empty list; entries that fail
/// to stat are skipped. On Unix a file is executable when any execute bit is
/// set; on Windows every plain file counts.
pub fn find_executables(dir: &str) -> Vec<String> {
    let mut names = Vec::new();
    let entries = match fs::read_dir(Path::new(dir)) {
        Ok(entries) => entries,
        Err(_) => return names,
    };
    for entry in entries.flatten() {
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(_) => continue,
        };
        if meta.is_file() && is_executable(&meta) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}

/// Two path-group entries shipping executables with the same name.
///
/// `first_dir` comes earlier in the group and therefore wins lookup; the
/// executables in `shared` shadow their `second_dir` counterparts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub first_dir: String,
    pub second_dir: String,
    pub shared: Vec<String>,
}

/// Scan every ordered pair of entries in a path-group value for executables
/// present in both. Shared names are sorted for stable reporting.
pub fn find_conflicts(value: &str) -> Vec<Collision> {
    let dirs = split(value);
    let exe_sets: Vec<FxHashSet<String>> = dirs
        .iter()
        .map(|d| find_executables(d).into_iter().collect())
        .collect();

    let mut collisions = Vec::new();
    for i in 0..dirs.len() {
        for j in i + 1..dirs.len() {
            let mut shared: Vec<String> = exe_sets[i]
                .intersection(&exe_sets[j])
                .cloned()
                .collect();
            if shared.is_empty() {
                continue;
            }
            shared.sort();
            collisions.push(Collision {
                first_dir: dirs[i].clone(),
                second_dir: dirs[j].clone(),
                shared,
            });
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(windows))]
    fn test_split_join_round_trip() {
        let value = "/usr/bin:/usr/local/bin:/opt/bin";
        assert_eq!(join(&split(value)), value);
    }

    #[test]
    #[cfg(not(windows))]
    fn test_deduplicate_keeps_first_occurrence() {
        assert_eq!(deduplicate("/a:/b:/a:/c:/b"), "/a:/b:/c");
        assert_eq!(deduplicate("/a:/a:/a"), "/a");
        assert_eq!(deduplicate("/a:/b"), "/a:/b");
    }

    #[test]
    fn test_find_executables_missing_dir() {
        assert!(find_executables("/nonexistent/definitely/missing").is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_find_conflicts_reports_shared_names() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let dir_a = root.path().join("a");
        let dir_b = root.path().join("b");
        fs::create_dir(&dir_a).unwrap();
        fs::create_dir(&dir_b).unwrap();

        for dir in [&dir_a, &dir_b] {
            let exe = dir.join("tool");
            fs::write(&exe, b"#!/bin/sh\n").unwrap();
            let mut perms = fs::metadata(&exe).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&exe, perms).unwrap();
        }
        // non-executable files never collide
        fs::write(dir_a.join("readme"), b"x").unwrap();
        fs::write(dir_b.join("readme"), b"x").unwrap();

        let group = format!("{}:{}", dir_a.display(), dir_b.display());
        let collisions = find_conflicts(&group);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].first_dir, dir_a.display().to_string());
        assert_eq!(collisions[0].second_dir, dir_b.display().to_string());
        assert_eq!(collisions[0].shared, ["tool"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_find_conflicts_none_for_disjoint_dirs() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let dir_a = root.path().join("a");
        let dir_b = root.path().join("b");
        fs::create_dir(&dir_a).unwrap();
        fs::create_dir(&dir_b).unwrap();

        let exe = dir_a.join("only_here");
        fs::write(&exe, b"#!/bin/sh\n").unwrap();
        let mut perms = fs::metadata(&exe).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&exe, perms).unwrap();

        let group = format!("{}:{}", dir_a.display(), dir_b.display());
        assert!(find_conflicts(&group).is_empty());
    }
}

//! Value classification for type-aware editing.
//!
//! Every time the user enters an edit, the current value is classified fresh
//! into a [`VarKind`]; the kind selects which specialized editor runs. The
//! checks are purely syntactic: a path is never stat'ed and an address is
//! never resolved.
//!
//! Priority order matters: a path group is checked before a single path,
//! because a delimited list would otherwise be misread as one long path, while
//! a delimiter-free path must never be promoted to a group.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::platform::PATH_DELIMITER;

/// Semantic kind inferred from a variable's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Undefined,
    Ipv4,
    Ipv6,
    Path,
    PathGroup,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VarKind::Undefined => "undefined",
            VarKind::Ipv4 => "IPv4",
            VarKind::Ipv6 => "IPv6",
            VarKind::Path => "path",
            VarKind::PathGroup => "path group",
        };
        write!(f, "{}", name)
    }
}

/// True iff `s` is exactly four dot-separated octets in `[0, 255]`.
pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// True iff `s` is a colon-hex IPv6 literal.
pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Strip a leading `$NAME` or `${NAME}` reference, returning the remainder.
#[cfg(not(windows))]
fn strip_var_ref(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('$')?;
    if let Some(inner) = rest.strip_prefix('{') {
        let end = inner.find('}')?;
        if is_ident(&inner[..end]) {
            return Some(&inner[end + 1..]);
        }
        return None;
    }
    let len = ident_len(rest);
    if len == 0 {
        return None;
    }
    Some(&rest[len..])
}

#[cfg(not(windows))]
fn is_ident(s: &str) -> bool {
    !s.is_empty() && ident_len(s) == s.len()
}

/// Length of the leading `[A-Za-z_][A-Za-z0-9_]*` run.
#[cfg(not(windows))]
fn ident_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return 0,
    }
    for (i, c) in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return i;
        }
    }
    s.len()
}

/// True iff `s` matches the platform path grammar.
///
/// POSIX: rooted at `/`, or at a `$NAME`/`${NAME}` reference followed by
/// nothing or a `/`-separated remainder. Syntactic only.
#[cfg(not(windows))]
pub fn is_path(s: &str) -> bool {
    if s.starts_with('/') {
        return true;
    }
    match strip_var_ref(s) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// True iff `s` matches the platform path grammar: drive-letter rooted
/// (`X:...`). Syntactic only.
#[cfg(windows)]
pub fn is_path(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(d), Some(':')) if d.is_ascii_uppercase()
    )
}

/// True iff `s` is a delimiter-separated list of valid paths.
///
/// A single trailing delimiter is tolerated (some Windows shells leave one on
/// `Path`). A string without any delimiter is never a group, even when it is
/// a valid path on its own.
pub fn is_path_group(s: &str) -> bool {
    if !s.contains(PATH_DELIMITER) {
        return false;
    }
    let trimmed = match s.strip_suffix(PATH_DELIMITER) {
        Some(t) => t,
        None => s,
    };
    !trimmed.is_empty() && trimmed.split(PATH_DELIMITER).all(is_path)
}

/// Classify a value, in fixed priority order.
pub fn classify(s: &str) -> VarKind {
    if is_ipv4(s) {
        VarKind::Ipv4
    } else if is_ipv6(s) {
        VarKind::Ipv6
    } else if is_path_group(s) {
        VarKind::PathGroup
    } else if is_path(s) {
        VarKind::Path
    } else {
        VarKind::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4() {
        assert!(is_ipv4("192.168.1.1"));
        assert!(is_ipv4("0.0.0.0"));
        assert!(!is_ipv4("192.168.1.999"));
        assert!(!is_ipv4("192.168.1"));
        assert!(!is_ipv4("192.168.1.1 "));
        assert!(!is_ipv4(""));
    }

    #[test]
    fn test_ipv6() {
        assert!(is_ipv6("::1"));
        assert!(is_ipv6("fe80::1"));
        assert!(is_ipv6("2001:db8::8a2e:370:7334"));
        assert!(!is_ipv6("192.168.1.1"));
        assert!(!is_ipv6("not an address"));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_path() {
        assert!(is_path("/usr/bin"));
        assert!(is_path("/"));
        assert!(is_path("$HOME"));
        assert!(is_path("$HOME/bin"));
        assert!(is_path("${JAVA_HOME}/bin"));
        assert!(!is_path("usr/bin"));
        assert!(!is_path("$1BAD"));
        assert!(!is_path("${}/bin"));
        assert!(!is_path(""));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_path_group() {
        assert!(is_path_group("/usr/bin:/usr/local/bin"));
        assert!(is_path_group("/usr/bin:$HOME/bin"));
        // trailing delimiter is tolerated once
        assert!(is_path_group("/usr/bin:/usr/local/bin:"));
        // no delimiter is never a group
        assert!(!is_path_group("/usr/bin"));
        assert!(!is_path_group("/usr/bin:not a path"));
        assert!(!is_path_group(":"));
        assert!(!is_path_group(""));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_classify_priority() {
        assert_eq!(classify("192.168.1.1"), VarKind::Ipv4);
        assert_eq!(classify("::1"), VarKind::Ipv6);
        assert_eq!(classify("/usr/bin:/usr/local/bin"), VarKind::PathGroup);
        assert_eq!(classify("/usr/bin"), VarKind::Path);
        assert_eq!(classify("hello world"), VarKind::Undefined);
        assert_eq!(classify(""), VarKind::Undefined);
    }
}

//! Locating and listing managed blocks.
//!
//! Lookups match marker text by first occurrence anywhere in the content;
//! listings scan line by line.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::marker::{BEGIN_PREFIX, begin_marker, end_marker};

/// A managed block as seen by [`parse_managed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedExport {
    pub identifier: String,
    /// The single line following the begin marker.
    pub payload: String,
}

/// Identifier to payload mapping in document order.
///
/// A repeated identifier keeps the position of its first block and the payload
/// of its last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedExports {
    entries: Vec<ManagedExport>,
}

impl ManagedExports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `payload` for `identifier`, replacing any earlier payload.
    pub fn insert(&mut self, identifier: String, payload: String) {
        match self.entries.iter_mut().find(|e| e.identifier == identifier) {
            Some(existing) => existing.payload = payload,
            None => self.entries.push(ManagedExport {
                identifier,
                payload,
            }),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.identifier == identifier)
            .map(|e| e.payload.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManagedExport> {
        self.entries.iter()
    }

    /// Identifiers in document order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.identifier.as_str())
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .map(|e| (e.identifier, e.payload))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ManagedExports {
    type Item = &'a ManagedExport;
    type IntoIter = std::slice::Iter<'a, ManagedExport>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ManagedExports {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.identifier, &entry.payload)?;
        }
        map.end()
    }
}

pub(crate) fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// Checks whether a block for `identifier` was already added.
///
/// Matches the begin marker as a complete line, so `my-id` is not mistaken
/// for `my-id2`.
pub fn contains_block(content: &[u8], identifier: &str) -> bool {
    let marker = format!("{}\n", begin_marker(identifier));
    find_bytes(content, marker.as_bytes(), 0).is_some()
}

/// Byte range of the block for `identifier`, end marker newline included.
///
/// Uses the first begin marker and the first end marker line after it.
pub fn find_block(content: &[u8], identifier: &str) -> Option<Range<usize>> {
    let begin = begin_marker(identifier);
    let end = format!("{}\n", end_marker(identifier));

    let start = find_bytes(content, begin.as_bytes(), 0)?;
    let end_pos = find_bytes(content, end.as_bytes(), start + begin.len())?;

    Some(start..end_pos + end.len())
}

/// Checks that both markers for `identifier` are present.
///
/// Each marker is looked up independently by first occurrence; their order
/// and the content between them are not checked.
pub fn has_block(content: &[u8], identifier: &str) -> bool {
    let begin = begin_marker(identifier);
    let end = format!("{}\n", end_marker(identifier));

    find_bytes(content, begin.as_bytes(), 0).is_some()
        && find_bytes(content, end.as_bytes(), 0).is_some()
}

/// Split into lines the way a line scanner does: `\n` separated, a trailing
/// `\r` dropped, no empty token after a final newline.
fn scan_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = if content.is_empty() {
        None
    } else {
        Some(content.strip_suffix(b"\n").unwrap_or(content))
    };

    body.into_iter()
        .flat_map(|body| body.split(|b| *b == b'\n'))
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Lists every managed block with its single payload line.
///
/// A line containing `# BEGIN:` names a block, and the line right after it is
/// taken as the payload whatever it holds. Multi-line payloads therefore list
/// only their first line. A begin marker on the last line is skipped.
pub fn parse_managed(content: &[u8]) -> ManagedExports {
    let mut exports = ManagedExports::new();
    let mut lines = scan_lines(content);

    while let Some(line) = lines.next() {
        let Some(pos) = find_bytes(line, BEGIN_PREFIX.as_bytes(), 0) else {
            continue;
        };
        let Some(payload) = lines.next() else {
            break;
        };

        let rest = &line[pos + BEGIN_PREFIX.len()..];
        let identifier = rest.strip_prefix(b" ").unwrap_or(rest);

        exports.insert(
            String::from_utf8_lossy(identifier).into_owned(),
            String::from_utf8_lossy(payload).into_owned(),
        );
    }

    exports
}

/// Lists every line that is neither empty nor contains a `#`.
///
/// Managed payload lines are included alongside unmanaged entries.
pub fn parse_all(content: &[u8]) -> Vec<String> {
    scan_lines(content)
        .filter(|line| !line.is_empty() && !line.contains(&b'#'))
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bytes() {
        assert_eq!(find_bytes(b"abcabc", b"bc", 0), Some(1));
        assert_eq!(find_bytes(b"abcabc", b"bc", 2), Some(4));
        assert_eq!(find_bytes(b"abc", b"x", 0), None);
        assert_eq!(find_bytes(b"abc", b"bc", 4), None);
    }

    #[test]
    fn test_scan_lines_trailing_newline() {
        let lines: Vec<&[u8]> = scan_lines(b"a\nb\n").collect();
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_scan_lines_without_trailing_newline() {
        let lines: Vec<&[u8]> = scan_lines(b"a\r\nb").collect();
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_scan_lines_empty() {
        assert_eq!(scan_lines(b"").count(), 0);
        assert_eq!(scan_lines(b"\n").count(), 1);
    }

    #[test]
    fn test_contains_block_requires_full_line() {
        let content = b"# BEGIN: my-id2\nx\n# END: my-id2\n";
        assert!(contains_block(content, "my-id2"));
        assert!(!contains_block(content, "my-id"));
    }

    #[test]
    fn test_find_block_range() {
        let content = b"a\n# BEGIN: x\npayload\n# END: x\nb\n";
        let range = find_block(content, "x").unwrap();
        assert_eq!(&content[range], b"# BEGIN: x\npayload\n# END: x\n");
    }

    #[test]
    fn test_find_block_needs_end_marker_after_begin() {
        let content = b"# END: x\n# BEGIN: x\npayload\n";
        assert!(find_block(content, "x").is_none());
    }

    #[test]
    fn test_has_block_ignores_marker_order() {
        let content = b"# END: x\n# BEGIN: x\npayload\n";
        assert!(has_block(content, "x"));
    }
}

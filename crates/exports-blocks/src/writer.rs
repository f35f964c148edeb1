//! Adding and removing managed blocks.

use crate::error::{Error, Result};
use crate::marker::format_block;
use crate::parser::{contains_block, find_block};

/// Appends a block for `identifier` to the end of `content`.
///
/// Returns `None` when a block for `identifier` is already present, so
/// repeated calls never duplicate a block. Non-empty content lacking a final
/// newline gets one before the block.
///
/// # Example
/// ```
/// use exports_blocks::writer::append_block;
///
/// let result = append_block(b"/Users 10.0.0.1", "my-id", "/Users 10.0.0.2").unwrap();
/// assert_eq!(
///     result,
///     b"/Users 10.0.0.1\n# BEGIN: my-id\n/Users 10.0.0.2\n# END: my-id\n".to_vec()
/// );
/// assert!(append_block(&result, "my-id", "/Users 10.0.0.2").is_none());
/// ```
pub fn append_block(content: &[u8], identifier: &str, payload: &str) -> Option<Vec<u8>> {
    if contains_block(content, identifier) {
        return None;
    }

    let block = format_block(identifier, payload);
    let mut result = Vec::with_capacity(content.len() + block.len() + 1);
    result.extend_from_slice(content);
    if !result.is_empty() && !result.ends_with(b"\n") {
        result.push(b'\n');
    }
    result.extend_from_slice(block.as_bytes());

    Some(result)
}

/// Removes the block for `identifier`, markers included.
///
/// Whitespace around the remaining content is trimmed and exactly one
/// trailing newline is added, so removing the only block leaves `"\n"`.
///
/// # Errors
/// Returns `Error::BlockNotFound` if either marker is missing.
pub fn remove_block(content: &[u8], identifier: &str) -> Result<Vec<u8>> {
    let range = find_block(content, identifier).ok_or_else(|| Error::BlockNotFound {
        identifier: identifier.to_string(),
    })?;

    let mut spliced = Vec::with_capacity(content.len() - range.len());
    spliced.extend_from_slice(&content[..range.start]);
    spliced.extend_from_slice(&content[range.end..]);

    let mut result = trim_space(&spliced).to_vec();
    result.push(b'\n');
    Ok(result)
}

/// ASCII whitespace plus vertical tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0B'
}

fn trim_space(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| !is_space(*b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_space(*b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_empty() {
        let result = append_block(b"", "abc", "content").unwrap();
        assert_eq!(result, b"# BEGIN: abc\ncontent\n# END: abc\n".to_vec());
    }

    #[test]
    fn test_append_keeps_existing_newline() {
        let result = append_block(b"line\n", "abc", "content").unwrap();
        assert_eq!(result, b"line\n# BEGIN: abc\ncontent\n# END: abc\n".to_vec());
    }

    #[test]
    fn test_append_existing_is_none() {
        let content = b"# BEGIN: abc\ncontent\n# END: abc\n";
        assert!(append_block(content, "abc", "other").is_none());
    }

    #[test]
    fn test_remove_only_block_leaves_single_newline() {
        let content = b"# BEGIN: abc\ncontent\n# END: abc\n";
        assert_eq!(remove_block(content, "abc").unwrap(), b"\n".to_vec());
    }

    #[test]
    fn test_trim_space_includes_vertical_tab() {
        assert_eq!(trim_space(b"\x0B\t /a host \x0B\r\n"), b"/a host");
        assert_eq!(trim_space(b" \x0B\n"), b"");
    }

    #[test]
    fn test_remove_missing_fails() {
        let result = remove_block(b"no blocks here\n", "abc");
        assert!(matches!(result, Err(Error::BlockNotFound { .. })));
    }
}

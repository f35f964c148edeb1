//! Marker line formatting.
//!
//! The on-disk layout must stay byte-for-byte stable: files written by older
//! tooling are read back by the parser.

/// Text every begin marker line contains.
pub const BEGIN_PREFIX: &str = "# BEGIN:";

/// Text every end marker line contains.
pub const END_PREFIX: &str = "# END:";

/// The begin marker line for `identifier`, without its newline.
pub fn begin_marker(identifier: &str) -> String {
    format!("{} {}", BEGIN_PREFIX, identifier)
}

/// The end marker line for `identifier`, without its newline.
pub fn end_marker(identifier: &str) -> String {
    format!("{} {}", END_PREFIX, identifier)
}

/// A complete block: begin marker, payload, end marker, each newline-terminated.
///
/// The payload is inserted as-is and may span several lines.
pub fn format_block(identifier: &str, payload: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        begin_marker(identifier),
        payload,
        end_marker(identifier)
    )
}

//! Well-known locations and modes for the exports file.

/// Canonical system exports file, used when the caller passes an empty path.
pub const DEFAULT_EXPORTS_FILE: &str = "/etc/exports";

/// Permission mode applied to every exports file this crate writes.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

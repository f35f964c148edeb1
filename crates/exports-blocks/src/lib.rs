//! Managed marker blocks inside NFS exports files.
//!
//! A managed block is a region delimited by marker comment lines:
//!
//! ```text
//! # BEGIN: <identifier>
//! <payload>
//! # END: <identifier>
//! ```
//!
//! Everything outside the markers is unmanaged text and is carried through
//! untouched. All functions here work on raw bytes and never touch the
//! filesystem; the caller owns reading and writing.
//!
//! Identifiers are embedded verbatim. An identifier that itself contains
//! marker syntax or a newline produces blocks this crate cannot reliably find
//! again.

pub mod error;
pub mod marker;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use marker::{begin_marker, end_marker, format_block};
pub use parser::{
    ManagedExport, ManagedExports, contains_block, find_block, has_block, parse_all,
    parse_managed,
};
pub use writer::{append_block, remove_block};

//! Shared test utilities for the nfs-exports workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`fixture`] — [`ExportsFixture`], a temporary exports file
//! - [`doubles`] — validator and reloader stand-ins that never spawn nfsd

pub mod doubles;
pub mod fixture;

pub use doubles::{AcceptAll, CountingReloader, FailingReloader, RecordingValidator, RejectAll};
pub use fixture::ExportsFixture;

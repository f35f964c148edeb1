//! nfsd integration for NFS exports files
//!
//! The NFS daemon is reached through two small traits so the block logic can
//! be exercised without spawning processes:
//!
//! - [`Validator`] checks a complete candidate exports file before it is
//!   written. [`NfsdValidator`] stages the candidate in a temporary file and
//!   runs `nfsd -F <file> checkexports`.
//! - [`Reloader`] asks the daemon to pick up the current file.
//!   [`NfsdReloader`] runs `sudo nfsd update`.
//!
//! Both invocations are synchronous, single attempt, and carry no timeout.

pub mod config;
pub mod error;
pub mod reload;
pub mod subprocess;
pub mod validator;

pub use config::NfsdConfig;
pub use error::{Error, Result};
pub use reload::{NfsdReloader, Reloader};
pub use validator::{NfsdValidator, Validator};

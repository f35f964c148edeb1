//! Command implementations for exports-cli

pub mod daemon;
pub mod edit;
pub mod list;

pub use daemon::{run_check, run_reload};
pub use edit::{run_add, run_remove};
pub use list::{run_exists, run_list, run_list_all};

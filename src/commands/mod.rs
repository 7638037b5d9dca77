//! CLI commands for sync-version
//!
//! - **sync**: stage and write the new version into every artifact

pub mod sync;

pub use sync::run_sync;

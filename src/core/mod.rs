//! Core building blocks for a version sync
//!
//! - **config**: artifact layout resolved against an explicit repository root
//! - **error**: error taxonomy with exit codes and help messages
//! - **plan**: staged in-memory edits and their ordered commit

pub mod config;
pub mod error;
pub mod plan;

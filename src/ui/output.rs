//! User-facing status lines
//!
//! Confirmation lines go to stdout so a release pipeline can capture them;
//! warnings go to stderr.

use crate::core::config::Artifact;
use std::path::Path;

/// Printed when the argument count is wrong
pub const USAGE: &str = "Usage: sync-version <version>";

pub fn print_usage() {
  println!("{}", USAGE);
}

/// Confirmation line for an artifact that was written
pub fn updated_line(artifact: Artifact, version: &str) -> String {
  format!("✓ Updated {} to version {}", artifact, version)
}

pub fn print_updated(artifact: Artifact, version: &str) {
  println!("{}", updated_line(artifact, version));
}

/// The specification had nothing to rewrite
pub fn warn_no_version_label(path: &Path) {
  eprintln!("⚠️  No **Version:** label found in {}", path.display());
}

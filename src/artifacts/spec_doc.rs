//! Version label substitution in the instrument specification
//!
//! The document carries a bold label such as ``**Version:** `1.2.3` ``.
//! Every label is rewritten; all other bytes are left alone.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static VERSION_LABEL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\*\*Version:\*\*\s*`[^`]+`").expect("version label pattern is valid"));

/// Result of rewriting the specification text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocEdit {
  pub content: String,
  /// Number of labels that were rewritten
  pub replacements: usize,
}

/// Replace every version label with `version`
pub fn set_version_label(content: &str, version: &str) -> SpecDocEdit {
  let label = format!("**Version:** `{}`", version);
  let replacements = VERSION_LABEL.find_iter(content).count();
  let content = VERSION_LABEL.replace_all(content, NoExpand(&label)).into_owned();
  SpecDocEdit { content, replacements }
}

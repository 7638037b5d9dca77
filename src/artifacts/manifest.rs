//! `pyproject.toml` editing
//!
//! Uses `toml_edit` so only the `project.version` value changes. Comments,
//! key order, and the whitespace around the replaced value survive.

use crate::core::error::{DocumentError, SyncResult};
use std::path::Path;
use toml_edit::{DocumentMut, Item, Value};

/// Set `project.version` in a manifest and return the new text
///
/// A missing `[project]` table or `version` key is created. `path` is only
/// used for error messages.
pub fn set_project_version(path: &Path, content: &str, version: &str) -> SyncResult<String> {
  let mut doc: DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| DocumentError::InvalidToml {
    path: path.to_path_buf(),
    message: e.to_string(),
  })?;

  let project = doc.entry("project").or_insert(toml_edit::table());
  if let Some(table) = project.as_table_mut() {
    // [project.urls] alone leaves [project] implicit; it needs a header once it holds a key
    table.set_implicit(false);
  }
  let project = project
    .as_table_like_mut()
    .ok_or_else(|| DocumentError::ProjectNotATable {
      path: path.to_path_buf(),
    })?;

  match project.get_mut("version") {
    Some(Item::Value(existing)) => {
      let decor = existing.decor().clone();
      *existing = Value::from(version);
      *existing.decor_mut() = decor;
    }
    _ => {
      project.insert("version", toml_edit::value(version));
    }
  }

  Ok(doc.to_string())
}

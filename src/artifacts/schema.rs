//! AOS schema editing
//!
//! The schema is loaded as a generic `serde_json::Value` with key order and
//! number text preserved, then written back with 4-space indentation.

use crate::core::error::{DocumentError, SyncResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Set the top-level `version` field and return the re-serialized schema
///
/// An existing `version` key keeps its position; a missing one is appended.
/// The output ends with a newline only if the input did.
pub fn set_schema_version(path: &Path, content: &str, version: &str) -> SyncResult<String> {
  let mut schema: Value = serde_json::from_str(content).map_err(|e| DocumentError::InvalidJson {
    path: path.to_path_buf(),
    message: e.to_string(),
  })?;

  let root: &mut Map<String, Value> = schema
    .as_object_mut()
    .ok_or_else(|| DocumentError::SchemaNotAnObject {
      path: path.to_path_buf(),
    })?;
  root.insert("version".to_string(), Value::String(version.to_string()));

  let mut out = to_string_indented(&schema).map_err(|message| DocumentError::Unserializable {
    path: path.to_path_buf(),
    message,
  })?;
  if content.ends_with('\n') {
    out.push('\n');
  }
  Ok(out)
}

fn to_string_indented(value: &Value) -> Result<String, String> {
  let mut buf = Vec::new();
  let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  value.serialize(&mut ser).map_err(|e| e.to_string())?;
  String::from_utf8(buf).map_err(|e| e.to_string())
}

//! Integration tests for a full version sync

use crate::helpers::{MANIFEST, SCHEMA, SPEC_DOC, TestRepo, run_sync_version, sync_version_raw};
use anyhow::Result;

#[test]
fn test_sync_updates_every_artifact() -> Result<()> {
  let repo = TestRepo::new()?;
  let manifest_before = repo.read_file(MANIFEST)?;
  let spec_before = repo.read_file(SPEC_DOC)?;
  let schema_before = repo.read_file(SCHEMA)?;

  let output = run_sync_version(&repo.path, &["0.2.0"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert_eq!(
    stdout.lines().collect::<Vec<_>>(),
    [
      "✓ Updated pyproject.toml to version 0.2.0",
      "✓ Updated specification.md to version 0.2.0",
      "✓ Updated aos_schema.json to version 0.2.0",
    ]
  );

  // Only the version value changes; comments and layout survive
  assert_eq!(
    repo.read_file(MANIFEST)?,
    manifest_before.replace("version = \"0.1.0\"", "version = \"0.2.0\"")
  );
  assert_eq!(
    repo.read_file(SPEC_DOC)?,
    spec_before.replace("**Version:** `0.1.0`", "**Version:** `0.2.0`")
  );
  assert_eq!(
    repo.read_file(SCHEMA)?,
    schema_before.replace("\"version\": \"0.1.0\"", "\"version\": \"0.2.0\"")
  );

  Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
  let repo = TestRepo::new()?;

  run_sync_version(&repo.path, &["1.0.0-rc.1"])?;
  let once = repo.snapshot();
  run_sync_version(&repo.path, &["1.0.0-rc.1"])?;

  assert_eq!(repo.snapshot(), once);
  Ok(())
}

#[test]
fn test_compact_schema_is_reindented() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file(SCHEMA, r#"{"version": "0.1.0", "title": "AOS"}"#)?;

  run_sync_version(&repo.path, &["0.2.0"])?;

  assert_eq!(
    repo.read_file(SCHEMA)?,
    "{\n    \"version\": \"0.2.0\",\n    \"title\": \"AOS\"\n}"
  );
  Ok(())
}

#[test]
fn test_spec_without_label_is_left_unchanged() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file(SPEC_DOC, "# Instrument\n\nNo version header yet.\n")?;

  let output = run_sync_version(&repo.path, &["0.2.0"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(repo.read_file(SPEC_DOC)?, "# Instrument\n\nNo version header yet.\n");
  assert!(stderr.contains("No **Version:** label"));
  assert!(repo.read_file(MANIFEST)?.contains("version = \"0.2.0\""));
  Ok(())
}

#[test]
fn test_malformed_schema_touches_nothing() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file(SCHEMA, "{\"version\": \"0.1.0\",")?;
  let before = repo.snapshot();

  let output = sync_version_raw(&repo.path, &["0.2.0"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("aos_schema.json"));
  assert_eq!(repo.snapshot(), before);
  Ok(())
}

#[test]
fn test_malformed_manifest_fails() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.write_file(MANIFEST, "[project\nversion = \"0.1.0\"\n")?;
  let before = repo.snapshot();

  let output = sync_version_raw(&repo.path, &["0.2.0"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("pyproject.toml"));
  assert_eq!(repo.snapshot(), before);
  Ok(())
}

#[test]
fn test_missing_artifact_fails() -> Result<()> {
  let repo = TestRepo::empty()?;
  repo.write_file(MANIFEST, "[project]\nversion = \"0.1.0\"\n")?;

  let output = sync_version_raw(&repo.path, &["0.2.0"])?;

  assert_eq!(output.status.code(), Some(2));
  assert!(String::from_utf8_lossy(&output.stderr).contains("specification.md"));
  assert_eq!(repo.read_file(MANIFEST)?, "[project]\nversion = \"0.1.0\"\n");
  Ok(())
}

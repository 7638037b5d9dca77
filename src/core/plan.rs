//! Staged edits for a version sync
//!
//! All three artifacts are read, parsed, and rewritten in memory before
//! anything touches the disk:
//!
//! ```text
//! SyncPlan::stage  (read + parse + mutate, no writes)
//!   ↓
//! SyncPlan::commit (write in order, one callback per file)
//! ```
//!
//! A malformed schema therefore leaves the manifest untouched. Writes are not
//! transactional: if the second write fails, the first one stays on disk.

use crate::artifacts::{manifest, schema, spec_doc};
use crate::core::config::{Artifact, SyncLayout};
use crate::core::error::{SyncError, SyncResult};
use std::fs;
use std::path::{Path, PathBuf};

/// New contents for one artifact
#[derive(Debug, Clone)]
pub struct StagedEdit {
  pub artifact: Artifact,
  pub path: PathBuf,
  pub original: String,
  pub updated: String,
}

impl StagedEdit {
  /// True when writing would not change the file
  #[allow(dead_code)]
  pub fn is_noop(&self) -> bool {
    self.original == self.updated
  }
}

/// The full set of edits for one version
#[derive(Debug, Clone)]
pub struct SyncPlan {
  version: String,
  edits: Vec<StagedEdit>,
  spec_labels: usize,
}

impl SyncPlan {
  /// Read every artifact under `layout` and compute its new contents
  pub fn stage(layout: &SyncLayout, version: &str) -> SyncResult<Self> {
    let mut edits = Vec::with_capacity(Artifact::ALL.len());
    let mut spec_labels = 0;

    for artifact in Artifact::ALL {
      let path = layout.path_of(artifact);
      let original = read(&path)?;
      let updated = match artifact {
        Artifact::Manifest => manifest::set_project_version(&path, &original, version)?,
        Artifact::SpecDoc => {
          let edit = spec_doc::set_version_label(&original, version);
          spec_labels = edit.replacements;
          edit.content
        }
        Artifact::Schema => schema::set_schema_version(&path, &original, version)?,
      };
      edits.push(StagedEdit {
        artifact,
        path,
        original,
        updated,
      });
    }

    Ok(Self {
      version: version.to_string(),
      edits,
      spec_labels,
    })
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  #[allow(dead_code)]
  pub fn edits(&self) -> &[StagedEdit] {
    &self.edits
  }

  /// Number of `**Version:**` labels found in the specification
  pub fn spec_labels(&self) -> usize {
    self.spec_labels
  }

  /// Write every staged edit in order, calling `on_written` after each file
  ///
  /// Files are rewritten even when their contents did not change.
  pub fn commit(&self, mut on_written: impl FnMut(&StagedEdit)) -> SyncResult<()> {
    for edit in &self.edits {
      fs::write(&edit.path, &edit.updated).map_err(|e| SyncError::io(&edit.path, e))?;
      on_written(edit);
    }
    Ok(())
  }
}

fn read(path: &Path) -> SyncResult<String> {
  fs::read_to_string(path).map_err(|e| SyncError::io(path, e))
}

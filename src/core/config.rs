//! Artifact layout for a release checkout
//!
//! The three artifacts live at fixed paths relative to the repository root.
//! The root is always passed in explicitly so nothing below `main` depends on
//! the process working directory.

use std::fmt;
use std::path::{Path, PathBuf};

/// Package manifest, relative to the root
pub const MANIFEST_PATH: &str = "pyproject.toml";

/// Instrument specification document, relative to the root
pub const SPEC_DOC_PATH: &str = "docs/spec/instrument/specification.md";

/// AOS schema, relative to the root
pub const SCHEMA_PATH: &str = "specification/AOS/aos_schema.json";

/// One of the files whose version is kept in sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
  Manifest,
  SpecDoc,
  Schema,
}

impl Artifact {
  /// All artifacts, in the order they are updated
  pub const ALL: [Artifact; 3] = [Artifact::Manifest, Artifact::SpecDoc, Artifact::Schema];

  /// Path relative to the repository root
  pub fn relative_path(self) -> &'static Path {
    match self {
      Artifact::Manifest => Path::new(MANIFEST_PATH),
      Artifact::SpecDoc => Path::new(SPEC_DOC_PATH),
      Artifact::Schema => Path::new(SCHEMA_PATH),
    }
  }

  /// File name shown in status lines
  pub fn display_name(self) -> &'static str {
    match self {
      Artifact::Manifest => "pyproject.toml",
      Artifact::SpecDoc => "specification.md",
      Artifact::Schema => "aos_schema.json",
    }
  }
}

impl fmt::Display for Artifact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_name())
  }
}

/// Resolves artifact paths against a repository root
#[derive(Debug, Clone)]
pub struct SyncLayout {
  root: PathBuf,
}

impl SyncLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Absolute (or root-relative) path of an artifact
  pub fn path_of(&self, artifact: Artifact) -> PathBuf {
    self.root.join(artifact.relative_path())
  }

  pub fn spec_doc_path(&self) -> PathBuf {
    self.path_of(Artifact::SpecDoc)
  }
}

//! Error types for sync-version with contextual messages and exit codes
//!
//! Every failure is categorized so the release pipeline can tell a bad
//! invocation from a broken file on disk. Document errors carry a help line
//! pointing at the offending artifact.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Exit codes for sync-version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (wrong argument count)
  User = 1,
  /// System error (read/write failure)
  System = 2,
  /// Validation failure (malformed TOML/JSON, wrong document shape)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for sync-version
#[derive(Debug)]
pub enum SyncError {
  /// Reading or writing one of the artifacts failed
  Io { path: PathBuf, source: io::Error },

  /// An artifact could not be loaded into a document
  Document(DocumentError),

  /// Generic error with message and optional help
  Message { message: String, help: Option<String> },
}

impl SyncError {
  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    SyncError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Wrap an I/O failure with the path it happened on
  pub fn io(path: &Path, source: io::Error) -> Self {
    SyncError::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SyncError::Io { .. } => ExitCode::System,
      SyncError::Document(_) => ExitCode::Validation,
      SyncError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SyncError::Io { source, .. } => match source.kind() {
        io::ErrorKind::NotFound => Some("Run sync-version from the repository root.".to_string()),
        io::ErrorKind::PermissionDenied => Some("Check the file permissions of the release checkout.".to_string()),
        _ => None,
      },
      SyncError::Document(e) => e.help_message(),
      SyncError::Message { help, .. } => help.clone(),
    }
  }
}

impl fmt::Display for SyncError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SyncError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
      SyncError::Document(e) => write!(f, "{}", e),
      SyncError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for SyncError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SyncError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<DocumentError> for SyncError {
  fn from(err: DocumentError) -> Self {
    SyncError::Document(err)
  }
}

/// Errors raised while loading or reshaping an artifact
#[derive(Debug)]
pub enum DocumentError {
  /// Manifest is not valid TOML
  InvalidToml { path: PathBuf, message: String },

  /// Schema is not valid JSON
  InvalidJson { path: PathBuf, message: String },

  /// `project` exists in the manifest but is not a table
  ProjectNotATable { path: PathBuf },

  /// Schema root is an array, string, number, ...
  SchemaNotAnObject { path: PathBuf },

  /// Updated schema could not be turned back into JSON text
  Unserializable { path: PathBuf, message: String },
}

impl DocumentError {
  fn help_message(&self) -> Option<String> {
    match self {
      DocumentError::InvalidToml { path, .. } => Some(format!("Fix the TOML syntax in {} and re-run.", path.display())),
      DocumentError::InvalidJson { path, .. } => Some(format!("Fix the JSON syntax in {} and re-run.", path.display())),
      DocumentError::ProjectNotATable { .. } => {
        Some("Declare project metadata as a `[project]` table (PEP 621).".to_string())
      }
      DocumentError::SchemaNotAnObject { .. } => {
        Some("The schema root must be a JSON object with a top-level \"version\" field.".to_string())
      }
      DocumentError::Unserializable { .. } => None,
    }
  }
}

impl fmt::Display for DocumentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DocumentError::InvalidToml { path, message } => {
        write!(f, "Failed to parse {}:\n{}", path.display(), message.trim_end())
      }
      DocumentError::InvalidJson { path, message } => {
        write!(f, "Failed to parse {}: {}", path.display(), message)
      }
      DocumentError::ProjectNotATable { path } => {
        write!(f, "`project` in {} is not a table", path.display())
      }
      DocumentError::SchemaNotAnObject { path } => {
        write!(f, "Top-level value of {} is not a JSON object", path.display())
      }
      DocumentError::Unserializable { path, message } => {
        write!(f, "Failed to serialize {}: {}", path.display(), message)
      }
    }
  }
}

/// Result type alias for sync-version
pub type SyncResult<T> = Result<T, SyncError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SyncError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

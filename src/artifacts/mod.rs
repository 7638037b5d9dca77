//! Per-artifact version editors
//!
//! Each editor is a pure function from the current file contents to the new
//! contents. Reading and writing is left to [`crate::core::plan`].
//!
//! - **manifest**: `project.version` in `pyproject.toml` (TOML, lossless)
//! - **spec_doc**: the `**Version:**` label in the instrument specification
//! - **schema**: top-level `version` in the AOS JSON schema

pub mod manifest;
pub mod schema;
pub mod spec_doc;

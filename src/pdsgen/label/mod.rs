//! # Label Layer
//!
//! This module defines the label abstraction. The [`LabelModel`] trait
//! allows the resolver and orchestrator to work with any label format that
//! can produce a render context.
//!
//! ## Design Rationale
//!
//! Labels are abstracted behind a trait to:
//! - Keep the resolver and orchestrator **format-agnostic** (they consume
//!   mappings, never label syntax)
//! - Allow **future formats** (ODL variants, detached label indexes) without
//!   touching request construction
//!
//! ## Implementations
//!
//! - [`pds3::Pds3Label`]: the PDS3/ODL label format
//!   - `KEY = VALUE` statements, quoted strings spanning lines
//!   - `OBJECT`/`GROUP` blocks become nested mappings
//!   - `^POINTER` statements kept under their literal `^`-prefixed keys
//!
//! ## Mappings
//!
//! A label's fields flatten into a [`Mappings`] value: a JSON-shaped map
//! from field name to scalar, array, or nested object. The template engine
//! exposes this map to templates both as top-level variables and under the
//! reserved `label` name.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod pds3;

pub use pds3::Pds3Label;

/// The render context derived from a label: field name → value.
pub type Mappings = serde_json::Map<String, serde_json::Value>;

/// Abstract interface for label formats.
///
/// A label model owns one parsed document and exposes the field mappings
/// the template engine renders against.
pub trait LabelModel: Debug {
    /// The field mappings serving as render context.
    fn mappings(&self) -> &Mappings;

    /// The filesystem path the label was read from.
    fn path(&self) -> &Path;
}

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed PDS3 label (line {line}): {message}")]
    Syntax { line: usize, message: String },
}

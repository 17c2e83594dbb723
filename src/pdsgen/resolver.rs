//! # Option Resolution
//!
//! The core of the tool: turns a parsed option set into a validated
//! [`GenerationRequest`], or fails with the first problem found.
//!
//! ## Dispatch Design
//!
//! Each present flag maps to a pure handler that takes the request builder
//! and returns it updated, or an error. Handlers never enforce
//! required-ness; that lives in exactly one place, the builder's `build`
//! step.
//!
//! Flags are visited in catalog order rather than argv order, so the first
//! reported failure is deterministic for a given option set.
//!
//! ## Path Rule
//!
//! Label, template, and config-directory values resolve against the
//! working directory and must exist; the error names the file kind and the
//! path exactly as the user typed it. The output path is exempt from the
//! check: it names a file about to be created.
//!
//! ## Help
//!
//! A present help flag wins over everything, including invalid values in
//! other flags. The resolver reports it as [`Resolution::Help`]; printing
//! usage and exiting belongs to the binary, never to library code.

use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};
use crate::label::Pds3Label;
use crate::options::{Flag, ParsedOptions};
use crate::request::{GenerationRequest, RequestBuilder};
use crate::tool::ToolPaths;

/// Outcome of resolving a parsed option set.
#[derive(Debug)]
pub enum Resolution {
    /// The help flag was present; the caller should print usage and stop.
    Help,
    /// A fully validated request, ready for the orchestrator.
    Request(GenerationRequest),
}

/// Resolve `opts` into a request, using `paths` as the filesystem anchors.
pub fn resolve(opts: &ParsedOptions, paths: &ToolPaths) -> Result<Resolution> {
    if opts.contains(Flag::Help) {
        return Ok(Resolution::Help);
    }

    let mut builder = GenerationRequest::builder();
    for flag in Flag::all() {
        if opts.contains(*flag) {
            builder = apply(*flag, opts.value_of(*flag), builder, paths)?;
        }
    }
    builder.build(paths).map(Resolution::Request)
}

/// Apply one present flag to the builder.
fn apply(
    flag: Flag,
    value: Option<&str>,
    builder: RequestBuilder,
    paths: &ToolPaths,
) -> Result<RequestBuilder> {
    let Some(value) = value.map(str::trim) else {
        return Ok(builder);
    };
    Ok(match flag {
        Flag::Label => {
            let path = resolve_existing(Flag::Label, value, paths)?;
            builder.label(Pds3Label::from_file(path)?)
        }
        Flag::Template => builder.template_path(resolve_existing(Flag::Template, value, paths)?),
        Flag::ConfDir => builder.config_dir(resolve_existing(Flag::ConfDir, value, paths)?),
        Flag::Output => builder.output(value),
        // -f is reserved: accepted by the parser, ignored here. Help is
        // presence-only and never reaches this point.
        Flag::DataFile | Flag::Help => builder,
    })
}

/// Resolve `value` against the working directory and require it to exist.
/// The error carries the string as typed, not its resolved form.
fn resolve_existing(flag: Flag, value: &str, paths: &ToolPaths) -> Result<PathBuf> {
    let candidate = Path::new(value);
    let resolved = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        paths.cwd().join(candidate)
    };

    if !resolved.exists() {
        return Err(GenError::MissingInput {
            kind: flag.file_kind().unwrap_or("File"),
            path: value.to_string(),
        });
    }
    Ok(resolved)
}

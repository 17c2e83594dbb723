//! # Pdsgen Architecture
//!
//! Pdsgen converts PDS3 planetary-science labels into PDS4 labels by
//! expanding a text template against the fields of the source label. It is
//! a **library with a CLI client**, not a CLI with incidental library code:
//! everything from option resolution inward is callable without a terminal.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, binary only)                 │
//! │  - Parses argv into flag identities and raw values          │
//! │  - The ONLY place that prints, reads env, or sets exit codes│
//! └─────────────────────────────────────────────────────────────┘
//!                              │ ParsedOptions
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolver (resolver.rs)                                     │
//! │  - Dispatches each flag to a pure handler                   │
//! │  - Resolves paths against cwd, verifies existence           │
//! │  - Builds the label model, applies defaults                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ GenerationRequest
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Orchestrator (generate.rs)                                 │
//! │  - One render pass via the template engine                  │
//! │  - Writes the result to a file or standard output           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The resolver is where the decisions live: which flags are required,
//! how relative paths resolve, which inputs must exist, what the defaults
//! are. The orchestrator is deliberately thin.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`resolver`] inward, code:
//! - Takes regular Rust arguments ([`options::ParsedOptions`],
//!   [`tool::ToolPaths`]) instead of reading ambient process state
//! - Returns `Result` values; **never** prints, **never** calls
//!   `std::process::exit`
//! - Reports the help flag as a value ([`resolver::Resolution::Help`]) and
//!   leaves printing usage to the binary
//!
//! The one sanctioned exception: the orchestrator writes rendered output
//! to stdout when the request targets it, since that stream *is* the
//! output destination there, not a diagnostics channel.
//!
//! ## Testing Strategy
//!
//! 1. **Resolver** (`resolver.rs`): the lion's share. Every required-flag,
//!    path-resolution, trimming, and defaulting rule, against temp dirs.
//! 2. **Label parsing** (`label/pds3.rs`): statement scanning, value
//!    interpretation, block nesting, and the malformed-label errors.
//! 3. **Engine/orchestrator** (`engine.rs`, `generate.rs`): context
//!    assembly, strict-undefined behavior, includes, file output.
//! 4. **CLI** (`tests/generate_cli.rs`): end-to-end runs of the binary
//!    checking exit codes and exact user-facing messages.
//!
//! ## Module Overview
//!
//! - [`options`]: flag catalog and the parsed option set
//! - [`resolver`]: option validation and request construction
//! - [`request`]: the immutable generation request and its builder
//! - [`label`]: label-format abstraction and the PDS3 parser
//! - [`engine`]: template rendering (minijinja)
//! - [`generate`]: the generation orchestrator
//! - [`tool`]: invocation anchors (cwd, install dir) and version string
//! - [`error`]: error types

pub mod engine;
pub mod error;
pub mod generate;
pub mod label;
pub mod options;
pub mod request;
pub mod resolver;
pub mod tool;

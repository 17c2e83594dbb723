//! Flag identities and the option set handed to the resolver.
//!
//! The catalog of recognized flags lives here as constant data on [`Flag`].
//! Argument *syntax* (dashes, `=`, abbreviations) is the CLI parser's
//! business; by the time a [`ParsedOptions`] reaches the resolver, only flag
//! identities and raw string values remain.

use std::collections::BTreeMap;

/// Identity of a recognized command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Flag {
    Help,
    Label,
    Template,
    DataFile,
    ConfDir,
    Output,
}

impl Flag {
    /// All flags, in the order the resolver visits them. Scanning in
    /// catalog order keeps failure reporting independent of argv order.
    pub fn all() -> &'static [Flag] {
        &[
            Flag::Help,
            Flag::Label,
            Flag::Template,
            Flag::DataFile,
            Flag::ConfDir,
            Flag::Output,
        ]
    }

    pub fn short(&self) -> char {
        match self {
            Flag::Help => 'h',
            Flag::Label => 'p',
            Flag::Template => 't',
            Flag::DataFile => 'f',
            Flag::ConfDir => 'c',
            Flag::Output => 'o',
        }
    }

    pub fn long(&self) -> &'static str {
        match self {
            Flag::Help => "help",
            Flag::Label => "pds3-label",
            Flag::Template => "template",
            Flag::DataFile => "data-file",
            Flag::ConfDir => "conf-dir",
            Flag::Output => "output",
        }
    }

    /// Whether the flag carries a value (all but help do).
    pub fn takes_value(&self) -> bool {
        !matches!(self, Flag::Help)
    }

    /// Whether the resolver requires the flag to be present.
    pub fn required(&self) -> bool {
        matches!(self, Flag::Label | Flag::Template)
    }

    /// Human file-kind named in missing-input messages, for flags whose
    /// value is resolved against the filesystem.
    pub fn file_kind(&self) -> Option<&'static str> {
        match self {
            Flag::Label => Some("PDS3 Label"),
            Flag::Template => Some("Template"),
            Flag::ConfDir => Some("Config directory"),
            _ => None,
        }
    }

    pub fn about(&self) -> &'static str {
        match self {
            Flag::Help => "Print help",
            Flag::Label => "Path to the PDS3 label to convert",
            Flag::Template => "Path to the output template",
            Flag::DataFile => "Supplementary data file referenced by the label (reserved)",
            Flag::ConfDir => "Directory of supporting templates and configuration",
            Flag::Output => "Output file path; defaults to standard output",
        }
    }
}

/// The flags present on one command line, keyed by identity.
#[derive(Debug, Default, Clone)]
pub struct ParsedOptions {
    values: BTreeMap<Flag, Option<String>>,
}

impl ParsedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flag occurrence; `value` is `None` for presence-only flags.
    pub fn insert(&mut self, flag: Flag, value: Option<String>) {
        self.values.insert(flag, value);
    }

    /// Chainable insert of a valued flag.
    pub fn with_value(mut self, flag: Flag, value: impl Into<String>) -> Self {
        self.values.insert(flag, Some(value.into()));
        self
    }

    /// Chainable insert of a presence-only flag.
    pub fn with_present(mut self, flag: Flag) -> Self {
        self.values.insert(flag, None);
        self
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.values.contains_key(&flag)
    }

    pub fn value_of(&self, flag: Flag) -> Option<&str> {
        self.values.get(&flag).and_then(|v| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

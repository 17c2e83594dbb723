use thiserror::Error;

use crate::label::LabelError;

#[derive(Error, Debug)]
pub enum GenError {
    /// A required flag was absent from the command line.
    #[error("Missing -{flag} flag.  {what} must be specified.")]
    MissingOption { flag: char, what: &'static str },

    /// A path-bearing flag named a file or directory that does not exist.
    /// `path` is the string as typed, not its resolved absolute form.
    #[error("{kind} does not exist: {path}")]
    MissingInput { kind: &'static str, path: String },

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;

//! The validated description of one conversion job.
//!
//! A [`GenerationRequest`] can only be obtained through [`RequestBuilder`],
//! and the builder's `build` step is the single place the required set
//! (label and template) is enforced. A request in hand therefore always
//! carries a mapped label, an existing template path, a config directory
//! (supplied or derived), and an output target.

use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};
use crate::label::LabelModel;
use crate::options::Flag;
use crate::tool::ToolPaths;

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to the named file, creating or overwriting it.
    File(PathBuf),
    /// Write to standard output.
    StdOut,
}

impl OutputTarget {
    pub fn is_std_out(&self) -> bool {
        matches!(self, OutputTarget::StdOut)
    }
}

/// One validated conversion job, consumed exactly once by the orchestrator.
#[derive(Debug)]
pub struct GenerationRequest {
    label: Box<dyn LabelModel>,
    template_path: PathBuf,
    data_file: Option<String>,
    config_dir: PathBuf,
    output: OutputTarget,
}

impl GenerationRequest {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn label(&self) -> &dyn LabelModel {
        self.label.as_ref()
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Supplementary data file referenced by the label, if any. Never
    /// validated for existence at this layer.
    pub fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }
}

/// Accumulates flag outcomes into a request.
#[derive(Default)]
pub struct RequestBuilder {
    label: Option<Box<dyn LabelModel>>,
    template_path: Option<PathBuf>,
    data_file: Option<String>,
    config_dir: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl RequestBuilder {
    pub fn label(mut self, label: impl LabelModel + 'static) -> Self {
        self.label = Some(Box::new(label));
        self
    }

    pub fn template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    pub fn data_file(mut self, path: impl Into<String>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(path.into());
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Enforce the required set and fill defaults: no output flag means
    /// standard output, no config directory means the install-derived one.
    pub fn build(self, paths: &ToolPaths) -> Result<GenerationRequest> {
        let Some(label) = self.label else {
            return Err(GenError::MissingOption {
                flag: Flag::Label.short(),
                what: "PDS3 label",
            });
        };
        let Some(template_path) = self.template_path else {
            return Err(GenError::MissingOption {
                flag: Flag::Template.short(),
                what: "Template file",
            });
        };

        let output = match self.output {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::StdOut,
        };
        let config_dir = self
            .config_dir
            .unwrap_or_else(|| paths.default_conf_dir());

        Ok(GenerationRequest {
            label,
            template_path,
            data_file: self.data_file,
            config_dir,
            output,
        })
    }
}

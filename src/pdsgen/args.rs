use clap::{CommandFactory, Parser};

use pdsgen::options::{Flag, ParsedOptions};
use pdsgen::tool;

/// Command-line surface of the tool. Parsing syntax is clap's job; every
/// validation rule beyond syntax (required flags, path existence, defaults)
/// belongs to the resolver, which is why nothing here is marked required.
#[derive(Parser, Debug)]
#[command(
    name = "pdsgen",
    bin_name = "pdsgen",
    version = tool::version(),
    disable_help_flag = true
)]
#[command(
    about = "Generate PDS4 labels from PDS3 labels and templates",
    long_about = None
)]
pub struct Cli {
    /// Path to the PDS3 label to convert
    #[arg(short = 'p', long = "pds3-label", value_name = "LABEL")]
    pub pds3_label: Option<String>,

    /// Path to the output template
    #[arg(short = 't', long = "template", value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Supplementary data file referenced by the label (reserved)
    #[arg(short = 'f', long = "data-file", value_name = "FILE")]
    pub data_file: Option<String>,

    /// Directory of supporting templates and configuration
    #[arg(short = 'c', long = "conf-dir", value_name = "DIR")]
    pub conf_dir: Option<String>,

    /// Output file path; defaults to standard output
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Print help
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

impl Cli {
    /// Convert parsed arguments into the identity-keyed option set the
    /// resolver consumes.
    pub fn to_options(&self) -> ParsedOptions {
        let mut opts = ParsedOptions::new();
        if self.help {
            opts.insert(Flag::Help, None);
        }
        if let Some(v) = &self.pds3_label {
            opts.insert(Flag::Label, Some(v.clone()));
        }
        if let Some(v) = &self.template {
            opts.insert(Flag::Template, Some(v.clone()));
        }
        if let Some(v) = &self.data_file {
            opts.insert(Flag::DataFile, Some(v.clone()));
        }
        if let Some(v) = &self.conf_dir {
            opts.insert(Flag::ConfDir, Some(v.clone()));
        }
        if let Some(v) = &self.output {
            opts.insert(Flag::Output, Some(v.clone()));
        }
        opts
    }
}

/// Print the full usage text to stdout.
pub fn print_usage() -> std::io::Result<()> {
    Cli::command().print_help()
}

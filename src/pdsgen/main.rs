use clap::error::ErrorKind;
use clap::Parser;

use pdsgen::error::Result;
use pdsgen::generate::Generator;
use pdsgen::resolver::{self, Resolution};
use pdsgen::tool::ToolPaths;

mod args;
use args::Cli;

fn main() {
    // A bare invocation gets a hint instead of an error report.
    if std::env::args().len() == 1 {
        println!("\nType 'pdsgen -h' for usage");
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // -V/--version is routed through clap's error channel but is
            // not a failure. Real parse errors exit 1, not clap's 2.
            let _ = e.print();
            if e.kind() == ErrorKind::DisplayVersion {
                return;
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let opts = cli.to_options();
    let paths = ToolPaths::from_env();

    match resolver::resolve(&opts, &paths)? {
        Resolution::Help => {
            args::print_usage()?;
            Ok(())
        }
        Resolution::Request(request) => {
            let std_out = request.output().is_std_out();
            Generator::new(request).generate(std_out)
        }
    }
}

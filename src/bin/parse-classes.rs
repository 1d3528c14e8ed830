use clap::Parser;
use eyre::Result;
use pydecl::cli::ClassesCli;
use pydecl::{analysis, logging, output};
use std::path::Path;
use std::process;

fn main() {
    let cli = ClassesCli::parse();
    logging::init(cli.target.verbose);

    if let Err(err) = run(&cli.target.file) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(path: &Path) -> Result<()> {
    let names = analysis::extract_class_names(path)?;
    output::output(&names)
}

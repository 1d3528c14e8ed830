use clap::Parser;
use eyre::Result;
use pydecl::cli::FunctionsCli;
use pydecl::{analysis, logging, output};

// Errors are not caught here: they leave `main` and the runtime reports them.
fn main() -> Result<()> {
    let cli = FunctionsCli::parse();
    logging::init(cli.target.verbose);

    let names = analysis::extract_function_names(&cli.target.file)?;
    output::output(&names)
}

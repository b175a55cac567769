//! gos - point GOPATH at a directory

use anyhow::Result;
use clap::Parser;

use gos::cli::{actions, Cli, Context};
use gos::utils::path::validate_target_dir;
use gos::Error;

fn main() {
    let cli = Cli::parse();
    gos::logging::init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let arg = cli.path.as_deref().ok_or(Error::MissingArgument)?;
    let target = validate_target_dir(arg.as_os_str())?;
    log::debug!("target directory: {}", target.display());

    let ctx = Context::from_cli(cli)?;
    actions::update::execute(&ctx, &target)
}

use clap::Parser;
use pbf_bounds::cli::{run, Cli};
use pbf_bounds::utils::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli).exit_code()
}

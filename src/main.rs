use clap::Parser;
use log::error;
use std::process;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() {
    let args = cli::Args::parse();
    cli::log::init(&args.verbose);

    if let Err(error) = cli::run(&args) {
        error!("{error}");
        process::exit(1);
    }
}

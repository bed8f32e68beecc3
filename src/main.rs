//! pkgref - package object reference resolver
//!
//! Command line front end over the `pkgref` library: loads a package snapshot
//! and prints resolved import/export descriptions.

use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

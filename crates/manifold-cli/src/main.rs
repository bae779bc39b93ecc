//! Manifold CLI: the `manifold` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Manifest {
            intent,
            observer,
            pressure,
            config,
            json,
        } => commands::manifest::run(intent, observer, pressure, config, json),

        Commands::Batch {
            file,
            observer,
            pressure,
            config,
            json,
        } => commands::batch::run(file, observer, pressure, config, json),

        Commands::Probe { intent, json } => commands::probe::run(intent, json),

        Commands::Certify {
            intent,
            creator,
            stake,
            goal,
            backers,
            amount,
            complete,
            fail,
            yield_amount,
            json,
        } => commands::certify::run(commands::certify::Args {
            intent,
            creator,
            stake,
            goal,
            backers,
            amount,
            complete,
            fail,
            yield_amount,
            json,
        }),
    }
}

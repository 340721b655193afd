//! FEsApp - Freetown public transport fare estimator
//!
//! A CLI tool that quotes fares, simulates fare trends and compares routes.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

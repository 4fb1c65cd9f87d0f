use clap::Parser;

mod args;
mod commands;
mod print;
mod ui;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;

mod cli;
mod commands;
mod error;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    cli.command.run()
}

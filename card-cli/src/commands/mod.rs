use clap::Subcommand;

use crate::error::AppError;

mod decode;
mod encode;
mod open;
mod share;
mod utils;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Encode(encode::Encode),
    Decode(decode::Decode),
    Share(share::Share),
    Open(open::Open),
}

impl Commands {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Share(cmd) => cmd.run(),
            Commands::Open(cmd) => cmd.run(),
        }
    }
}

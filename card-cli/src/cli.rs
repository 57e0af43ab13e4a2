use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "card-cli")]
#[clap(about = "Encode, decode and share card profiles as links", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

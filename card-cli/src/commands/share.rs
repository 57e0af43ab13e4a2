use std::path::PathBuf;

use data_link::build_share_url;

use crate::commands::utils::{load_profile, parse_url};
use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "share", about = "Build the shareable link for a profile")]
pub struct Share {
    #[clap(help = "Base URL of the hosting page (origin and path)")]
    base_url: Option<String>,
    #[clap(value_parser, help = "Path to the profile JSON file")]
    profile_path: Option<PathBuf>,
}

impl Share {
    pub fn run(&self) -> Result<(), AppError> {
        let base = parse_url(&self.base_url)?;
        let profile = load_profile(&self.profile_path)?;
        println!("{}", build_share_url(&base, &profile));

        Ok(())
    }
}

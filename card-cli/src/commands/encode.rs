use std::path::PathBuf;

use data_token::encode_token;

use crate::commands::utils::load_profile;
use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "encode", about = "Encode a profile file into a share token")]
pub struct Encode {
    #[clap(value_parser, help = "Path to the profile JSON file")]
    profile_path: Option<PathBuf>,
}

impl Encode {
    pub fn run(&self) -> Result<(), AppError> {
        let profile = load_profile(&self.profile_path)?;
        println!("{}", encode_token(&profile));

        Ok(())
    }
}

use data_link::extract_token;
use data_profile::Profile;
use data_token::decode_token;

use crate::commands::utils::parse_url;
use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "open", about = "Decode a share link the way the app does")]
pub struct Open {
    #[clap(help = "Share URL to open")]
    url: Option<String>,
}

impl Open {
    /// Application-start policy: a link that does not decode falls
    /// back silently to the seed profile, never a hard error.
    pub fn run(&self) -> Result<(), AppError> {
        let url = parse_url(&self.url)?;
        let profile = extract_token(&url)
            .and_then(|token| decode_token(&token))
            .unwrap_or_else(|| {
                log::warn!("share link did not decode, using initial profile");
                Profile::initial()
            });
        println!("{}", serde_json::to_string_pretty(&profile)?);

        Ok(())
    }
}

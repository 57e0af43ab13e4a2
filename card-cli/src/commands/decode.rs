use data_token::decode_token;

use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "decode", about = "Decode a share token into profile JSON")]
pub struct Decode {
    #[clap(help = "Share token to decode")]
    token: Option<String>,
}

impl Decode {
    pub fn run(&self) -> Result<(), AppError> {
        let token = self.token.as_ref().ok_or_else(|| {
            AppError::TokenDecodeError("Token was not provided".to_owned())
        })?;
        let profile = decode_token(token).ok_or_else(|| {
            AppError::TokenDecodeError(
                "Token is neither a compressed nor a legacy link".to_owned(),
            )
        })?;
        println!("{}", serde_json::to_string_pretty(&profile)?);

        Ok(())
    }
}

//! # Data Token
//!
//! `data-token` turns a card profile into a URL-safe share token and
//! back. The token is the profile's only durable form: the share link
//! is the database.
//!
//! Encoding is serialize-then-compress. Decoding attempts the
//! compressed format first and falls back to the legacy format of
//! older links, plain standard base64 of the JSON document.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use data_error::Result;
use data_profile::Profile;

pub mod compress;

pub use compress::{compress, decompress};

/// Encode a profile into a URL-safe share token.
///
/// Serialization of a plain value type does not fail in practice; if
/// it ever does, the token is the empty string so the caller can still
/// assemble a (non-functional) URL without crashing.
pub fn encode_token(profile: &Profile) -> String {
    match profile.to_json().and_then(|json| compress(&json)) {
        Ok(token) => token,
        Err(err) => {
            log::error!("failed to encode profile: {err}");
            String::new()
        }
    }
}

/// Primary decode path: decompress the token, then parse the JSON.
pub fn decode_compressed(token: &str) -> Result<Profile> {
    let json = decompress(token)?;
    Profile::from_json(&json)
}

/// Legacy decode path for links generated before compression was
/// introduced: the token is standard base64 of a UTF-8 JSON document.
pub fn decode_legacy(token: &str) -> Result<Profile> {
    let bytes = STANDARD.decode(token)?;
    let json = String::from_utf8(bytes)?;
    Profile::from_json(&json)
}

/// Decode a share token back into a profile.
///
/// The two formats carry no version tag; disambiguation is purely by
/// trial: the primary path is always attempted first, the legacy path
/// only on primary failure, and no hybrid of the two results is ever
/// produced. When both fail the result is `None` and the caller keeps
/// whatever profile it already has.
pub fn decode_token(token: &str) -> Option<Profile> {
    match decode_compressed(token) {
        Ok(profile) => Some(profile),
        Err(primary) => {
            log::debug!("compressed decode failed: {primary}");
            match decode_legacy(token) {
                Ok(profile) => Some(profile),
                Err(legacy) => {
                    log::debug!("legacy decode failed: {legacy}");
                    None
                }
            }
        }
    }
}

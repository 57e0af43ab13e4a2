use std::io::{Read, Write};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use data_error::{CardError, Result};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Compress arbitrary text into a token that is safe for direct
/// inclusion in a URL query value: zlib over unpadded URL-safe base64
/// (`A-Za-z0-9-_`, no percent-encoding required).
///
/// Deterministic for identical input. There is no upper bound on the
/// input length, the token grows roughly with input entropy.
pub fn compress(text: &str) -> Result<String> {
    let mut encoder =
        ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(text.as_bytes())?;
    let bytes = encoder.finish()?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Exact inverse of [`compress`]: reproduces the original text
/// byte-for-byte for any token produced by it.
///
/// A malformed token (wrong alphabet, corrupt or truncated stream,
/// invalid UTF-8 payload) yields `CardError::Compression` so the caller
/// can attempt a fallback path.
pub fn decompress(token: &str) -> Result<String> {
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    let mut decoder = ZlibDecoder::new(bytes.as_slice());
    let mut text = String::new();
    decoder
        .read_to_string(&mut text)
        .map_err(|e| CardError::Compression(e.to_string()))?;
    Ok(text)
}

use data_profile::Profile;
use data_token::encode_token;
use url::Url;

/// The query parameter carrying the encoded profile. It is the only
/// parameter the pipeline reads or writes.
pub const CARD_PARAM: &str = "card";

/// Practical URL length accepted by common browsers and servers.
/// Oversize links are still produced, the limit is unenforced.
const URL_LENGTH_WARN_BYTES: usize = 8 * 1024;

/// Build the shareable link for a profile: the base origin and path
/// with a single `card` query parameter holding the encoded token.
///
/// The base is passed in explicitly, the codec never reads ambient
/// environment. Any query or fragment already on the base is dropped.
pub fn build_share_url(base: &Url, profile: &Profile) -> Url {
    let token = encode_token(profile);
    let mut url = base.clone();
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(CARD_PARAM, &token);

    let length = url.as_str().len();
    if length > URL_LENGTH_WARN_BYTES {
        log::warn!("share URL is {length} bytes, clients may truncate it");
    }
    url
}

/// Extract the encoded profile token from an incoming share URL.
pub fn extract_token(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == CARD_PARAM)
        .map(|(_, value)| value.into_owned())
}

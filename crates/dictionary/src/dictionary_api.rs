use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{DictionaryError, LookupResponse};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

// Everything `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn entry_url(endpoint: &str, word: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        utf8_percent_encode(word, COMPONENT)
    )
}

/// Issues a single GET for `word`. The status code is not inspected: the
/// endpoint answers unknown words with a JSON object, which decodes as
/// [`LookupResponse::Error`].
pub(crate) async fn get_definition(
    client: &reqwest::Client,
    endpoint: &str,
    word: &str,
) -> Result<LookupResponse, DictionaryError> {
    let url = entry_url(endpoint, word);
    tracing::debug!(%url, "looking up word");
    let res: reqwest::Response = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    tracing::debug!(status = %res.status(), "lookup answered");
    let body = res.bytes().await.map_err(DictionaryError::Body)?;
    LookupResponse::from_slice(&body).map_err(DictionaryError::Deserialize)
}

//! Single-shot in-memory GET

use reqwest::Client;

use crate::error::FetchError;

/// Fetch the full response body into memory.
///
/// The whole payload is materialized in the calling process, which caps the
/// practical file size; large transfers belong on the streamed path.
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

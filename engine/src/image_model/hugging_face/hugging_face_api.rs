use std::time::Duration;

use bytes::Bytes;
use log::debug;

use crate::{
    Credential,
    generation::{GenerationError, Payload},
};

/// Posts `payload` to `url` and returns the raw body of a successful response.
///
/// Non-success statuses become [`GenerationError::Api`] with the body text,
/// the timeout covers connecting, sending and reading the body.
pub async fn query(
    url: &str,
    payload: &Payload,
    credential: &Credential,
    timeout: Duration,
    client: &reqwest::Client,
) -> Result<Bytes, GenerationError> {
    let resp = client
        .post(url)
        .bearer_auth(credential.expose())
        .timeout(timeout)
        .json(payload)
        .send()
        .await?;

    let status = resp.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let body = resp.text().await?;
        return Err(GenerationError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(resp.bytes().await?)
}

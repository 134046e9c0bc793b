use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Send the request and decode a json body, any non-success status is an error
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    request: RequestBuilder,
) -> Result<T> {
    let request = request.header("Accept", "application/json").build()?;
    let url = request.url().to_string();
    log::debug!("GET {}", url);
    let resp = client.execute(request).await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "Request not successful, status code: {}, url: {}, body: {:?}",
            status,
            url,
            error_body,
        );
        return Err(Error::RequestNotOk { url, status });
    }
    Ok(resp.json().await?)
}

// src/core/net.rs
// Blocking HTTP GET. One request per call; no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Build the shared client. `timeout: None` waits indefinitely.
pub fn client(timeout: Option<Duration>) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// GET `url` with `query` pairs and return the body on a 2xx status.
pub fn http_get(client: &Client, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
    let resp = client.get(url).query(query).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(resp.text()?)
}

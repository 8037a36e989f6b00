// src/fetch.rs
//
// Question sources. `OpenTdb` talks to the real API; tests and the GUI can
// plug in anything else that implements `QuestionSource`.

use std::num::NonZeroU32;

use reqwest::blocking::Client;

use crate::config::{consts::API_MAX_AMOUNT, options::FetchOptions};
use crate::core::net;
use crate::error::FetchError;
use crate::question::{Envelope, RawQuestion};

pub trait QuestionSource {
    /// Fetch exactly one batch of `count` questions. Never retries.
    fn fetch(&self, count: NonZeroU32) -> Result<Vec<RawQuestion>, FetchError>;
}

pub struct OpenTdb {
    client: Client,
    api_url: String,
}

impl OpenTdb {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        Ok(Self {
            client: net::client(opts.timeout)?,
            api_url: opts.api_url.clone(),
        })
    }
}

impl QuestionSource for OpenTdb {
    fn fetch(&self, count: NonZeroU32) -> Result<Vec<RawQuestion>, FetchError> {
        if count.get() > API_MAX_AMOUNT {
            logw!("Fetch: amount={} exceeds the API cap of {}; expect an empty result", count, API_MAX_AMOUNT);
        }
        logd!("Fetch: GET {} amount={}", self.api_url, count);

        let body = net::http_get(&self.client, &self.api_url, &[("amount", count.to_string())])?;
        let results = parse_envelope(&body)?;

        logd!("Fetch: OK results={}", results.len());
        Ok(results)
    }
}

/// Parse an API body into its results. Missing or empty `results` is a failure.
pub fn parse_envelope(body: &str) -> Result<Vec<RawQuestion>, FetchError> {
    let env: Envelope = serde_json::from_str(body)?;

    if env.response_code != 0 {
        logw!("Fetch: API response_code={}", env.response_code);
    }

    match env.results {
        Some(results) if !results.is_empty() => Ok(results),
        _ => Err(FetchError::NoResults),
    }
}

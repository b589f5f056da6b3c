use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, ORIGIN};
use serde_json::Value;

use crate::client::auth::Token;
use crate::client::transport::HttpTransport;
use crate::error::{AuthError, FetchError};

/// Origin the dashboard presents itself as
pub const ORIGIN_VALUE: &str = "https://api2.arduino.cc";

/*
* Authenticated GET requests against the IoT API
*/
pub struct Fetcher<'a, T> {
    transport: &'a T,
    headers: HeaderMap,
    preflight: bool,
}
impl<'a, T: HttpTransport> Fetcher<'a, T> {
    pub fn new(
        transport: &'a T,
        token: &Token,
        origin: &str,
        preflight: bool,
    ) -> Result<Fetcher<'a, T>, AuthError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.access_token))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_str(origin)?);

        Ok(Fetcher {
            transport,
            headers,
            preflight,
        })
    }
    /// GET the url and decode its JSON body, keeping the failure kind
    pub async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        if self.preflight {
            // Result is not used
            if let Err(e) = self.transport.options(url, &self.headers).await {
                log::debug!("preflight to {} failed: {}", url, e);
            }
        }

        let response = self
            .transport
            .get(url, &self.headers)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if response.status != 200 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
    /// GET the url, logging any failure and returning None for it
    pub async fn fetch(&self, url: &str) -> Option<Value> {
        match self.try_fetch(url).await {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Fetch error: {e}");
                None
            }
        }
    }
}

use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::error::TransportError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> RawResponse {
        RawResponse {
            status,
            body: body.into(),
        }
    }
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The three request shapes the pipeline issues
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<RawResponse, TransportError>;
    async fn options(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError>;
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError>;
}

/*
* Transport backed by a reqwest client
*/
pub struct ReqwestTransport {
    client: reqwest::Client,
}
impl ReqwestTransport {
    pub fn new(timeout: Duration, tls_insecure: bool) -> Result<ReqwestTransport, TransportError> {
        let mut client_builder = reqwest::Client::builder().timeout(timeout);
        // Disable SSL verification if asked
        if tls_insecure {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        Ok(ReqwestTransport {
            client: client_builder.build()?,
        })
    }
    async fn finish(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<RawResponse, TransportError> {
        log::debug!("form post to url {}", url);
        let response = self.client.post(url).form(form).send().await?;
        Self::finish(response).await
    }
    async fn options(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError> {
        log::debug!("options to url {}", url);
        let response = self
            .client
            .request(reqwest::Method::OPTIONS, url)
            .headers(headers.clone())
            .send()
            .await?;
        Self::finish(response).await
    }
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, TransportError> {
        log::debug!("raw get to url {}", url);
        let response = self.client.get(url).headers(headers.clone()).send().await?;
        Self::finish(response).await
    }
}

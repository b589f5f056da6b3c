use serde::Deserialize;

use crate::client::transport::HttpTransport;
use crate::config::Credentials;
use crate::error::AuthError;

/// Audience the issued token is bound to
pub const AUDIENCE: &str = "https://api2.arduino.cc/iot";

/// Bearer token from a client-credentials grant. Never cached or refreshed.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}
impl Token {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }
}

/// Exchange the client id/secret pair for a bearer token
pub async fn acquire_token<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
    audience: &str,
) -> Result<Token, AuthError> {
    log::debug!("requesting token from {}", credentials.token_url());

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id()),
        ("client_secret", credentials.client_secret()),
        ("audience", audience),
    ];

    let response = transport.post_form(credentials.token_url(), &params).await?;
    if !response.is_success() {
        return Err(AuthError::Rejected {
            status: response.status,
            body: response.body,
        });
    }

    let token: Token = serde_json::from_str(&response.body)?;
    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }

    log::debug!("token acquired");
    Ok(token)
}

use std::fmt;
use url::Url;

use crate::error::ConfigError;

pub const CLIENT_ID_VAR: &str = "ARDUINO_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "ARDUINO_CLIENT_SECRET";
pub const TOKEN_URL_VAR: &str = "ARDUINO_TOKEN_URL";

/// OAuth2 client credentials, read once per process
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    token_url: String,
}
impl Credentials {
    pub fn new(client_id: &str, client_secret: &str, token_url: &str) -> Credentials {
        Credentials {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_url: token_url.to_string(),
        }
    }
    pub fn from_env() -> Result<Credentials, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
    /// Build from any variable source. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Credentials, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let client_id = read(CLIENT_ID_VAR);
        let client_secret = read(CLIENT_SECRET_VAR);
        let token_url = read(TOKEN_URL_VAR);

        let (client_id, client_secret, token_url) = match (client_id, client_secret, token_url) {
            (Some(id), Some(secret), Some(url)) => (id, secret, url),
            (id, secret, url) => {
                let missing = [
                    (CLIENT_ID_VAR, id.is_none()),
                    (CLIENT_SECRET_VAR, secret.is_none()),
                    (TOKEN_URL_VAR, url.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(ConfigError::MissingVariables(missing));
            }
        };

        Url::parse(&token_url).map_err(|source| ConfigError::InvalidUrl {
            url: token_url.clone(),
            source,
        })?;

        Ok(Credentials {
            client_id,
            client_secret,
            token_url,
        })
    }
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn loads_all_three_values() {
        let creds = Credentials::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (TOKEN_URL_VAR, "https://api2.arduino.cc/iot/v1/clients/token"),
        ]))
        .unwrap();

        assert_eq!(creds.client_id(), "id");
        assert_eq!(creds.client_secret(), "secret");
        assert_eq!(
            creds.token_url(),
            "https://api2.arduino.cc/iot/v1/clients/token"
        );
    }

    #[test]
    fn missing_and_blank_values_are_named() {
        let err = Credentials::from_lookup(lookup(&[(CLIENT_ID_VAR, "id"), (TOKEN_URL_VAR, "  ")]))
            .unwrap_err();

        match &err {
            ConfigError::MissingVariables(names) => {
                assert_eq!(names, &vec![CLIENT_SECRET_VAR, TOKEN_URL_VAR]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(
            err.to_string()
                .starts_with("missing required environment variables")
        );
    }

    #[test]
    fn invalid_token_url_is_a_config_error() {
        let err = Credentials::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (TOKEN_URL_VAR, "token-endpoint"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn debug_output_hides_secret() {
        let creds = Credentials::new("id", "hunter2", "https://auth.example.test/token");
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}

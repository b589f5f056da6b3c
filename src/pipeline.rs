//! Runs the retrieval pipeline end to end.
//!
//! Every lister acquires its own token and all requests are awaited one after
//! another. Nothing survives between runs.

use serde::Serialize;

use crate::client::{ApiEndpoints, Fetcher, HttpTransport, acquire_token};
use crate::config::{Credentials, Settings};
use crate::device::{DeviceListing, list_devices};
use crate::error::AuthError;
use crate::thing::{Thing, expand_things};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    Devices,
    Things,
}
impl Scope {
    fn devices(self) -> bool {
        matches!(self, Scope::All | Scope::Devices)
    }
    fn things(self) -> bool {
        matches!(self, Scope::All | Scope::Things)
    }
}

/// One run's results. A None half means no data was available.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub devices: Option<DeviceListing>,
    pub things: Option<Vec<Thing>>,
}

pub async fn run<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
    settings: &Settings,
    scope: Scope,
) -> Result<Snapshot, AuthError> {
    let endpoints = ApiEndpoints::new(settings.base_url());
    let mut snapshot = Snapshot::default();

    if scope.devices() {
        let token = acquire_token(transport, credentials, settings.audience()).await?;
        let fetcher = Fetcher::new(transport, &token, settings.origin(), settings.preflight())?;
        snapshot.devices = list_devices(&fetcher, &endpoints).await;
    }

    if scope.things() {
        let token = acquire_token(transport, credentials, settings.audience()).await?;
        let fetcher = Fetcher::new(transport, &token, settings.origin(), settings.preflight())?;
        snapshot.things = expand_things(&fetcher, &endpoints, settings.thing_name()).await;
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::mock::MockTransport;

    const TOKEN_URL: &str = "https://auth.example.test/token";
    const DEVICES: &str = "https://api2.arduino.cc/iot/v2/devices";
    const THINGS: &str = "https://api2.arduino.cc/iot/v2/things";

    fn credentials() -> Credentials {
        Credentials::new("id", "secret", TOKEN_URL)
    }

    fn transport() -> MockTransport {
        MockTransport::new()
            .on("POST", TOKEN_URL, 200, r#"{"access_token":"tok"}"#)
            .on("GET", DEVICES, 200, r#"[{"name":"Collar1","type":"sensor"}]"#)
            .on("GET", THINGS, 200, r#"[{"id":"42","name":"PetHealth"}]"#)
            .on(
                "GET",
                &format!("{THINGS}/42/properties"),
                200,
                r#"[{"name":"stepCount","type":"int","last_value":"120","value_updated_at":"2024-03-01T07:05:09.000000Z"}]"#,
            )
    }

    #[tokio::test]
    async fn collects_devices_and_things() {
        let transport = transport();

        let snapshot = run(&transport, &credentials(), &Settings::default(), Scope::All)
            .await
            .unwrap();

        assert_eq!(snapshot.devices.unwrap().names(), vec!["Collar1"]);
        let things = snapshot.things.unwrap();
        let steps = things[0].variable("stepCount").unwrap();
        assert_eq!(steps.value, "120");
        assert_eq!(steps.update_time, "3/1/2024 7:5:9 AM");
    }

    #[tokio::test]
    async fn each_lister_acquires_its_own_token() {
        let transport = transport();

        run(&transport, &credentials(), &Settings::default(), Scope::All)
            .await
            .unwrap();

        assert_eq!(transport.count("POST", TOKEN_URL), 2);
        let order: Vec<_> = transport
            .calls()
            .iter()
            .filter(|c| c.method != "OPTIONS")
            .map(|c| c.url.clone())
            .collect();
        assert_eq!(
            order,
            vec![
                TOKEN_URL.to_string(),
                DEVICES.to_string(),
                TOKEN_URL.to_string(),
                THINGS.to_string(),
                format!("{THINGS}/42/properties"),
            ]
        );
    }

    #[tokio::test]
    async fn scope_limits_requests() {
        let transport = transport();

        let snapshot = run(&transport, &credentials(), &Settings::default(), Scope::Things)
            .await
            .unwrap();

        assert!(snapshot.devices.is_none());
        assert!(snapshot.things.is_some());
        assert_eq!(transport.count("GET", DEVICES), 0);
        assert_eq!(transport.count("POST", TOKEN_URL), 1);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_other_half_intact() {
        let transport = MockTransport::new()
            .on("POST", TOKEN_URL, 200, r#"{"access_token":"tok"}"#)
            .on("GET", DEVICES, 503, "unavailable")
            .on("GET", THINGS, 200, "[]");

        let snapshot = run(&transport, &credentials(), &Settings::default(), Scope::All)
            .await
            .unwrap();

        assert!(snapshot.devices.is_none());
        assert_eq!(snapshot.things, Some(Vec::new()));
    }

    #[tokio::test]
    async fn auth_failure_aborts_run() {
        let transport = MockTransport::new().on("POST", TOKEN_URL, 400, "invalid_grant");

        let err = run(&transport, &credentials(), &Settings::default(), Scope::All)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Rejected { status: 400, .. }));
        assert_eq!(transport.calls().len(), 1);
    }
}

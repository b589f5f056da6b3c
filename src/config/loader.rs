use anyhow::{Context, Result};
use url::Url;

use crate::config::Settings;

pub fn load_from_file(file_path: &str) -> Result<Settings> {
    let contents = std::fs::read_to_string(file_path).context("error reading config file")?;
    load_from_str(&contents)
}

pub fn load_from_str(contents: &str) -> Result<Settings> {
    let settings: Settings = serde_yml::from_str(contents).context("yaml parsing failed")?;
    Url::parse(settings.base_url())
        .with_context(|| format!("invalid base_url '{}'", settings.base_url()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = load_from_str("{}").unwrap();
        assert_eq!(settings.base_url(), "https://api2.arduino.cc");
        assert_eq!(settings.audience(), "https://api2.arduino.cc/iot");
        assert_eq!(settings.origin(), "https://api2.arduino.cc");
        assert_eq!(settings.thing_name(), "PetHealth");
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.preflight());
        assert!(!settings.tls_insecure());
        assert_eq!(settings.log_level(), "info");
    }

    #[test]
    fn overrides_are_read() {
        let settings = load_from_str(
            "base_url: http://localhost:9000\n\
             thing_name: BarnSensors\n\
             timeout: 5\n\
             preflight: false\n\
             log_level: debug\n",
        )
        .unwrap();
        assert_eq!(settings.base_url(), "http://localhost:9000");
        assert_eq!(settings.thing_name(), "BarnSensors");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert!(!settings.preflight());
        assert_eq!(settings.log_level(), "debug");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(load_from_str("base_url: not a url\n").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(load_from_str("thing: PetHealth\n").is_err());
    }
}

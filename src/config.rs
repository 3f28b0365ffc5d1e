use std::collections::HashMap;

use crate::error::Error;
use crate::transport::{FileTransport, Smtp, Transport};

pub const DEFAULT_PATH: &str = "/etc/courier/courier.toml";
const ENV_PREFIX: &str = "COURIER";

/// Loads Courier config from the filesystem and merges it with any
/// environment variables prefixed with COURIER_.
///
/// This function will panic on error.
pub fn load_config(path: Option<&str>) -> HashMap<String, String> {
    config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_PATH)))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .unwrap()
        .try_deserialize::<HashMap<String, String>>()
        .unwrap()
}

/// Build the mail transport named by the `transport` key.
///
/// `file` needs `file_path`; `smtp` needs `smtp_host` and optionally
/// `smtp_username`/`smtp_password`/`smtp_port` (default 587) for an
/// authenticated relay.
pub fn transport_from_config(
    settings: &HashMap<String, String>,
) -> Result<Box<dyn Transport>, Error> {
    match settings.get("transport").map(String::as_str) {
        Some("file") => {
            let dir = settings
                .get("file_path")
                .ok_or_else(|| Error::Config("file transport requires file_path".to_string()))?;

            Ok(Box::new(FileTransport::new(dir.as_str())))
        }
        Some("smtp") => {
            let host = settings
                .get("smtp_host")
                .ok_or_else(|| Error::Config("smtp transport requires smtp_host".to_string()))?;

            let transport = match (settings.get("smtp_username"), settings.get("smtp_password")) {
                (Some(username), Some(password)) => {
                    let port = match settings.get("smtp_port") {
                        Some(port) => port
                            .parse::<u16>()
                            .map_err(|_| Error::Config(format!("invalid smtp_port: {}", port)))?,
                        None => 587,
                    };
                    Smtp::relay_with_credentials(host, username, password, port)?
                }
                _ => Smtp::relay(host)?,
            };

            Ok(Box::new(transport))
        }
        Some(other) => Err(Error::Config(format!("unknown transport: {}", other))),
        None => Err(Error::Config("no transport configured".to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn file_transport_needs_a_path() {
        assert!(transport_from_config(&settings(&[("transport", "file")])).is_err());
        assert!(transport_from_config(&settings(&[
            ("transport", "file"),
            ("file_path", "/tmp/mail"),
        ]))
        .is_ok());
    }

    #[test]
    fn unknown_transport_is_an_error() {
        let err = transport_from_config(&settings(&[("transport", "carrier-pigeon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_transport_is_an_error() {
        assert!(transport_from_config(&settings(&[])).is_err());
    }

    #[test]
    fn bad_smtp_port_is_an_error() {
        let err = transport_from_config(&settings(&[
            ("transport", "smtp"),
            ("smtp_host", "localhost"),
            ("smtp_username", "user"),
            ("smtp_password", "pass"),
            ("smtp_port", "not-a-port"),
        ]))
        .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }
}

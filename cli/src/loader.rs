//! Payload loading from disk or over HTTP.
//!
//! Loading is the only fallible step before presentation: a payload that
//! fails to read or decode never reaches the insight engine.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};
use vitals_protocol::BatteryPayload;

use crate::config::UserConfig;

const USER_AGENT: &str = concat!("vitals/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Invalid payload from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    File(PathBuf),
    Url(String),
}

impl PayloadSource {
    /// Arguments starting with `http://` or `https://` are URLs, anything else a path.
    pub fn parse(arg: &str) -> Self {
        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            PayloadSource::Url(arg.to_string())
        } else {
            PayloadSource::File(PathBuf::from(arg))
        }
    }

    /// Uses the command-line argument if present, else the configured payload path.
    pub fn resolve(arg: Option<&str>, config: &UserConfig) -> Self {
        match arg {
            Some(arg) => Self::parse(arg),
            None => PayloadSource::File(config.payload_path.clone()),
        }
    }
}

impl fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::File(path) => write!(f, "{}", path.display()),
            PayloadSource::Url(url) => write!(f, "{}", url),
        }
    }
}

fn read_bytes(source: &PayloadSource) -> Result<Vec<u8>, LoadError> {
    match source {
        PayloadSource::File(path) => fs::read(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
        PayloadSource::Url(url) => {
            let http_err = |source| LoadError::Http {
                url: url.clone(),
                source,
            };
            let mut response = ureq::get(url)
                .header("User-Agent", USER_AGENT)
                .call()
                .map_err(http_err)?;
            response.body_mut().read_to_vec().map_err(http_err)
        }
    }
}

/// Decodes a payload, tagging errors with where the bytes came from.
pub fn decode_payload(bytes: &[u8], origin: &str) -> Result<BatteryPayload, LoadError> {
    BatteryPayload::from_slice(bytes).map_err(|source| LoadError::Decode {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_payload(source: &PayloadSource) -> Result<BatteryPayload, LoadError> {
    info!(%source, "Loading payload");
    let bytes = read_bytes(source)?;
    let payload = decode_payload(&bytes, &source.to_string())?;
    debug!(
        bytes = bytes.len(),
        history_entries = payload.history.len(),
        "Payload decoded"
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            PayloadSource::parse("https://example.com/battery-data.json"),
            PayloadSource::Url("https://example.com/battery-data.json".to_string())
        );
        assert_eq!(
            PayloadSource::parse("HTTP://host/data.json"),
            PayloadSource::Url("HTTP://host/data.json".to_string())
        );
        assert_eq!(
            PayloadSource::parse("reports/battery-data.json"),
            PayloadSource::File(PathBuf::from("reports/battery-data.json"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_config() {
        let config = UserConfig::default();
        assert_eq!(
            PayloadSource::resolve(None, &config),
            PayloadSource::File(PathBuf::from("battery-data.json"))
        );
        assert_eq!(
            PayloadSource::resolve(Some("other.json"), &config),
            PayloadSource::File(PathBuf::from("other.json"))
        );
    }

    #[test]
    fn test_decode_error_is_reported() {
        let err = decode_payload(b"{ not json", "upload.json").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().starts_with("Invalid payload from upload.json"));
    }

    #[test]
    fn test_decode_rejects_string_numbers() {
        let err = decode_payload(br#"{"battery": {"cycle_count": "12"}}"#, "x").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = PayloadSource::File(PathBuf::from("/nonexistent/vitals/payload.json"));
        assert!(matches!(load_payload(&source), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("vitals-loader-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"battery": {"design_capacity_mwh": 50000, "full_charge_capacity_mwh": 48000}}"#,
        )
        .unwrap();

        let payload = load_payload(&PayloadSource::File(path.clone())).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(payload.battery.design_capacity_mwh, Some(50000.0));
        assert_eq!(payload.battery.full_charge_capacity_mwh, Some(48000.0));
    }
}

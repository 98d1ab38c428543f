use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use vitals_report::REPORT_FILENAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

fn default_payload_path() -> PathBuf {
    PathBuf::from("battery-data.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    pub output_dir: PathBuf,
    pub json_output: String,
    pub report_filename: String,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            json_output: "battery-data.json".to_string(),
            report_filename: REPORT_FILENAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    /// Payload shown when no source is given on the command line.
    #[serde(default = "default_payload_path")]
    pub payload_path: PathBuf,
    #[serde(default)]
    pub collect: CollectConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            payload_path: default_payload_path(),
            collect: CollectConfig::default(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("vitals")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("vitals")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parses TOML config, falling back to defaults when it is invalid.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let _ = ensure_dirs();
        let path = config_path();
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("OFF"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("nonsense"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
        assert_eq!(
            LogLevel::Trace.as_tracing_level(),
            Some(tracing::Level::TRACE)
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = UserConfig::parse("log_level = \"info\"\n\n[collect]\noutput_dir = \"C:/reports\"\n");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.payload_path, PathBuf::from("battery-data.json"));
        assert_eq!(config.collect.output_dir, PathBuf::from("C:/reports"));
        assert_eq!(config.collect.report_filename, "battery-report.html");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        assert_eq!(UserConfig::parse("log_level = [1, 2"), UserConfig::default());
    }

    #[test]
    fn test_config_survives_toml() {
        let config = UserConfig {
            log_level: LogLevel::Debug,
            payload_path: PathBuf::from("/tmp/payload.json"),
            collect: CollectConfig::default(),
        };
        let content = toml::to_string_pretty(&config).unwrap();
        assert_eq!(UserConfig::parse(&content), config);
    }
}

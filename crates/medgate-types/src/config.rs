//! Configuration schema and loading.
//!
//! All fields carry serde defaults, so an absent or empty config file
//! yields a fully usable configuration. Unknown fields are ignored for
//! forward compatibility.
//!
//! Discovery chain (first hit wins):
//! 1. explicit path override (CLI `--config`)
//! 2. `MEDGATE_CONFIG` env var
//! 3. `~/.medgate/config.json`

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MedgateError, Result};

/// Env var that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MEDGATE_CONFIG";

// ── Root config ──────────────────────────────────────────────────────────

/// Root configuration for the medgate service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Decision-rule settings.
    #[serde(default)]
    pub model: ModelConfig,
}

impl Config {
    /// Load configuration from the given path override or via auto-discovery.
    ///
    /// With an explicit override, a missing file is an error. Without one,
    /// a missing file falls back to [`Config::default`].
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let path = match path_override {
            Some(p) => {
                if !p.exists() {
                    return Err(MedgateError::ConfigNotFound {
                        path: p.display().to_string(),
                    });
                }
                Some(p.to_path_buf())
            }
            None => discover_config_path(),
        };

        let config = match path {
            Some(p) => {
                let contents = std::fs::read_to_string(&p)?;
                serde_json::from_str(&contents)?
            }
            None => Config::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.server.host.parse::<IpAddr>().map_err(|_| {
            MedgateError::InvalidBindAddress {
                addr: format!("{}:{}", self.server.host, self.server.port),
            }
        })?;

        for (name, value) in [
            ("high_risk_confidence", self.model.high_risk_confidence),
            ("low_risk_confidence", self.model.low_risk_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MedgateError::ConfigInvalid {
                    reason: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }

        Ok(())
    }
}

/// Discover the config file path without loading it.
///
/// Checks `MEDGATE_CONFIG`, then `~/.medgate/config.json`. Returns `None`
/// when neither exists.
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        let p = PathBuf::from(env_path);
        if p.exists() {
            return Some(p);
        }
    }
    if let Some(home) = dirs::home_dir() {
        let p = home.join(".medgate").join("config.json");
        if p.exists() {
            return Some(p);
        }
    }
    None
}

// ── Server ───────────────────────────────────────────────────────────────

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty means permissive.
    #[serde(default, alias = "corsOrigins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    80
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Model ────────────────────────────────────────────────────────────────

/// Decision-rule configuration.
///
/// The threshold and confidence values are placeholders with no clinical
/// basis; they are config-backed so deployments can adjust them without a
/// rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Version tag reported in every prediction response.
    #[serde(default = "default_model_version")]
    pub version: String,

    /// Age above which (strictly) a patient is classified high risk.
    #[serde(default = "default_age_threshold", alias = "ageThreshold")]
    pub age_threshold: f64,

    /// Confidence reported with high-risk classifications.
    #[serde(default = "default_high_risk_confidence", alias = "highRiskConfidence")]
    pub high_risk_confidence: f64,

    /// Confidence reported with low-risk classifications.
    #[serde(default = "default_low_risk_confidence", alias = "lowRiskConfidence")]
    pub low_risk_confidence: f64,
}

fn default_model_version() -> String {
    "v1.0.0".into()
}
fn default_age_threshold() -> f64 {
    60.0
}
fn default_high_risk_confidence() -> f64 {
    0.92
}
fn default_low_risk_confidence() -> f64 {
    0.75
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: default_model_version(),
            age_threshold: default_age_threshold(),
            high_risk_confidence: default_high_risk_confidence(),
            low_risk_confidence: default_low_risk_confidence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_service_contract() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 80);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.model.version, "v1.0.0");
        assert_eq!(config.model.age_threshold, 60.0);
        assert_eq!(config.model.high_risk_confidence, 0.92);
        assert_eq!(config.model.low_risk_confidence, 0.75);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.model.version, "v1.0.0");
    }

    #[test]
    fn camel_case_aliases_accepted() {
        let config: Config = serde_json::from_str(
            r#"{"server": {"corsOrigins": ["http://localhost:3000"]},
                "model": {"ageThreshold": 65.0}}"#,
        )
        .unwrap();
        assert_eq!(config.server.cors_origins.len(), 1);
        assert_eq!(config.model.age_threshold, 65.0);
    }

    #[test]
    fn bind_addr_formats_host_and_port() {
        let server = ServerConfig::default();
        assert_eq!(server.bind_addr(), "0.0.0.0:80");
    }

    #[test]
    fn validate_rejects_hostname_bind() {
        let mut config = Config::default();
        config.server.host = "example.com".into();
        assert!(matches!(
            config.validate(),
            Err(MedgateError::InvalidBindAddress { .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_confidence() {
        let mut config = Config::default();
        config.model.high_risk_confidence = 1.5;
        assert!(matches!(
            config.validate(),
            Err(MedgateError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn validate_accepts_ipv6_host() {
        let mut config = Config::default();
        config.server.host = "::1".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_with_missing_override_errors() {
        let result = Config::load(Some(Path::new("/nonexistent/medgate.json")));
        assert!(matches!(result, Err(MedgateError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server": {{"host": "127.0.0.1", "port": 9000}}}}"#).unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let result = Config::load(Some(file.path()));
        assert!(matches!(result, Err(MedgateError::Json(_))));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}

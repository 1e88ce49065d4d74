//! Remote store configuration (YAML)
//!
//! Every field is optional. Unset fields fall through to the platform's
//! standard discovery chain (environment variables, shared config files,
//! instance metadata).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::traits::{ConfigError, ConfigResult};

/// Overrides applied on top of ambient AWS configuration discovery
///
/// # Example
///
/// ```
/// use envkit_core::config::RemoteStoreConfig;
///
/// let config = RemoteStoreConfig::from_yaml_str("region: eu-west-1\n").unwrap();
/// assert_eq!(config.region.as_deref(), Some("eu-west-1"));
/// assert!(config.endpoint_url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteStoreConfig {
    /// Region to send requests to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Alternative endpoint, e.g. a local emulator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Named profile from the shared config files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl RemoteStoreConfig {
    /// Pure ambient discovery, no overrides
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check that every override that is set is usable
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("region", &self.region),
            ("endpoint_url", &self.endpoint_url),
            ("profile", &self.profile),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
        }

        if let Some(url) = &self.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "endpoint_url {:?} must start with http:// or https://",
                    url
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_has_no_overrides() {
        let config = RemoteStoreConfig::new();
        assert_eq!(config, RemoteStoreConfig::default());
        assert!(config.region.is_none() && config.endpoint_url.is_none() && config.profile.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RemoteStoreConfig::new()
            .with_region("us-east-1")
            .with_endpoint_url("http://localhost:4566")
            .with_profile("dev");

        assert_eq!(config.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.profile.as_deref(), Some("dev"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
region: ap-southeast-2
endpoint_url: https://secretsmanager.internal
profile: ops
"#;
        let config = RemoteStoreConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            RemoteStoreConfig::new()
                .with_region("ap-southeast-2")
                .with_endpoint_url("https://secretsmanager.internal")
                .with_profile("ops")
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = RemoteStoreConfig::from_yaml_str("regoin: us-east-1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_rejects_empty_values() {
        let err = RemoteStoreConfig::new().with_region("  ").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("region")));
    }

    #[test]
    fn test_rejects_endpoint_without_scheme() {
        let err = RemoteStoreConfig::from_yaml_str("endpoint_url: localhost:4566\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("localhost:4566")));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region: eu-central-1").unwrap();

        let config = RemoteStoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RemoteStoreConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

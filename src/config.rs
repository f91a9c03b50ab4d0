use crate::error::{OpencgaError, OpencgaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// REST API version used when the configuration does not name one
pub const DEFAULT_API_VERSION: &str = "v2";

/// Connection settings for an OpenCGA server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Server URL, e.g. `https://ws.opencb.org/opencga-prod`
    pub host: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            version: default_version(),
            timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis().try_into().unwrap_or(u64::MAX));
        self
    }

    /// Parse a configuration from its JSON representation
    pub fn from_json_str(json: &str) -> OpencgaResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file on disk
    pub fn from_json_file(path: impl AsRef<Path>) -> OpencgaResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> OpencgaResult<()> {
        if self.host.trim().is_empty() {
            return Err(OpencgaError::missing_argument("host"));
        }
        if self.version.trim().is_empty() || self.version.contains('/') {
            return Err(OpencgaError::invalid_param(format!(
                "Invalid API version: '{}'",
                self.version
            )));
        }
        if self.timeout_ms == Some(0) {
            return Err(OpencgaError::invalid_param("Timeout must be at least 1 ms"));
        }
        Ok(())
    }

    /// Base URL of the REST API: `{host}/webservices/rest/{version}`
    pub fn rest_url(&self) -> OpencgaResult<Url> {
        self.validate()?;
        let mut url = Url::parse(&self.host)?;
        url.path_segments_mut()
            .map_err(|_| OpencgaError::invalid_param(format!("Host cannot be a base URL: {}", self.host)))?
            .pop_if_empty()
            .extend(["webservices", "rest", self.version.as_str()]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = ClientConfig::from_json_str(r#"{"host": "http://localhost:8080/opencga"}"#).unwrap();
        assert_eq!(config.version, "v2");
        assert_eq!(config.timeout(), None);
        assert!(config.user_agent.starts_with("opencga_client/"));
    }

    #[test]
    fn rest_url_appends_webservices_prefix() {
        let url = ClientConfig::new("http://localhost:8080/opencga/").rest_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/opencga/webservices/rest/v2");

        let url = ClientConfig::new("https://ws.example.org").with_version("v1").rest_url().unwrap();
        assert_eq!(url.as_str(), "https://ws.example.org/webservices/rest/v1");
    }

    #[test]
    fn rejects_empty_host_and_bad_version() {
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"host": ""}"#),
            Err(OpencgaError::MissingArgument(_))
        ));
        assert!(matches!(
            ClientConfig::new("http://localhost").with_version("v2/extra").rest_url(),
            Err(OpencgaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn keeps_sub_second_timeouts() {
        let config = ClientConfig::new("http://localhost").with_timeout(Duration::from_millis(500));
        assert_eq!(config.timeout_ms, Some(500));
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"host": "http://localhost", "timeoutMs": 0}"#),
            Err(OpencgaError::InvalidParameter(_))
        ));
        assert!(matches!(
            ClientConfig::new("http://localhost").with_timeout(Duration::ZERO).rest_url(),
            Err(OpencgaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "http://opencga:9090", "version": "v2", "timeoutMs": 30000}}"#).unwrap();

        let config = ClientConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.host, "http://opencga:9090");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }
}

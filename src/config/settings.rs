//! Settings structures for exa-research configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API key placeholder, replaced by the real key from settings or env
pub const DEFAULT_API_KEY: &str = "EXA_API_KEY";

/// Default lookback window in years
pub const DEFAULT_YEARS: f64 = 3.0;

/// Default Exa API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub exa: ExaSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (EXA_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub(crate) fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("EXA_API_KEY") {
            self.exa.api_key = val;
        }
        if let Some(val) = lookup("EXA_YEARS") {
            if let Ok(years) = val.parse() {
                self.exa.years = years;
            }
        }
        if let Some(val) = lookup("EXA_BASE_URL") {
            self.exa.base_url = val;
        }
    }

    /// Check that the settings describe a usable tool
    pub fn validate(&self) -> Result<()> {
        self.exa.validate()?;
        if self.outgoing.request_timeout <= 0.0
            || Duration::try_from_secs_f64(self.outgoing.request_timeout).is_err()
        {
            bail!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                self.outgoing.request_timeout
            );
        }
        Ok(())
    }
}

/// Exa tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExaSettings {
    /// API key sent as `x-api-key`
    pub api_key: String,
    /// Number of years to search back in time
    pub years: f64,
    /// API base URL
    pub base_url: String,
}

impl Default for ExaSettings {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            years: DEFAULT_YEARS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ExaSettings {
    /// Settings with the given key and default everything else
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.years.is_finite() || self.years <= 0.0 {
            bail!("exa.years must be a positive number, got {}", self.years);
        }
        if self.api_key.trim().is_empty() {
            bail!("exa.api_key must not be empty");
        }
        Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("exa.base_url {:?} is invalid: {}", self.base_url, e))?;
        Ok(())
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// User agent string (none = crate default)
    pub user_agent: Option<String>,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            user_agent: None,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

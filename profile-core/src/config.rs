//! Configuration management
//!
//! Settings live in `settings.json` inside the profile directory:
//! ```json
//! {
//!   "demoMode": false,
//!   "credentialScheme": "sha256",
//!   "gateway": { "url": "https://www.random.org/integers/?...", "timeoutSecs": 10 }
//! }
//! ```
//! Every key is optional. Keys this crate does not know about are kept when
//! the file is saved again.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::random_org::{DEFAULT_GATEWAY_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::result::{Error, Result};
use crate::domain::CredentialScheme;

/// Name of the settings file inside the profile directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credential_scheme: Option<CredentialScheme>,
    #[serde(default)]
    gateway: GatewaySettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Effective configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub demo_mode: bool,
    pub credential_scheme: CredentialScheme,
    pub gateway_url: String,
    #[serde(with = "duration_secs")]
    pub gateway_timeout: Duration,
    // Keep the raw settings for preservation when saving
    #[serde(skip)]
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            credential_scheme: CredentialScheme::default(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            gateway_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the profile directory
    ///
    /// A missing settings file gives the defaults. Environment overrides:
    /// - `PROFILE_DEMO_MODE` (true/false, 1/0, yes/no)
    /// - `PROFILE_GATEWAY_URL`
    pub fn load(profile_dir: &Path) -> Result<Self> {
        let mut config = Self::load_file(profile_dir)?;
        config.apply_overrides(
            std::env::var("PROFILE_DEMO_MODE").ok().as_deref(),
            std::env::var("PROFILE_GATEWAY_URL").ok().as_deref(),
        );
        Ok(config)
    }

    /// Load config from the settings file only, ignoring the environment
    pub fn load_file(profile_dir: &Path) -> Result<Self> {
        let settings_path = profile_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content)?
        } else {
            SettingsFile::default()
        };

        let timeout_secs = raw.gateway.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::config("gateway.timeoutSecs must be greater than zero"));
        }

        Ok(Self {
            demo_mode: raw.demo_mode,
            credential_scheme: raw.credential_scheme.unwrap_or_default(),
            gateway_url: raw
                .gateway
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            gateway_timeout: Duration::from_secs(timeout_secs),
            _raw_settings: raw,
        })
    }

    fn apply_overrides(&mut self, demo_mode: Option<&str>, gateway_url: Option<&str>) {
        match demo_mode {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => self.demo_mode = true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => self.demo_mode = false,
            _ => {}
        }
        if let Some(url) = gateway_url.filter(|u| !u.trim().is_empty()) {
            self.gateway_url = url.trim().to_string();
        }
    }

    /// Save config to the profile directory
    /// Preserves other settings that this crate doesn't manage
    pub fn save(&self, profile_dir: &Path) -> Result<()> {
        let settings_path = profile_dir.join(SETTINGS_FILE);

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content)?
        } else {
            self._raw_settings.clone()
        };

        settings.demo_mode = self.demo_mode;
        settings.credential_scheme = Some(self.credential_scheme);
        settings.gateway.url = Some(self.gateway_url.clone());
        settings.gateway.timeout_secs = Some(self.gateway_timeout.as_secs());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}

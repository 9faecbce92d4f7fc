//! Layered settings: defaults, then config files, then `STARHUNTER_*`
//! environment variables, then command-line flags.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use starhunter_action::UnknownActionPolicy;
use starhunter_credential::{CredentialData, StaticCredentialProvider};
use starhunter_log::Format;
use starhunter_node::{STARHUNTER_API, STARHUNTER_BIRTHDAYS_API, NodeProfile};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG: &str = "starhunter.toml";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: NodeProfile,
    /// Instance base URL, or the full GraphQL URL for the birthdays profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub continue_on_fail: bool,
    pub unknown_action: UnknownActionPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<Format>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: NodeProfile::default(),
            base_url: None,
            access_token: None,
            timeout_secs: starhunter_request::DEFAULT_TIMEOUT.as_secs(),
            continue_on_fail: false,
            unknown_action: UnknownActionPolicy::default(),
            log_level: None,
            log_format: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("profile", &self.profile)
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("continue_on_fail", &self.continue_on_fail)
            .field("unknown_action", &self.unknown_action)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// Values set explicitly on the command line. Unset flags leave lower
/// layers alone.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<NodeProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_fail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_action: Option<UnknownActionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Settings {
    /// Merge every layer. `explicit` is a `--config` path, which must exist.
    pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user) = user_config() {
            figment = figment.merge(Toml::file(user));
        }
        figment = figment.merge(Toml::file(LOCAL_CONFIG));

        if let Some(path) = explicit {
            anyhow::ensure!(path.is_file(), "config file {} does not exist", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("STARHUNTER_").ignore(&["log", "config"]))
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("invalid configuration")
    }

    /// Credential records for both endpoint styles, when both values are set.
    ///
    /// The node picks the one its credential type names.
    pub fn credentials(&self) -> StaticCredentialProvider {
        let (Some(base_url), Some(token)) = (&self.base_url, &self.access_token) else {
            return StaticCredentialProvider::new();
        };
        let record = CredentialData::new()
            .with_field("baseUrl", base_url.clone())
            .with_secret("accessToken", token.clone());
        StaticCredentialProvider::new()
            .with(STARHUNTER_API, record.clone())
            .with(STARHUNTER_BIRTHDAYS_API, record)
    }

    /// Logger configuration: environment first, then the settings on top.
    pub fn log_config(&self) -> starhunter_log::Config {
        let mut config = starhunter_log::Config::from_env();
        if let Some(level) = &self.log_level {
            config = config.with_level(level.clone());
        }
        if let Some(format) = self.log_format {
            config = config.with_format(format);
        }
        config
    }
}

fn user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("starhunter").join("config.toml"))
}

//! Client settings.

use std::{path::PathBuf, time::Duration};

use common_utils::{errors::CustomResult, validation};
use error_stack::{report, ResultExt};
use masking::{ApiKey, PeekInterface, Secret};
use router_env::{env, Config};
use serde::Deserialize;

use crate::{consts, errors::ConfigurationError};

/// Config prefix used for environment variable overrides, e.g. `ASAAS__API_KEY`.
pub const ENV_PREFIX: &str = "ASAAS";

/// Asaas environment the client talks to.
#[derive(
    Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum AsaasEnvironment {
    #[default]
    Sandbox,
    Production,
}

impl AsaasEnvironment {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => consts::SANDBOX_BASE_URL,
            Self::Production => consts::PRODUCTION_BASE_URL,
        }
    }
}

/// Settings of [`crate::client::AsaasClient`], read from the `[asaas]` table.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientSettings {
    pub environment: AsaasEnvironment,
    /// Sent as the `access_token` header.
    pub api_key: Secret<String, ApiKey>,
    /// Replaces the environment's base URL, e.g. to point at a mock server.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            environment: AsaasEnvironment::default(),
            api_key: Secret::default(),
            base_url: None,
            timeout: consts::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    asaas: ClientSettings,
}

impl ClientSettings {
    pub fn new(environment: AsaasEnvironment, api_key: impl Into<String>) -> Self {
        Self {
            environment,
            api_key: Secret::new(api_key.into()),
            ..Self::default()
        }
    }

    /// Reads `config/{RUN_ENV}.toml` and `ASAAS__*` variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_with_config_path(None)
    }

    /// Same as [`Self::load`], reading the given file instead.
    pub fn load_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ::config::ConfigError> {
        let config_path = Config::config_path(env::which(), explicit_config_path);

        Self::from_builder(
            ::config::Config::builder()
                .add_source(::config::File::from(config_path).required(false)),
        )
    }

    fn from_builder(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
    ) -> Result<Self, ::config::ConfigError> {
        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .keep_prefix(true)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<SettingsFile>()
            .map(|file| file.asaas)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn resolved_base_url(&self) -> CustomResult<String, ConfigurationError> {
        match self.base_url.as_deref().map(str::trim) {
            None | Some("") => Ok(self.environment.base_url().to_owned()),
            Some(base_url) => {
                validation::validate_url(base_url)
                    .change_context(ConfigurationError::InvalidBaseUrl(base_url.to_owned()))?;
                Ok(base_url.trim_end_matches('/').to_owned())
            }
        }
    }

    /// Rejects settings which cannot authenticate.
    pub fn validate(&self) -> CustomResult<(), ConfigurationError> {
        if self.api_key.peek().trim().is_empty() {
            return Err(report!(ConfigurationError::MissingApiKey));
        }
        self.resolved_base_url().map(|_| ())
    }
}

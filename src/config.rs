//! Configuration constants and utilities for scriptorium
//!
//! The only runtime setting is the API base URL. It is resolved once at
//! startup from, in order: an explicit override, the `API_BASE` environment
//! variable, the `api_base` key of a profile in the INI profile file, and
//! finally the loopback default.

use std::fmt;
use std::path::Path;

use ini::Ini;

use crate::error::{Error, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable carrying the API base URL
pub const API_BASE_ENV_VAR: &str = "API_BASE";

/// Default profile file path for scriptorium
pub const DEFAULT_PROFILE_PATH: &str = "~/.scriptorium/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "SCRIPTORIUM_PROFILE_PATH";

/// Profile key holding the API base URL
pub const API_BASE_KEY: &str = "api_base";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Where the resolved API base URL came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBaseSource {
    Override,
    Environment,
    Profile(String),
    Default,
}

impl fmt::Display for ApiBaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiBaseSource::Override => write!(f, "command line"),
            ApiBaseSource::Environment => write!(f, "{API_BASE_ENV_VAR} environment variable"),
            ApiBaseSource::Profile(name) => write!(f, "profile '{name}'"),
            ApiBaseSource::Default => write!(f, "built-in default"),
        }
    }
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub source: ApiBaseSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            source: ApiBaseSource::Default,
        }
    }
}

impl ClientConfig {
    /// Resolve the configuration from the process environment and the profile file.
    ///
    /// The profile file is only read when neither the override nor `API_BASE`
    /// supplies a value.
    pub fn load(profile_name: &str, api_base_override: Option<&str>) -> Result<Self> {
        let env_value = std::env::var(API_BASE_ENV_VAR).ok();
        let profile_path = get_profile_path();
        tracing::debug!("Resolving API base (profile '{profile_name}', file '{profile_path}')");

        let store = ProfileStore::new(&profile_path);
        let config = resolve_api_base(
            api_base_override,
            env_value.as_deref(),
            || store.get_api_base(profile_name),
            profile_name,
        )?;

        tracing::debug!("Using API base {} from {}", config.api_base, config.source);
        Ok(config)
    }
}

/// Pick the API base URL by precedence. Blank values are treated as unset.
pub fn resolve_api_base<F>(
    api_base_override: Option<&str>,
    env_value: Option<&str>,
    profile_lookup: F,
    profile_name: &str,
) -> Result<ClientConfig>
where
    F: FnOnce() -> Result<Option<String>>,
{
    if let Some(value) = non_blank(api_base_override) {
        return Ok(ClientConfig {
            api_base: value.to_string(),
            source: ApiBaseSource::Override,
        });
    }

    if let Some(value) = non_blank(env_value) {
        return Ok(ClientConfig {
            api_base: value.to_string(),
            source: ApiBaseSource::Environment,
        });
    }

    if let Some(value) = profile_lookup()?.filter(|v| !v.trim().is_empty()) {
        return Ok(ClientConfig {
            api_base: value.trim().to_string(),
            source: ApiBaseSource::Profile(profile_name.to_string()),
        });
    }

    Ok(ClientConfig::default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// INI file of named profiles, e.g.
///
/// ```ini
/// [default]
/// api_base = http://127.0.0.1:8000
/// ```
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: String,
}

impl ProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read `api_base` from the named profile.
    ///
    /// A missing file, section or key yields `None`; a file that exists but
    /// cannot be parsed is an error.
    pub fn get_api_base(&self, profile_name: &str) -> Result<Option<String>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' not found", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path).map_err(|e| Error::Profile {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let value = ini
            .section(Some(profile_name))
            .and_then(|section| section.get(API_BASE_KEY))
            .map(str::to_string);

        if value.is_none() {
            tracing::debug!("Profile '{profile_name}' has no {API_BASE_KEY}");
        }
        Ok(value)
    }
}

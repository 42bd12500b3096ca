//! Server configuration
//!
//! Read from Shuttle secrets (Secrets.toml) at startup.

use anyhow::{bail, Result};

const PATH_PREFIX_KEY: &str = "MSCUSTOMER_PATH_PREFIX";
const SWAGGER_UI_KEY: &str = "MSCUSTOMER_SWAGGER_UI";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Prefix the customer routes are mounted under, e.g. `/api/v1`
    pub path_prefix: Option<String>,
    /// Serve Swagger UI and the OpenAPI document
    pub swagger_ui: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            path_prefix: None,
            swagger_ui: true,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let path_prefix = match lookup(PATH_PREFIX_KEY) {
            Some(raw) => parse_prefix(&raw)?,
            None => defaults.path_prefix,
        };

        let swagger_ui = match lookup(SWAGGER_UI_KEY) {
            Some(raw) => parse_flag(SWAGGER_UI_KEY, &raw)?,
            None => defaults.swagger_ui,
        };

        Ok(Self {
            path_prefix,
            swagger_ui,
        })
    }
}

fn parse_prefix(raw: &str) -> Result<Option<String>> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.starts_with('/') {
        bail!("{PATH_PREFIX_KEY} must start with '/', got {raw:?}");
    }
    Ok(Some(trimmed.to_string()))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => bail!("{key} must be true or false, got {raw:?}"),
    }
}

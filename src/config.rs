use crate::constants::{
    DEFAULT_FTP_PORT, DEFAULT_ROOT_PATH, DEFAULT_USER, KEY_DIRECTORY, KEY_FILENAME, KEY_PASSWORD,
    KEY_PORT, KEY_ROOT_PATH, KEY_SERVER, KEY_USER,
};
use crate::core_error::BindingError;
use crate::core_path::resolver::clean_root;
use crate::helpers::{metadata_value, non_empty_value};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Static binding configuration, fixed at initialisation.
///
/// | key         | default     |
/// |-------------|-------------|
/// | `server`    | required    |
/// | `port`      | `21`        |
/// | `rootPath`  | `/`         |
/// | `user`      | `anonymous` |
/// | `password`  | empty       |
/// | `directory` | empty       |
#[derive(Clone, PartialEq, Eq)]
pub struct BindingConfig {
    /// Cleaned confinement root.
    pub root_path: String,
    /// Dial address, always `host:port`.
    pub server: String,
    pub user: String,
    pub password: String,
    /// Default directory, relative to the root. Empty means the root itself.
    pub directory: String,
}

/// Per-request values taken from the request metadata. Untrusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverrides {
    pub directory: Option<String>,
    pub filename: Option<String>,
}

impl RequestOverrides {
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Self {
        Self {
            directory: metadata_value(metadata, KEY_DIRECTORY).map(str::to_string),
            filename: metadata_value(metadata, KEY_FILENAME).map(str::to_string),
        }
    }
}

impl fmt::Debug for BindingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfig")
            .field("root_path", &self.root_path)
            .field("server", &self.server)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("directory", &self.directory)
            .finish()
    }
}

impl BindingConfig {
    /// Builds the configuration from the binding's string properties.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self, BindingError> {
        let server = metadata_value(properties, KEY_SERVER)
            .map(str::trim)
            .unwrap_or_default();
        if server.is_empty() {
            return Err(BindingError::Config(format!("{} is required", KEY_SERVER)));
        }

        let port = match non_empty_value(properties, KEY_PORT) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                BindingError::Config(format!("{} {:?} is not a valid port: {}", KEY_PORT, raw, e))
            })?),
            None => None,
        };

        let root_path = non_empty_value(properties, KEY_ROOT_PATH).unwrap_or(DEFAULT_ROOT_PATH);
        let directory = metadata_value(properties, KEY_DIRECTORY).unwrap_or_default();
        for (key, value) in [(KEY_ROOT_PATH, root_path), (KEY_DIRECTORY, directory)] {
            if value.contains(['\0', '\r', '\n']) {
                return Err(BindingError::Config(format!(
                    "{} contains control characters",
                    key
                )));
            }
        }

        Ok(Self {
            root_path: clean_root(root_path),
            server: fold_port(server, port),
            user: non_empty_value(properties, KEY_USER)
                .unwrap_or(DEFAULT_USER)
                .to_string(),
            password: metadata_value(properties, KEY_PASSWORD)
                .unwrap_or_default()
                .to_string(),
            directory: directory.to_string(),
        })
    }

    /// Applies request overrides. Only a non-empty `directory` replaces the
    /// default; everything else is kept as configured.
    pub fn merge(&self, overrides: &RequestOverrides) -> BindingConfig {
        let mut merged = self.clone();
        if let Some(directory) = overrides.directory.as_deref().filter(|d| !d.is_empty()) {
            merged.directory = directory.to_string();
        }
        merged
    }
}

/// Appends `port` (or the FTP default) unless `server` already names one.
fn fold_port(server: &str, port: Option<u16>) -> String {
    let port = port.unwrap_or(DEFAULT_FTP_PORT);
    if let Some(rest) = server.strip_prefix('[') {
        // Bracketed IPv6 literal
        if rest.contains("]:") {
            return server.to_string();
        }
        return format!("{}:{}", server, port);
    }
    match server.matches(':').count() {
        0 => format!("{}:{}", server, port),
        1 => server.to_string(),
        _ => format!("[{}]:{}", server, port),
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    metadata: HashMap<String, toml::Value>,
}

/// Loads a TOML file with a `[metadata]` table of binding properties.
pub fn load_from_file(path: &str) -> Result<BindingConfig> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path))?;
    let file: ConfigFile = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse configuration file: {}", path))?;

    let mut properties = HashMap::new();
    for (key, value) in file.metadata {
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            other => anyhow::bail!(
                "Unsupported value for {} in {}: {}",
                key,
                path,
                other.type_str()
            ),
        };
        properties.insert(key, value);
    }

    let config = BindingConfig::from_properties(&properties)
        .with_context(|| format!("Invalid binding configuration in {}", path))?;
    Ok(config)
}

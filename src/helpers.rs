use crate::config::BindingConfig;
use log::info;
use std::collections::HashMap;

/// Looks up a metadata value, ignoring the case of the key.
///
/// Runtimes disagree on key casing (`rootPath`, `RootPath`, `rootpath`), so
/// every key the binding recognises is matched this way.
pub fn metadata_value<'a>(metadata: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    metadata
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

/// Like [`metadata_value`], but treats an empty value as absent.
pub fn non_empty_value<'a>(metadata: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    metadata_value(metadata, key).filter(|v| !v.is_empty())
}

// Helper function to log configuration options
pub fn log_config(config: &BindingConfig) {
    info!("  Server: {}", config.server);
    info!("  User: {}", config.user);
    info!("  Root Path: {}", config.root_path);
    if config.directory.is_empty() {
        info!("  Default Directory: <root>");
    } else {
        info!("  Default Directory: {}", config.directory);
    }
}

//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub unmapped: UnmappedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedMode {
    Keep,
    Drop,
    Marker,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnmappedSettings {
    pub policy: UnmappedMode,
    #[serde(default)]
    pub marker: Option<String>,
}

/// What the scanner emits for a Vithkuqi letter with no Latin grapheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UnmappedPolicy {
    #[default]
    Keep,
    Drop,
    Marker(String),
}

impl UnmappedSettings {
    pub fn policy(&self) -> UnmappedPolicy {
        match self.policy {
            UnmappedMode::Keep => UnmappedPolicy::Keep,
            UnmappedMode::Drop => UnmappedPolicy::Drop,
            // validate() guarantees a non-empty marker here
            UnmappedMode::Marker => {
                UnmappedPolicy::Marker(self.marker.clone().unwrap_or_default())
            }
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.unmapped.policy == UnmappedMode::Marker
        && s.unmapped.marker.as_deref().map_or(true, str::is_empty)
    {
        return Err(SettingsError::InvalidValue {
            field: "unmapped.marker".to_string(),
            reason: "must be a non-empty string when policy is \"marker\"".to_string(),
        });
    }
    Ok(())
}

//! Configuration management for linkify-text.
//!
//! Parses `linkify.toml` with serde and provides auto-discovery of the
//! config file in parent directories. The file is a versioned record of the
//! linkify options and the list of autolinked fields:
//!
//! ```toml
//! version = 1
//!
//! [linkify]
//! default_scheme = "https"
//!
//! [linkify.attributes]
//! rel = "${LINKIFY_REL:-nofollow}"
//!
//! [[fields]]
//! set = "Dublin Core"
//! element = "Description"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`.
//!
//! Expanded fields:
//! - `linkify.default_scheme`
//! - `linkify.attributes.*`

mod expand;

use std::path::{Path, PathBuf};

use lt_fields::{FieldRef, FieldSelection};
use lt_linkify::LinkifyOptions;
use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "linkify.toml";

/// Current version of the configuration record.
pub const CONFIG_VERSION: u32 = 1;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the scheme prefixed to schemeless URLs.
    pub default_scheme: Option<String>,
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record format version.
    pub version: u32,
    /// Linkify options as written in the file (before env expansion).
    linkify: LinkifyOptions,
    /// Fields whose values get autolinked.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldRef>,

    /// Resolved linkify options (set after loading).
    #[serde(skip)]
    pub linkify_resolved: LinkifyOptions,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            linkify: LinkifyOptions::default(),
            fields: Vec::new(),
            linkify_resolved: LinkifyOptions::default(),
            config_path: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Record written by an unknown format version.
    #[error("Unsupported configuration version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build reads and writes.
        supported: u32,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`linkify.default_scheme`").
        field: String,
        /// Error message (e.g., "${`LINKIFY_SCHEME`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URI scheme name: a letter followed by letters, digits, `+`, `-` or `.`.
fn require_scheme(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    let mut chars = value.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must be a URI scheme such as http or https, got '{value}'"
        )));
    }
    Ok(())
}

/// Require a usable HTML attribute name other than `href`.
fn require_attribute_name(name: &str) -> Result<(), ConfigError> {
    require_non_empty(name, "linkify.attributes key")?;
    if name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/'))
    {
        return Err(ConfigError::Validation(format!(
            "linkify.attributes key '{name}' is not a valid attribute name"
        )));
    }
    if name.eq_ignore_ascii_case("href") {
        return Err(ConfigError::Validation(
            "linkify.attributes cannot set href".to_owned(),
        ));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `linkify.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(scheme) = &settings.default_scheme {
            self.linkify_resolved.default_scheme.clone_from(scheme);
        }
    }

    /// Resolved options for building a `Linkifier`.
    #[must_use]
    pub fn linkify_options(&self) -> &LinkifyOptions {
        &self.linkify_resolved
    }

    /// Fields currently selected for autolinking.
    #[must_use]
    pub fn selection(&self) -> FieldSelection {
        self.fields.iter().cloned().collect()
    }

    /// Replace the selected fields.
    pub fn set_selection(&mut self, selection: &FieldSelection) {
        self.fields = selection.iter().cloned().collect();
    }

    /// Write the configuration record to `path`.
    ///
    /// Linkify options are written as they appeared in the file, so
    /// `${VAR}` references survive a load/save cycle. The current
    /// [`CONFIG_VERSION`] is always written.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let record = Self {
            version: CONFIG_VERSION,
            linkify: self.linkify.clone(),
            fields: self.fields.clone(),
            ..Self::default()
        };
        let content = toml::to_string_pretty(&record)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), fields = self.fields.len(), "Saved configuration");
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        discover_config_from(&cwd)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse, expand, and validate a configuration record.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.check_version()?;

        // Expand environment variables before validation
        config.linkify_resolved = expand::expand_options(&config.linkify)?;
        config.dedup_fields();

        config.validate()?;
        Ok(config)
    }

    fn check_version(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }
        Ok(())
    }

    /// Collapse repeated field entries, keeping the first occurrence.
    fn dedup_fields(&mut self) {
        let selection = self.selection();
        if selection.len() != self.fields.len() {
            tracing::warn!(
                listed = self.fields.len(),
                unique = selection.len(),
                "Duplicate field entries in configuration"
            );
            self.set_selection(&selection);
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_version()?;
        self.validate_linkify()?;
        self.validate_fields()?;
        Ok(())
    }

    /// Validate resolved linkify options.
    fn validate_linkify(&self) -> Result<(), ConfigError> {
        let options = &self.linkify_resolved;
        require_scheme(&options.default_scheme, "linkify.default_scheme")?;
        for name in options.attributes.keys() {
            require_attribute_name(name)?;
        }
        Ok(())
    }

    /// Validate field entries.
    fn validate_fields(&self) -> Result<(), ConfigError> {
        for (i, field) in self.fields.iter().enumerate() {
            require_non_empty(&field.set, &format!("fields[{i}].set"))?;
            require_non_empty(&field.element, &format!("fields[{i}].element"))?;
        }
        Ok(())
    }
}

/// Search for [`CONFIG_FILENAME`] in `start` and its parents.
fn discover_config_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

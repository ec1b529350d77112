// crates/neoload-report-config/src/config.rs
// ============================================================================
// Module: NeoLoad Report Configuration
// Description: Configuration loading and validation for the report integration.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: neoload-report-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional; absent sections take the defaults the sidebar
//! has always used. Unknown keys are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use neoload_report_core::DEFAULT_MAX_REPORT_BYTES;
use neoload_report_core::FileLogSink;
use neoload_report_core::LevelFilterSink;
use neoload_report_core::LocalFileStore;
use neoload_report_core::LocatorConfig;
use neoload_report_core::LogLevel;
use neoload_report_core::NoopLogSink;
use neoload_report_core::ReportLogSink;
use neoload_report_core::SidebarPresentation;
use neoload_report_core::StderrLogSink;
use neoload_report_core::runtime::links::DEFAULT_DISPLAY_NAME;
use neoload_report_core::runtime::links::DEFAULT_ICON_PATH;
use neoload_report_core::runtime::links::DEFAULT_URL_NAME;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "neoload-report.toml";
/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "NEOLOAD_REPORT_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Upper bound for `scan.max_report_bytes`.
pub const MAX_REPORT_BYTES_LIMIT: u64 = 256 * 1024 * 1024;
/// Maximum length of sidebar presentation values.
pub(crate) const MAX_PRESENTATION_LENGTH: usize = 512;

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Top-level configuration for the report integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Artifact scan configuration.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Sidebar presentation configuration.
    #[serde(default)]
    pub sidebar: SidebarConfig,
    /// Event log routing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReportConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// An explicit `path` wins, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Loads configuration like [`ReportConfig::load`], but returns defaults
    /// when no path was given and the default file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an existing or explicitly named file fails
    /// to load.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let implicit = path.is_none() && env::var_os(CONFIG_ENV_VAR).is_none();
        if implicit && !resolved.exists() {
            return Ok(Self::default());
        }
        Self::load(Some(&resolved))
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.scan.validate()?;
        self.sidebar.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns the locator settings.
    #[must_use]
    pub const fn locator_config(&self) -> LocatorConfig {
        LocatorConfig {
            strict: self.scan.strict,
        }
    }

    /// Returns the sidebar presentation values.
    #[must_use]
    pub fn presentation(&self) -> SidebarPresentation {
        SidebarPresentation {
            display_name: self.sidebar.display_name.clone(),
            icon_path: self.sidebar.icon_path.clone(),
            url_name: self.sidebar.url_name.clone(),
        }
    }

    /// Returns a file store honoring the configured read limit.
    #[must_use]
    pub fn file_store(&self) -> LocalFileStore {
        // Validation bounds the value well below usize::MAX on supported targets.
        let max_bytes = usize::try_from(self.scan.max_report_bytes).unwrap_or(usize::MAX);
        LocalFileStore::new(max_bytes)
    }

    /// Builds the configured event sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the log file cannot be opened.
    pub fn build_sink(&self) -> Result<Arc<dyn ReportLogSink>, ConfigError> {
        let level = self.logging.level;
        let sink: Arc<dyn ReportLogSink> = match self.logging.sink {
            LogSinkKind::None => Arc::new(NoopLogSink),
            LogSinkKind::Stderr => Arc::new(LevelFilterSink::new(level, StderrLogSink)),
            LogSinkKind::File => {
                let path = self.logging.path.as_deref().ok_or_else(|| {
                    ConfigError::Invalid("logging.path required for file sink".to_string())
                })?;
                let file = FileLogSink::new(Path::new(path))
                    .map_err(|err| ConfigError::Io(format!("{path}: {err}")))?;
                Arc::new(LevelFilterSink::new(level, file))
            }
        };
        Ok(sink)
    }
}

// ============================================================================
// SECTION: Scan
// ============================================================================

/// Artifact scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Return the first scan failure instead of skipping the artifact.
    #[serde(default)]
    pub strict: bool,
    /// Maximum archived file size read during a scan.
    #[serde(default = "default_max_report_bytes")]
    pub max_report_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_report_bytes: default_max_report_bytes(),
        }
    }
}

impl ScanConfig {
    /// Validates scan limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_report_bytes == 0 {
            return Err(ConfigError::Invalid("scan.max_report_bytes must be > 0".to_string()));
        }
        if self.max_report_bytes > MAX_REPORT_BYTES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "scan.max_report_bytes exceeds limit of {MAX_REPORT_BYTES_LIMIT}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Sidebar
// ============================================================================

/// Sidebar presentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarConfig {
    /// Sidebar label.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Icon resource path.
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
    /// URL slug under the build page.
    #[serde(default = "default_url_name")]
    pub url_name: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            icon_path: default_icon_path(),
            url_name: default_url_name(),
        }
    }
}

impl SidebarConfig {
    /// Validates presentation values.
    fn validate(&mut self) -> Result<(), ConfigError> {
        validate_presentation("sidebar.display_name", &self.display_name)?;
        validate_presentation("sidebar.icon_path", &self.icon_path)?;
        validate_presentation("sidebar.url_name", &self.url_name)?;
        let slug = self.url_name.trim();
        if !slug.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
            return Err(ConfigError::Invalid(
                "sidebar.url_name must contain only ascii letters, digits, '-' or '_'".to_string(),
            ));
        }
        self.display_name = self.display_name.trim().to_string();
        self.icon_path = self.icon_path.trim().to_string();
        self.url_name = slug.to_string();
        Ok(())
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Destination for report events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogSinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to `logging.path`.
    File,
    /// Discard all events.
    None,
}

/// Event log routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Sink kind.
    #[serde(default)]
    pub sink: LogSinkKind,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
    /// Lowest level emitted.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            sink: LogSinkKind::default(),
            path: None,
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Validates sink settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, self.path.as_deref()) {
            (LogSinkKind::File, None) => {
                Err(ConfigError::Invalid("logging.path required for file sink".to_string()))
            }
            (LogSinkKind::File, Some(path)) => validate_path_string("logging.path", path),
            (_, Some(_)) => {
                Err(ConfigError::Invalid("logging.path only allowed for file sink".to_string()))
            }
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from an explicit value, env var, or default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.to_string_lossy().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string from config against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a non-empty, bounded presentation string.
fn validate_presentation(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_PRESENTATION_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Default scan read limit.
const fn default_max_report_bytes() -> u64 {
    DEFAULT_MAX_REPORT_BYTES as u64
}

/// Default sidebar label.
fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

/// Default sidebar icon.
fn default_icon_path() -> String {
    DEFAULT_ICON_PATH.to_string()
}

/// Default sidebar slug.
fn default_url_name() -> String {
    DEFAULT_URL_NAME.to_string()
}

/// Default minimum log level.
const fn default_log_level() -> LogLevel {
    LogLevel::Info
}

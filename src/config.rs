//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(from = "ConfigFile")]
pub struct Config {
    /// Dangerous command rules.
    pub safety: SafetyConfig,

    /// Tool-call anomaly detection.
    pub anomaly_detection: AnomalyConfig,

    /// Audit log settings.
    pub audit: AuditConfig,
}

/// On-disk shape. Rule settings may sit in a `safety` table or at the top
/// level next to `anomaly_detection`; both are folded into `Config::safety`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    safety: SafetyConfig,
    #[serde(alias = "builtinRules")]
    builtin_rules: Option<bool>,
    rules: Vec<Rule>,
    #[serde(alias = "anomalyDetection")]
    anomaly_detection: AnomalyConfig,
    audit: AuditConfig,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let mut safety = file.safety;
        safety.rules.extend(file.rules);
        if file.builtin_rules == Some(false) {
            safety.builtin_rules = false;
        }
        Self {
            safety,
            anomaly_detection: file.anomaly_detection,
            audit: file.audit,
        }
    }
}

/// Dangerous command guard settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Include the built-in rules ahead of custom ones.
    #[serde(alias = "builtinRules")]
    pub builtin_rules: bool,
    /// Custom rules, matched after the built-ins in this order.
    pub rules: Vec<Rule>,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            builtin_rules: true,
            rules: vec![],
        }
    }
}

/// A named blocking rule.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// Stable rule identifier, reported on block.
    pub name: String,
    /// Regex source, compiled case-insensitively.
    pub pattern: String,
    /// Reason shown on block. A default naming the rule is used when absent.
    #[serde(default)]
    pub reason: Option<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// What the detector does once an anomaly fires.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyAction {
    /// Record and log at debug level only.
    #[default]
    Log,
    /// Record, log a warning and write an audit entry.
    Warn,
    /// As `Warn`, and block every later tool call.
    Abort,
}

/// Anomaly detection thresholds.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnomalyConfig {
    pub enabled: bool,
    /// Identical consecutive calls (and identical consecutive errors) before flagging.
    #[serde(alias = "maxRepeatCalls")]
    pub max_repeat_calls: u32,
    /// Browser navigations over the detector's lifetime before flagging.
    #[serde(alias = "maxBrowserNavigations")]
    pub max_browser_navigations: u32,
    #[serde(alias = "burstWindowMs")]
    pub burst_window_ms: u64,
    /// Calls inside the burst window before flagging.
    #[serde(alias = "maxBurstCalls")]
    pub max_burst_calls: usize,
    pub action: AnomalyAction,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_repeat_calls: 10,
            max_browser_navigations: 50,
            burst_window_ms: 60_000,
            max_burst_calls: 30,
            action: AnomalyAction::Log,
        }
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// State directory holding `security/audit.jsonl`.
    #[serde(alias = "stateDir")]
    pub state_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document, as handed over by a host runtime.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) => Self::load_file(&path),
            None => Ok(None),
        }
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_file(&cwd.join(".agent-tool-guard.toml"))
    }

    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(Self::from_toml(&content)?))
    }

    /// Get user config path.
    /// Respects AGENT_TOOL_GUARD_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("AGENT_TOOL_GUARD_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("agent-tool-guard/config.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        self.safety.rules.extend(other.safety.rules);
        if !other.safety.builtin_rules {
            self.safety.builtin_rules = false;
        }
        if other.anomaly_detection.enabled {
            self.anomaly_detection = other.anomaly_detection;
        }
        if other.audit.state_dir.is_some() {
            self.audit.state_dir = other.audit.state_dir;
        }
    }
}

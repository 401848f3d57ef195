use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PurposeMapError, Result};
use crate::purpose::Locale;
use crate::scanner::{
    ScanOptions, DEFAULT_DECLARATION_SUFFIX, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS,
};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "purpose-map.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# purpose-map configuration file

[scan]
# File extensions to scan (case-sensitive, without the dot)
# Default: ["ts", "tsx"]
extensions = ["ts", "tsx"]

# Directory names whose files are never listed, wherever they appear
# Default: ["__tests__"]
excluded_dirs = ["__tests__"]

# File-name suffix of type declaration files, which are never listed
# Default: ".d.ts"
declaration_suffix = ".d.ts"

# Extra glob patterns, matched against paths relative to the scan root
# Example: exclude = ["generated/*", "**/*.stories.tsx"]
exclude = []

[output]
# Label language: "en" or "zh"
locale = "en"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// File selection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    #[serde(default = "default_declaration_suffix")]
    pub declaration_suffix: String,

    /// Glob patterns relative to the scan root
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_declaration_suffix() -> String {
    DEFAULT_DECLARATION_SUFFIX.to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            declaration_suffix: default_declaration_suffix(),
            exclude: Vec::new(),
        }
    }
}

/// Report rendering settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    /// Load config from a file path. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| PurposeMapError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to a file path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default config file path inside a directory
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Write the commented default template unless the file already exists
    pub fn init(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(true)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scan.extensions" => Some(format!("{:?}", self.scan.extensions)),
            "scan.excluded_dirs" => Some(format!("{:?}", self.scan.excluded_dirs)),
            "scan.declaration_suffix" => Some(self.scan.declaration_suffix.clone()),
            "scan.exclude" => Some(format!("{:?}", self.scan.exclude)),
            "output.locale" => Some(self.output.locale.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scan.extensions" => {
                self.scan.extensions = parse_string_list(value)
                    .into_iter()
                    .map(|ext| ext.trim_start_matches('.').to_string())
                    .collect();
                if self.scan.extensions.is_empty() {
                    return Err(invalid(key, value, "at least one extension is required"));
                }
                Ok(())
            }
            "scan.excluded_dirs" => {
                self.scan.excluded_dirs = parse_string_list(value);
                Ok(())
            }
            "scan.declaration_suffix" => {
                self.scan.declaration_suffix = value.trim().to_string();
                Ok(())
            }
            "scan.exclude" => {
                let patterns = parse_string_list(value);
                for pattern in &patterns {
                    glob::Pattern::new(pattern)?;
                }
                self.scan.exclude = patterns;
                Ok(())
            }
            "output.locale" => {
                self.output.locale = value.parse().map_err(|e| invalid(key, value, e))?;
                Ok(())
            }
            _ => Err(PurposeMapError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "scan.extensions",
            "scan.excluded_dirs",
            "scan.declaration_suffix",
            "scan.exclude",
            "output.locale",
        ]
        .iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Convert to the scanner's selection policy
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.scan.extensions.clone(),
            excluded_dirs: self.scan.excluded_dirs.clone(),
            declaration_suffix: self.scan.declaration_suffix.clone(),
            exclude_patterns: self.scan.exclude.clone(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> PurposeMapError {
    PurposeMapError::InvalidConfigValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    // Try JSON array format first: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

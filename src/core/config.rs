//! Run configuration — defaults, optional JSON config file, CLI overrides.
//!
//! Precedence is flags over file over defaults. All path values support `~`
//! expansion.

use crate::error::Error;
use crate::io;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Symbol prefix applied to every renamed identifier.
pub const DEFAULT_PREFIX: &str = "rl_";

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_src_subdirs() -> Vec<String> {
    vec!["src".to_string(), "src/platforms".to_string()]
}

fn default_output_dir() -> String {
    "raylib_renamed".to_string()
}

fn default_api_docs() -> Vec<String> {
    vec!["raylib.json".to_string(), "raymath.json".to_string()]
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_canonical_headers() -> Vec<String> {
    vec!["raylib.h".to_string(), "raymath.h".to_string()]
}

/// Full configuration for one rename run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenameConfig {
    /// Root directory containing the source subdirectories.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    /// Subdirectories of `base_dir` to scan for .c/.h files.
    #[serde(default = "default_src_subdirs")]
    pub src_subdirs: Vec<String>,

    /// Output root; fully regenerated on every run.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// rlparser JSON documents describing the public API.
    #[serde(default = "default_api_docs")]
    pub api_docs: Vec<String>,

    /// String prepended to every renamed symbol.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Header basenames routed to a fixed `src/<name>` output path
    /// regardless of which input subdirectory they came from.
    #[serde(default = "default_canonical_headers")]
    pub canonical_headers: Vec<String>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            src_subdirs: default_src_subdirs(),
            output_dir: default_output_dir(),
            api_docs: default_api_docs(),
            prefix: default_prefix(),
            canonical_headers: default_canonical_headers(),
        }
    }
}

impl RenameConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = io::read_file(path, &format!("read config {}", path.display()))?;
        let config: RenameConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a run meaningless before any I/O happens.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::config_invalid_value(
                "prefix",
                None,
                "Prefix must not be empty",
            ));
        }
        if !self
            .prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::config_invalid_value(
                "prefix",
                Some(self.prefix.clone()),
                "Prefix must be a valid C identifier fragment (alphanumeric or underscore)",
            ));
        }
        if self.api_docs.is_empty() {
            return Err(Error::config_invalid_value(
                "apiDocs",
                None,
                "At least one API description document is required",
            ));
        }
        if self.src_subdirs.is_empty() {
            return Err(Error::config_invalid_value(
                "srcSubdirs",
                None,
                "At least one source subdirectory is required",
            ));
        }
        Ok(())
    }

    /// Base directory with `~` expanded.
    pub fn base_path(&self) -> PathBuf {
        expand(&self.base_dir)
    }

    /// Output root with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand(&self.output_dir)
    }

    /// API document paths with `~` expanded.
    pub fn api_doc_paths(&self) -> Vec<PathBuf> {
        self.api_docs.iter().map(|d| expand(d)).collect()
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_raylib_layout() {
        let config = RenameConfig::default();
        assert_eq!(config.base_dir, ".");
        assert_eq!(config.src_subdirs, vec!["src", "src/platforms"]);
        assert_eq!(config.output_dir, "raylib_renamed");
        assert_eq!(config.api_docs, vec!["raylib.json", "raymath.json"]);
        assert_eq!(config.prefix, "rl_");
        assert_eq!(config.canonical_headers, vec!["raylib.h", "raymath.h"]);
    }

    #[test]
    fn empty_prefix_rejected() {
        let config = RenameConfig {
            prefix: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn non_identifier_prefix_rejected() {
        let config = RenameConfig {
            prefix: "rl-".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let config: RenameConfig = serde_json::from_str(r#"{"prefix": "my_"}"#).unwrap();
        assert_eq!(config.prefix, "my_");
        assert_eq!(config.output_dir, "raylib_renamed");
    }

    #[test]
    fn unknown_config_key_rejected() {
        let result: std::result::Result<RenameConfig, _> =
            serde_json::from_str(r#"{"outputDirectory": "out"}"#);
        assert!(result.is_err());
    }
}

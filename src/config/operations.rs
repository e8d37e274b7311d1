//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{RatchetError, Result};
use crate::ratchet::ExcludeGlobs;
use crate::suggestion::MessageTemplate;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RatchetError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RatchetError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.ratchet.yaml` from `worktree_root`, or defaults if it is absent.
    pub fn load_or_default<P: AsRef<Path>>(worktree_root: P) -> Result<Self> {
        let path = worktree_root.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                RatchetError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            RatchetError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `rule_url_template` must contain the `{rule}` placeholder
    /// - `ratchet_from`, when set, must be non-empty
    /// - `exclude_globs` entries must be valid glob patterns
    pub fn validate(&self) -> Result<()> {
        if !self.rule_url_template.contains("{rule}") {
            return Err(RatchetError::UserError(format!(
                "config validation failed: rule_url_template must contain '{{rule}}' (found '{}')",
                self.rule_url_template
            )));
        }

        if self
            .ratchet_from
            .as_deref()
            .is_some_and(|commitish| commitish.trim().is_empty())
        {
            return Err(RatchetError::UserError(
                "config validation failed: ratchet_from must not be empty".to_string(),
            ));
        }

        self.exclude_globs()?;
        Ok(())
    }

    /// Compile `exclude_globs` into a matcher.
    pub fn exclude_globs(&self) -> Result<ExcludeGlobs> {
        ExcludeGlobs::new(&self.exclude_globs)
    }

    /// Links used to render review messages.
    pub fn message_template(&self) -> MessageTemplate {
        MessageTemplate {
            rule_url_template: self.rule_url_template.clone(),
            repair_docs_url: self.repair_docs_url.clone(),
        }
    }

    /// Configured title for `rule_key`, if any.
    pub fn rule_title(&self, rule_key: u32) -> Option<&str> {
        self.rule_titles.get(&rule_key).map(String::as_str)
    }
}

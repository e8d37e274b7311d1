//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name of the config, looked up at the worktree root.
pub const CONFIG_FILE_NAME: &str = ".ratchet.yaml";

/// Configuration for ratchet.
///
/// This struct represents the contents of `.ratchet.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Ratchet settings
    // =========================================================================
    /// Baseline commitish used when `--ratchet-from` is not given.
    ///
    /// When neither is set, no ratcheting happens and every violation counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratchet_from: Option<String>,

    /// Glob patterns (relative to the source root) never ratcheted in.
    #[serde(default)]
    pub exclude_globs: Vec<String>,

    // =========================================================================
    // Review message settings
    // =========================================================================
    /// Rule documentation URL; `{rule}` is replaced by the rule key.
    #[serde(default = "default_rule_url_template")]
    pub rule_url_template: String,

    /// Link to the repair engine's documentation of its repairs.
    #[serde(default = "default_repair_docs_url")]
    pub repair_docs_url: String,

    /// Human-readable rule titles by rule key, shown in review messages.
    #[serde(default)]
    pub rule_titles: BTreeMap<u32, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratchet_from: None,
            exclude_globs: Vec::new(),
            rule_url_template: default_rule_url_template(),
            repair_docs_url: default_repair_docs_url(),
            rule_titles: BTreeMap::new(),
        }
    }
}

pub(super) fn default_rule_url_template() -> String {
    "https://rules.sonarsource.com/java/RSPEC-{rule}".to_string()
}

pub(super) fn default_repair_docs_url() -> String {
    "https://github.com/SpoonLabs/sorald/blob/master/docs/HANDLED_RULES.md".to_string()
}

//! Overwrite profile
//!
//! The profile is the user-editable side of the transformation: the
//! subscription table, custom rules and proxies inserted ahead of the
//! built-in ones, and the system-proxy bypass list. It is parsed from a
//! TOML file and threaded explicitly through the pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::proxy::ProxyNode;

// ============================================================================
// Subscription Types
// ============================================================================

/// One named subscription URL.
///
/// The URL is an opaque string handed to the runtime's provider fetcher;
/// this crate never dereferences it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Subscription {
    /// Name/identifier for this subscription
    pub name: String,

    /// URL the runtime fetches the subscription from
    pub url: String,
}

// ============================================================================
// Overwrite Profile
// ============================================================================

/// System-proxy bypass entries used when the profile does not override them.
const DEFAULT_BYPASS: &[&str] = &[
    "127.0.0.1/8",
    "192.168.0.0/16",
    "10.0.0.0/8",
    "172.16.0.0/12",
    "localhost",
    "*.local",
    "*.crashlytics.com",
    "<local>",
    "captive.apple.com",
];

/// Overwrite profile parsed from a TOML file.
///
/// Every section is optional; the empty profile is valid and produces a
/// config with no providers and no custom entries.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OverwriteProfile {
    /// Subscriptions in document order
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,

    /// Rule lines placed ahead of the built-in rules
    #[serde(default)]
    pub custom_rules: Vec<String>,

    /// Proxy entries merged into the config ahead of group building
    #[serde(default)]
    pub custom_proxies: Vec<ProxyNode>,

    /// System-proxy bypass list; empty means use the built-in default
    #[serde(default)]
    pub bypass: Vec<String>,
}

impl OverwriteProfile {
    /// Parse an overwrite profile from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: OverwriteProfile =
            toml::from_str(content).context("Failed to parse overwrite profile TOML")?;
        Ok(profile)
    }

    /// Load an overwrite profile from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read overwrite profile from {:?}", path))?;
        Self::from_toml(&content)
    }

    /// Subscription names, sorted for stable menu display.
    pub fn subscription_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .subscriptions
            .iter()
            .map(|sub| sub.name.clone())
            .collect();
        names.sort();
        names
    }

    /// The system-proxy bypass list: the profile's own entries, or the
    /// built-in defaults when the profile has none.
    pub fn bypass(&self) -> Vec<String> {
        if self.bypass.is_empty() {
            DEFAULT_BYPASS.iter().map(|s| (*s).to_string()).collect()
        } else {
            self.bypass.clone()
        }
    }
}

//! Top-level scalar and small-struct options of a mihomo configuration.

use serde::{Deserialize, Serialize};

use crate::config::util::is_false;

// ============================================================================
// Mode Enums
// ============================================================================

/// Traffic handling mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Global,
    #[default]
    Rule,
    Direct,
}

/// Runtime log verbosity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Silent,
}

/// How aggressively the runtime resolves the process behind a connection.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FindProcessMode {
    Always,
    Strict,
    Off,
}

// ============================================================================
// Profile Options
// ============================================================================

/// Runtime state persisted across restarts.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileOptions {
    #[serde(default, skip_serializing_if = "is_false")]
    pub store_selected: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub store_fake_ip: bool,
}

// ============================================================================
// Sniffer
// ============================================================================

/// A sniffed port: either a single port or a `"low-high"` range string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PortEntry {
    Port(u16),
    Range(String),
}

/// Per-protocol sniffing target.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SniffEntry {
    pub ports: Vec<PortEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_destination: Option<bool>,
}

/// Protocols the sniffer inspects; keys are the runtime's uppercase names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SniffTargets {
    #[serde(rename = "HTTP")]
    pub http: SniffEntry,

    #[serde(rename = "TLS")]
    pub tls: SniffEntry,

    #[serde(rename = "QUIC")]
    pub quic: SniffEntry,
}

/// The `sniffer` block: protocol detection on intercepted connections.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Sniffer {
    pub enable: bool,

    pub sniff: SniffTargets,

    /// Domains never rewritten from sniff results
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_domain: Vec<String>,

    /// Domains always taken from sniff results
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub force_domain: Vec<String>,
}

// ============================================================================
// Geo Data URLs
// ============================================================================

/// Download locations for the geo classification databases.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeoxUrl {
    pub geosite: String,
    pub geoip: String,
    pub mmdb: String,
    pub asn: String,
}

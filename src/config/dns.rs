use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// DNS Configuration
// ============================================================================

/// DNS resolution mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnhancedMode {
    /// Answer with synthetic addresses, resolve for real at connect time
    FakeIp,
    RedirHost,
    Normal,
}

/// The `dns` block of a mihomo configuration.
///
/// Nameserver entries are plain address strings in the runtime's own
/// notation (`tls://`, `https://`, bare IPs); they are never parsed here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Dns {
    pub enable: bool,

    pub listen: String,

    pub ipv6: bool,

    pub prefer_h3: bool,

    /// Resolve through the routing rules instead of a fixed upstream
    pub respect_rules: bool,

    pub cache_algorithm: String,

    pub enhanced_mode: EnhancedMode,

    pub fake_ip_range: String,

    /// Bootstrap resolvers for the nameservers below
    pub default_nameserver: Vec<String>,

    pub nameserver: Vec<String>,

    /// Used to resolve proxy-server hostnames
    pub proxy_server_nameserver: Vec<String>,

    /// Used for direct connections
    pub direct_nameserver: Vec<String>,

    pub direct_nameserver_follow_policy: bool,

    /// Per-domain-class nameserver routing
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub nameserver_policy: IndexMap<String, Vec<String>>,

    /// Domains excluded from fake-IP answers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fake_ip_filter: Vec<String>,
}

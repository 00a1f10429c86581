use serde::{Deserialize, Serialize};

// ============================================================================
// Proxy Providers
// ============================================================================

/// Where a provider's payload comes from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Http,
    File,
    Inline,
}

/// Periodic liveness probing for a provider's proxies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct HealthCheck {
    pub enable: bool,
    pub interval: u64,
    pub url: String,
}

/// Per-provider rewrites applied to every proxy it sources.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProviderOverride {
    /// Prepended to every proxy name from this provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_prefix: Option<String>,
}

/// One entry of the `proxy-providers` map: a remote subscription the
/// runtime fetches and refreshes on its own schedule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProxyProvider {
    #[serde(rename = "type")]
    pub kind: ProviderKind,

    pub url: String,

    /// Refresh interval in seconds
    pub interval: u64,

    pub health_check: HealthCheck,

    #[serde(rename = "override")]
    pub overrides: ProviderOverride,
}

// ============================================================================
// Rule Providers
// ============================================================================

/// Payload format of a remote rule-set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleFormat {
    Yaml,
    Text,
    Mrs,
}

/// What the entries of a rule-set match against.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleBehavior {
    Domain,
    Ipcidr,
    Classical,
}

/// One entry of the `rule-providers` map: a remote match-pattern list
/// referenced by name from `RULE-SET` rule lines.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RuleProvider {
    #[serde(rename = "type")]
    pub kind: ProviderKind,

    /// Omitted for the runtime default (yaml)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<RuleFormat>,

    pub behavior: RuleBehavior,

    pub url: String,

    /// Local cache path
    pub path: String,

    /// Group used to download the rule-set
    pub proxy: String,

    /// Refresh interval in seconds
    pub interval: u64,
}

use serde::{Deserialize, Serialize};

use crate::config::util::is_false;

// ============================================================================
// Proxy Group Types
// ============================================================================

/// How a group picks among its members.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GroupType {
    /// Manual selection
    Select,
    /// Pick the lowest-latency member by periodic probing
    UrlTest,
    /// Spread connections over members
    LoadBalance,
}

/// Load-balance member assignment strategy.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceStrategy {
    /// Hash of connection identity, keeps a flow pinned to one proxy
    ConsistentHashing,
    RoundRobin,
    StickySessions,
}

/// One entry of the `proxy-groups` list.
///
/// Members are referenced by name; a name may point at another group, a
/// proxy, or one of the runtime keywords (`DIRECT`, `REJECT`, `PASS`).
/// `filter`/`exclude-filter` are regex source strings evaluated by the
/// runtime against the merged proxy/provider set when `include-all` is set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProxyGroup {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: GroupType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_filter: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub include_all: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<BalanceStrategy>,
}

impl ProxyGroup {
    fn new(name: impl Into<String>, kind: GroupType) -> Self {
        Self {
            name: name.into(),
            kind,
            proxies: Vec::new(),
            filter: None,
            exclude_filter: None,
            include_all: false,
            hidden: false,
            icon: None,
            url: None,
            interval: None,
            strategy: None,
        }
    }

    /// Create a manual `select` group.
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, GroupType::Select)
    }

    /// Create a `url-test` group.
    pub fn url_test(name: impl Into<String>) -> Self {
        Self::new(name, GroupType::UrlTest)
    }

    /// Create a `load-balance` group.
    pub fn load_balance(name: impl Into<String>) -> Self {
        Self::new(name, GroupType::LoadBalance)
    }

    /// Set the member name list.
    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = proxies;
        self
    }

    /// Set the inclusion regex.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the exclusion regex.
    pub fn with_exclude_filter(mut self, filter: impl Into<String>) -> Self {
        self.exclude_filter = Some(filter.into());
        self
    }

    /// Consider every proxy and provider as a candidate member.
    pub fn include_all(mut self) -> Self {
        self.include_all = true;
        self
    }

    /// Hide the group from selection UIs.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set the UI icon URL.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the latency probe target and interval.
    pub fn with_probe(mut self, url: impl Into<String>, interval: u64) -> Self {
        self.url = Some(url.into());
        self.interval = Some(interval);
        self
    }

    /// Set the load-balance strategy.
    pub fn with_strategy(mut self, strategy: BalanceStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_group_serialization() {
        let group = ProxyGroup::select("pick")
            .with_proxies(vec!["DIRECT".to_string(), "auto".to_string()]);
        let yaml = serde_yml::to_string(&group).unwrap();
        assert!(yaml.contains("name: pick"));
        assert!(yaml.contains("type: select"));
        assert!(yaml.contains("- DIRECT"));
        // Unset optionals and false flags are omitted
        assert!(!yaml.contains("hidden"));
        assert!(!yaml.contains("include-all"));
        assert!(!yaml.contains("filter"));
    }

    #[test]
    fn test_url_test_group_serialization() {
        let group = ProxyGroup::url_test("auto")
            .with_probe("https://www.google.com/generate_204", 300)
            .include_all()
            .with_filter("(?i)(HK)")
            .with_exclude_filter("(?i)expired")
            .hidden();
        let yaml = serde_yml::to_string(&group).unwrap();
        assert!(yaml.contains("type: url-test"));
        assert!(yaml.contains("url: https://www.google.com/generate_204"));
        assert!(yaml.contains("interval: 300"));
        assert!(yaml.contains("include-all: true"));
        assert!(yaml.contains("exclude-filter: (?i)expired"));
        assert!(yaml.contains("hidden: true"));
    }

    #[test]
    fn test_load_balance_group_serialization() {
        let group = ProxyGroup::load_balance("spread")
            .with_strategy(BalanceStrategy::ConsistentHashing);
        let yaml = serde_yml::to_string(&group).unwrap();
        assert!(yaml.contains("type: load-balance"));
        assert!(yaml.contains("strategy: consistent-hashing"));
    }

    #[test]
    fn test_group_deserialization() {
        let yaml = r#"
name: "region"
type: select
proxies:
  - "region auto"
include-all: true
filter: "(?i)(US)"
"#;
        let group: ProxyGroup = serde_yml::from_str(yaml).unwrap();
        assert_eq!(group.kind, GroupType::Select);
        assert!(group.include_all);
        assert!(!group.hidden);
        assert_eq!(group.proxies, vec!["region auto"]);
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::dns::Dns;
use crate::config::general::{
    FindProcessMode, GeoxUrl, LogLevel, ProfileOptions, RunMode, Sniffer,
};
use crate::config::provider::{ProxyProvider, RuleProvider};
use crate::config::proxy::ProxyNode;
use crate::config::proxy_group::ProxyGroup;
use crate::config::tun::Tun;

pub mod dns;
pub mod general;
pub mod provider;
pub mod proxy;
pub mod proxy_group;
pub mod tun;
pub mod util;

/// Main mihomo configuration structure
///
/// This struct represents the configuration file consumed by the mihomo
/// runtime. All overwritable sections are typed; fields that are not set
/// are omitted from serialization. Keys this crate does not touch are kept
/// verbatim in `extra` so a pre-populated base config survives the round
/// trip unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MihomoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixed_port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_lan: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RunMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_process_mode: Option<FindProcessMode>,

    /// Runtime state persistence options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_delay: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_concurrent: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_client_fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sniffer: Option<Sniffer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geodata_mode: Option<bool>,

    /// Download URLs for the GeoSite/GeoIP/MMDB/ASN data files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geox_url: Option<GeoxUrl>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_controller: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ui: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ui_url: Option<String>,

    /// Proxy server entries; opaque to this crate apart from their names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxies: Vec<ProxyNode>,

    /// Subscription provider descriptors, keyed by subscription name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub proxy_providers: IndexMap<String, ProxyProvider>,

    /// Selection/test/load-balance group tree; order is part of the contract
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proxy_groups: Vec<ProxyGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Dns>,

    /// Static hostname overrides
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub hosts: IndexMap<String, serde_yml::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tun: Option<Tun>,

    /// Routing rule lines, evaluated top to bottom, first match wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,

    /// Remote rule-set descriptors, keyed by rule-set name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rule_providers: IndexMap<String, RuleProvider>,

    /// Everything else from the base config, passed through untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yml::Value>,
}

impl MihomoConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(self)
    }

    /// Deserialize a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(yaml)
    }

    /// Whether the fields the runtime requires are all present.
    ///
    /// Mirrors the pre-write sanity check the host application performs
    /// before handing a config to mihomo.
    pub fn is_complete(&self) -> bool {
        self.mixed_port.is_some() && self.mode.is_some() && self.external_controller.is_some()
    }
}

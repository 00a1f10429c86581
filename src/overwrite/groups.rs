//! Proxy-group builder
//!
//! Builds the layered group tree from the static region tables. Grouping
//! never needs the actual proxy names: every region group carries
//! `include-all` plus an inclusion/exclusion regex, and the runtime
//! resolves membership against whatever proxies and providers exist.
//! The one exception is the custom-node group, which name-lists the
//! proxies matched by the custom markers.

use tracing::debug;

use crate::config::MihomoConfig;
use crate::config::proxy_group::{BalanceStrategy, ProxyGroup};
use crate::overwrite::regions::{EXCLUDE_TERMS, US_REGION, region_filters};
use crate::profile::OverwriteProfile;

// ============================================================================
// Group Names
// ============================================================================

/// Top-level manual selector; most rules route through this group.
pub const PRIMARY_SELECTOR: &str = "🎯 节点选择";

/// Hidden global lowest-latency group.
pub const GLOBAL_AUTO: &str = "自动选择";

/// Hidden load-balance group.
pub const LOAD_BALANCE: &str = "⚖️ 负载均衡";

/// AI-service routing group, prefers the US region.
pub const AIGC: &str = "🤖 AIGC";

/// Advertisement handling group.
pub const AD_BLOCK: &str = "🛑 广告拦截";

/// Traffic on non-web ports.
pub const OTHER_PORTS: &str = "❓ 其他端口";

/// Final fallback for traffic nothing else matched.
pub const LAST_CATCH: &str = "🐟 漏网之鱼";

/// Manually curated nodes.
pub const CUSTOM_NODES: &str = "🏴 自定义节点";

/// Suffix of the hidden per-region auto-test groups.
const AUTO_SUFFIX: &str = " 自动选择";

/// Name markers that route a proxy into the custom-node group.
const CUSTOM_MARKERS: &[&str] = &["自定义", "🏴"];

const PROBE_URL: &str = "https://www.google.com/generate_204";
const PROBE_INTERVAL: u64 = 300;

const ICON_STATIC: &str = "https://raw.githubusercontent.com/Orz-3/mini/master/Color/Static.png";
const ICON_AVAILABLE: &str =
    "https://raw.githubusercontent.com/Orz-3/mini/master/Color/Available.png";
const ICON_OPENAI: &str = "https://raw.githubusercontent.com/Orz-3/mini/master/Color/OpenAI.png";
const ICON_ADBLOCK: &str = "https://raw.githubusercontent.com/Orz-3/mini/master/Color/Adblock.png";
const ICON_ENET: &str = "https://raw.githubusercontent.com/Orz-3/mini/master/Color/Enet.png";
const ICON_FASTFISH: &str =
    "https://raw.githubusercontent.com/Orz-3/mini/master/Color/Fastfish.png";
const ICON_OVO: &str = "https://raw.githubusercontent.com/Orz-3/mini/master/Color/OvO.png";

// ============================================================================
// Group Building
// ============================================================================

/// Replace `proxy-groups` with the derived group tree.
pub fn overwrite_proxy_groups(config: &mut MihomoConfig, profile: &OverwriteProfile) {
    let regions = region_filters();
    let region_names: Vec<String> = regions.iter().map(|r| r.name.to_string()).collect();

    // Hidden auto-test group per region; picks the lowest-latency member.
    let region_auto_groups: Vec<ProxyGroup> = regions
        .iter()
        .map(|region| {
            ProxyGroup::url_test(format!("{}{}", region.name, AUTO_SUFFIX))
                .with_probe(PROBE_URL, PROBE_INTERVAL)
                .include_all()
                .with_filter(region.filter.clone())
                .with_exclude_filter(EXCLUDE_TERMS)
                .hidden()
        })
        .collect();

    // Visible per-region selector; defaults to the auto group but lets the
    // user pin any single matching proxy.
    let region_select_groups: Vec<ProxyGroup> = regions
        .iter()
        .map(|region| {
            ProxyGroup::select(region.name)
                .include_all()
                .with_filter(region.filter.clone())
                .with_exclude_filter(EXCLUDE_TERMS)
                .with_proxies(vec![format!("{}{}", region.name, AUTO_SUFFIX)])
        })
        .collect();

    let mut groups = vec![
        ProxyGroup::select(PRIMARY_SELECTOR)
            .with_icon(ICON_STATIC)
            .with_proxies(
                std::iter::once(GLOBAL_AUTO.to_string())
                    .chain(region_names.iter().cloned())
                    .chain(["DIRECT".to_string(), LOAD_BALANCE.to_string()])
                    .collect(),
            ),
        ProxyGroup::url_test(GLOBAL_AUTO)
            .with_probe(PROBE_URL, PROBE_INTERVAL)
            .include_all()
            .with_exclude_filter(EXCLUDE_TERMS)
            .hidden(),
        ProxyGroup::load_balance(LOAD_BALANCE)
            .with_probe(PROBE_URL, PROBE_INTERVAL)
            .with_strategy(BalanceStrategy::ConsistentHashing)
            .include_all()
            .with_exclude_filter(EXCLUDE_TERMS)
            .with_icon(ICON_AVAILABLE)
            .hidden(),
        ProxyGroup::select(AIGC)
            .with_proxies(
                [US_REGION.to_string(), PRIMARY_SELECTOR.to_string()]
                    .into_iter()
                    .chain(region_names.iter().filter(|n| *n != US_REGION).cloned())
                    .collect(),
            )
            .with_icon(ICON_OPENAI),
        ProxyGroup::select(AD_BLOCK)
            .with_proxies(vec!["PASS".to_string(), "REJECT".to_string()])
            .with_icon(ICON_ADBLOCK),
        ProxyGroup::select(OTHER_PORTS)
            .with_proxies(vec![
                "DIRECT".to_string(),
                PRIMARY_SELECTOR.to_string(),
                "PASS".to_string(),
            ])
            .with_icon(ICON_ENET),
        ProxyGroup::select(LAST_CATCH)
            .with_proxies(
                [PRIMARY_SELECTOR.to_string(), "DIRECT".to_string()]
                    .into_iter()
                    .chain(region_names.iter().cloned())
                    .collect(),
            )
            .with_icon(ICON_FASTFISH),
    ];

    groups.extend(region_auto_groups);
    groups.extend(region_select_groups);

    // Custom nodes: profile entries first, then anything in the merged
    // proxy list whose name carries a custom marker.
    let custom_names: Vec<String> = profile
        .custom_proxies
        .iter()
        .filter_map(|proxy| proxy.name())
        .chain(config.proxies.iter().filter_map(|proxy| {
            proxy
                .name()
                .filter(|name| CUSTOM_MARKERS.iter().any(|marker| name.contains(marker)))
        }))
        .map(str::to_string)
        .collect();

    if !custom_names.is_empty() {
        debug!("Adding custom node group with {} proxies", custom_names.len());
        groups[0].proxies.push(CUSTOM_NODES.to_string());
        groups.push(
            ProxyGroup::select(CUSTOM_NODES)
                .with_proxies(custom_names)
                .with_icon(ICON_OVO),
        );
    }

    debug!("Built {} proxy groups", groups.len());
    config.proxy_groups = groups;
}

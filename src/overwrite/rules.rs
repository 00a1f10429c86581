//! Rule builder
//!
//! Assembles the ordered rule list and the remote rule-set descriptors.
//! The runtime evaluates rules top to bottom, first match wins, so the
//! order below is load-bearing: profile rules take priority, the
//! unconditional `MATCH` line stays last.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::MihomoConfig;
use crate::config::provider::{ProviderKind, RuleBehavior, RuleFormat, RuleProvider};
use crate::overwrite::groups::{AD_BLOCK, AIGC, LAST_CATCH, OTHER_PORTS, PRIMARY_SELECTOR};
use crate::profile::OverwriteProfile;

const RULE_PROVIDER_INTERVAL: u64 = 86400;

// ============================================================================
// Built-in Rules
// ============================================================================

/// Infrastructure rules appended after the profile's custom rules.
///
/// The geolocation-!cn / geolocation-cn pairs with `@cn` / `@!cn`
/// attributes keep VPN-detouring domains and directly-reachable domestic
/// domains routed correctly under DNS split-horizon.
fn built_in_rules() -> Vec<String> {
    [
        "RULE-SET,cn,DIRECT".to_string(),
        "RULE-SET,SteamCN,DIRECT".to_string(),
        format!("GEOSITE,category-ads-all,{}", AD_BLOCK),
        "GEOSITE,private,DIRECT".to_string(),
        format!("GEOSITE,category-ai-!cn,{}", AIGC),
        // Public BT trackers
        "GEOSITE,category-public-tracker,DIRECT".to_string(),
        // Domestic phone-number verification services
        "GEOSITE,category-number-verification-cn,DIRECT".to_string(),
        "GEOSITE,geolocation-!cn@cn,DIRECT".to_string(),
        format!("GEOSITE,geolocation-!cn,{}", PRIMARY_SELECTOR),
        format!("GEOSITE,geolocation-cn@!cn,{}", PRIMARY_SELECTOR),
        "GEOSITE,geolocation-cn,DIRECT".to_string(),
        "GEOSITE,cn,DIRECT".to_string(),
        "GEOIP,private,DIRECT,no-resolve".to_string(),
        format!("GEOIP,telegram,{}", PRIMARY_SELECTOR),
        "GEOIP,CN,DIRECT".to_string(),
        format!("NOT,((DST-PORT,80/443/8080/8888)),{}", OTHER_PORTS),
        format!("MATCH,{}", LAST_CATCH),
    ]
    .into()
}

// ============================================================================
// Rule Providers
// ============================================================================

fn rule_provider(
    format: Option<RuleFormat>,
    url: &str,
    path: &str,
) -> RuleProvider {
    RuleProvider {
        kind: ProviderKind::Http,
        format,
        behavior: RuleBehavior::Domain,
        url: url.to_string(),
        path: path.to_string(),
        proxy: PRIMARY_SELECTOR.to_string(),
        interval: RULE_PROVIDER_INTERVAL,
    }
}

/// The remote rule-sets referenced by `RULE-SET` lines and the fake-IP
/// filter.
fn rule_providers() -> IndexMap<String, RuleProvider> {
    let mut providers = IndexMap::new();
    providers.insert(
        "fake_ip_filter".to_string(),
        rule_provider(
            Some(RuleFormat::Text),
            "https://cdn.jsdelivr.net/gh/juewuy/ShellCrash@dev/public/fake_ip_filter.list",
            "./rule_set/ShellCrash/fake_ip_filter.list",
        ),
    );
    providers.insert(
        "SteamCN".to_string(),
        rule_provider(
            None,
            "https://cdn.jsdelivr.net/gh/blackmatrix7/ios_rule_script@refs/heads/master/rule/Clash/SteamCN/SteamCN.yaml",
            "./rule_set/ios_rule_script/SteamCN.yaml",
        ),
    );
    providers.insert(
        "cn".to_string(),
        rule_provider(
            None,
            "https://cdn.jsdelivr.net/gh/MetaCubeX/meta-rules-dat@meta/geo/geosite/cn.yaml",
            "./rule_set/MetaCubeX/cn.yaml",
        ),
    );
    providers
}

// ============================================================================
// Overwrite Pass
// ============================================================================

/// Replace `rules` and `rule-providers`: profile custom rules first, then
/// the built-in list.
pub fn overwrite_rules(config: &mut MihomoConfig, profile: &OverwriteProfile) {
    config.rule_providers = rule_providers();

    let mut rules = profile.custom_rules.clone();
    rules.extend(built_in_rules());
    debug!(
        "Built {} rules ({} custom)",
        rules.len(),
        profile.custom_rules.len()
    );
    config.rules = rules;
}

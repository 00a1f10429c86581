//! Configuration overwrite pipeline
//!
//! This module orchestrates the enrichment of a base mihomo configuration
//! into a complete runtime configuration: providers from the subscription
//! table, fixed option/DNS/tunnel policy, the derived proxy-group tree and
//! the routing rule list.

use tracing::{debug, info};

use crate::config::MihomoConfig;
use crate::profile::OverwriteProfile;

// Sub-modules
pub mod dns;
pub mod groups;
pub mod options;
pub mod providers;
pub mod regions;
pub mod rules;
pub mod tun;

// Re-exports
pub use groups::PRIMARY_SELECTOR;

/// Run the full overwrite pipeline over `config` in place.
///
/// `selected_subscription` narrows the provider build to one subscription;
/// `None` or an empty string keeps the whole table. When the merged config
/// ends up with neither proxies nor providers there is nothing to route,
/// so every later pass is skipped and the base config comes back
/// untouched.
pub fn overwrite(
    config: &mut MihomoConfig,
    profile: &OverwriteProfile,
    selected_subscription: Option<&str>,
) {
    providers::overwrite_proxy_providers(config, profile, selected_subscription);

    config
        .proxies
        .extend(profile.custom_proxies.iter().cloned());

    if config.proxies.is_empty() && config.proxy_providers.is_empty() {
        info!("No proxies or proxy providers configured, leaving base config untouched");
        return;
    }

    options::overwrite_basic_options(config);
    dns::overwrite_dns(config);
    dns::overwrite_fake_ip_filter(config);
    dns::overwrite_hosts(config);
    tun::overwrite_tunnel(config);
    groups::overwrite_proxy_groups(config, profile);
    rules::overwrite_rules(config, profile);

    debug!(
        "Overwrite complete: {} proxies, {} providers, {} groups, {} rules",
        config.proxies.len(),
        config.proxy_providers.len(),
        config.proxy_groups.len(),
        config.rules.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::proxy::ProxyNode;
    use crate::profile::Subscription;

    fn profile_with_subscription() -> OverwriteProfile {
        OverwriteProfile {
            subscriptions: vec![Subscription {
                name: "sub".to_string(),
                url: "https://example.com/sub".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let mut config = MihomoConfig::new();
        overwrite(&mut config, &OverwriteProfile::default(), None);

        assert_eq!(config, MihomoConfig::new());
        assert!(config.proxy_groups.is_empty());
        assert!(config.rules.is_empty());
        assert!(config.dns.is_none());
    }

    #[test]
    fn test_unknown_selection_short_circuits() {
        let mut config = MihomoConfig::new();
        overwrite(&mut config, &profile_with_subscription(), Some("other"));

        assert!(config.proxy_providers.is_empty());
        assert!(config.proxy_groups.is_empty());
    }

    #[test]
    fn test_providers_alone_enable_pipeline() {
        let mut config = MihomoConfig::new();
        overwrite(&mut config, &profile_with_subscription(), None);

        assert_eq!(config.proxy_providers.len(), 1);
        assert!(config.dns.is_some());
        assert!(config.tun.is_some());
        assert!(!config.proxy_groups.is_empty());
        assert!(!config.rules.is_empty());
        assert!(config.is_complete());
    }

    #[test]
    fn test_proxies_alone_enable_pipeline() {
        let mut config = MihomoConfig::new();
        config.proxies.push(ProxyNode::named("node"));
        overwrite(&mut config, &OverwriteProfile::default(), None);

        assert!(config.proxy_providers.is_empty());
        assert!(config.is_complete());
    }

    #[test]
    fn test_custom_proxies_merged_before_check() {
        let mut config = MihomoConfig::new();
        let profile = OverwriteProfile {
            custom_proxies: vec![ProxyNode::named("home")],
            ..Default::default()
        };
        overwrite(&mut config, &profile, None);

        assert_eq!(config.proxies.len(), 1);
        assert!(config.is_complete());
    }

    #[test]
    fn test_pass_order_leaves_fake_ip_filter_set() {
        let mut config = MihomoConfig::new();
        overwrite(&mut config, &profile_with_subscription(), None);

        let dns = config.dns.as_ref().unwrap();
        assert!(!dns.fake_ip_filter.is_empty());
    }
}

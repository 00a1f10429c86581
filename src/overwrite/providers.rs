//! Provider builder
//!
//! Turns the profile's subscription table into `proxy-providers`
//! descriptors. URLs are never fetched or validated here; the runtime
//! owns the fetching and the health checks described below.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::MihomoConfig;
use crate::config::provider::{HealthCheck, ProviderKind, ProviderOverride, ProxyProvider};
use crate::profile::OverwriteProfile;

const SUBSCRIPTION_INTERVAL: u64 = 86400;
const HEALTH_CHECK_INTERVAL: u64 = 300;
const HEALTH_CHECK_URL: &str = "https://www.google.com/generate_204";

/// Replace `proxy-providers` with one descriptor per subscription.
///
/// `selected` narrows the table to a single subscription; `None` (or the
/// empty string) keeps them all. A name that matches nothing yields an
/// empty map, not an error.
pub fn overwrite_proxy_providers(
    config: &mut MihomoConfig,
    profile: &OverwriteProfile,
    selected: Option<&str>,
) {
    let selected = selected.filter(|name| !name.is_empty());

    let mut providers = IndexMap::new();
    for sub in &profile.subscriptions {
        if let Some(name) = selected
            && sub.name != name
        {
            continue;
        }

        providers.insert(
            sub.name.clone(),
            ProxyProvider {
                kind: ProviderKind::Http,
                url: sub.url.clone(),
                interval: SUBSCRIPTION_INTERVAL,
                health_check: HealthCheck {
                    enable: true,
                    interval: HEALTH_CHECK_INTERVAL,
                    url: HEALTH_CHECK_URL.to_string(),
                },
                overrides: ProviderOverride {
                    // The runtime prepends this to every proxy name the
                    // provider sources, so nodes stay attributable.
                    additional_prefix: Some(format!("[{}] ", sub.name)),
                },
            },
        );
    }

    debug!(
        "Built {} proxy providers from {} subscriptions",
        providers.len(),
        profile.subscriptions.len()
    );
    config.proxy_providers = providers;
}

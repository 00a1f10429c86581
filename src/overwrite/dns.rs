//! DNS, fake-IP filter and hosts overwriters
//!
//! The DNS policy is fixed: domestic DoH resolvers for proxy-server and
//! direct lookups, foreign resolvers for everything routed abroad, fake-IP
//! answers for intercepted queries. Non-China geosite lookups are pinned
//! to the foreign list so split-horizon answers never leak in.

use indexmap::IndexMap;

use crate::config::MihomoConfig;
use crate::config::dns::{Dns, EnhancedMode};

// ============================================================================
// Nameserver Tables
// ============================================================================

/// Domestic DoH resolvers (Ali, Tencent).
const DOMESTIC_NAMESERVERS: &[&str] = &[
    "https://223.5.5.5/dns-query",
    // Tencent DoH by hostname, the bare-IP endpoint is being retired
    "https://doh.pub/dns-query",
];

/// Foreign DoH resolvers (Cloudflare, Google).
const FOREIGN_NAMESERVERS: &[&str] = &[
    "https://cloudflare-dns.com/dns-query",
    "https://dns.google/dns-query",
];

fn to_vec(servers: &[&str]) -> Vec<String> {
    servers.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Overwrite Passes
// ============================================================================

/// Replace the `dns` block with the fixed resolution policy.
pub fn overwrite_dns(config: &mut MihomoConfig) {
    let mut nameserver_policy = IndexMap::new();
    nameserver_policy.insert(
        "geosite:geolocation-!cn".to_string(),
        to_vec(FOREIGN_NAMESERVERS),
    );

    config.dns = Some(Dns {
        enable: true,
        listen: "0.0.0.0:1053".to_string(),
        ipv6: true,
        prefer_h3: true,
        respect_rules: true,
        cache_algorithm: "arc".to_string(),
        enhanced_mode: EnhancedMode::FakeIp,
        fake_ip_range: "198.18.0.1/16".to_string(),
        default_nameserver: vec!["tls://223.5.5.5".to_string(), "tls://223.6.6.6".to_string()],
        nameserver: to_vec(FOREIGN_NAMESERVERS),
        proxy_server_nameserver: to_vec(DOMESTIC_NAMESERVERS),
        direct_nameserver: to_vec(DOMESTIC_NAMESERVERS),
        direct_nameserver_follow_policy: false,
        nameserver_policy,
        fake_ip_filter: Vec::new(),
    });
}

/// Set the domains excluded from fake-IP resolution. Runs after
/// `overwrite_dns`; without a `dns` block there is nothing to exclude.
pub fn overwrite_fake_ip_filter(config: &mut MihomoConfig) {
    if let Some(dns) = config.dns.as_mut() {
        dns.fake_ip_filter = vec![
            "rule-set:fake_ip_filter".to_string(),
            // Connectivity probes and private names must resolve for real
            "geosite:connectivity-check".to_string(),
            "geosite:private".to_string(),
        ];
    }
}

/// Replace `hosts` with the static overrides.
pub fn overwrite_hosts(config: &mut MihomoConfig) {
    let mut hosts = IndexMap::new();
    hosts.insert("127.0.0.1.sslip.io".to_string(), "127.0.0.1".into());
    hosts.insert("127.atlas.skk.moe".to_string(), "127.0.0.1".into());
    hosts.insert(
        "cdn.jsdelivr.net".to_string(),
        "cdn.jsdelivr.net.cdn.cloudflare.net".into(),
    );
    config.hosts = hosts;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_nameserver_composition() {
        let mut config = MihomoConfig::new();
        overwrite_dns(&mut config);

        let dns = config.dns.as_ref().unwrap();
        assert_eq!(dns.nameserver, to_vec(FOREIGN_NAMESERVERS));
        assert_eq!(dns.proxy_server_nameserver, to_vec(DOMESTIC_NAMESERVERS));
        assert_eq!(dns.direct_nameserver, to_vec(DOMESTIC_NAMESERVERS));
        assert!(!dns.direct_nameserver_follow_policy);
    }

    #[test]
    fn test_dns_policy_routes_foreign_geosite() {
        let mut config = MihomoConfig::new();
        overwrite_dns(&mut config);

        let dns = config.dns.as_ref().unwrap();
        assert_eq!(
            dns.nameserver_policy.get("geosite:geolocation-!cn"),
            Some(&to_vec(FOREIGN_NAMESERVERS))
        );
    }

    #[test]
    fn test_dns_fake_ip_mode() {
        let mut config = MihomoConfig::new();
        overwrite_dns(&mut config);

        let dns = config.dns.as_ref().unwrap();
        assert_eq!(dns.enhanced_mode, EnhancedMode::FakeIp);
        assert_eq!(dns.fake_ip_range, "198.18.0.1/16");
        assert!(dns.fake_ip_filter.is_empty());
    }

    #[test]
    fn test_dns_replaces_existing_block() {
        let mut config = MihomoConfig::new();
        overwrite_dns(&mut config);
        config.dns.as_mut().unwrap().listen = "1.2.3.4:53".to_string();
        overwrite_dns(&mut config);
        assert_eq!(config.dns.as_ref().unwrap().listen, "0.0.0.0:1053");
    }

    #[test]
    fn test_fake_ip_filter_entries() {
        let mut config = MihomoConfig::new();
        overwrite_dns(&mut config);
        overwrite_fake_ip_filter(&mut config);

        let dns = config.dns.as_ref().unwrap();
        assert_eq!(
            dns.fake_ip_filter,
            vec![
                "rule-set:fake_ip_filter",
                "geosite:connectivity-check",
                "geosite:private"
            ]
        );
    }

    #[test]
    fn test_fake_ip_filter_without_dns_is_noop() {
        let mut config = MihomoConfig::new();
        overwrite_fake_ip_filter(&mut config);
        assert!(config.dns.is_none());
    }

    #[test]
    fn test_hosts_overrides() {
        let mut config = MihomoConfig::new();
        overwrite_hosts(&mut config);

        assert_eq!(config.hosts.len(), 3);
        assert_eq!(
            config.hosts.get("127.0.0.1.sslip.io").and_then(|v| v.as_str()),
            Some("127.0.0.1")
        );
        assert_eq!(
            config.hosts.get("cdn.jsdelivr.net").and_then(|v| v.as_str()),
            Some("cdn.jsdelivr.net.cdn.cloudflare.net")
        );
    }
}

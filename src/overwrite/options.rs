//! Basic-option overwriter
//!
//! Unconditionally replaces the top-level runtime options: listen port,
//! mode, sniffer, geo-data sources and the external controller/UI. Every
//! field is fully overwritten, so the pass is idempotent.

use crate::config::MihomoConfig;
use crate::config::general::{
    FindProcessMode, GeoxUrl, LogLevel, PortEntry, ProfileOptions, RunMode, SniffEntry, Sniffer,
    SniffTargets,
};

fn sniffer() -> Sniffer {
    Sniffer {
        enable: true,
        sniff: SniffTargets {
            http: SniffEntry {
                ports: vec![PortEntry::Port(80), PortEntry::Range("8080-8880".to_string())],
                override_destination: Some(true),
            },
            tls: SniffEntry {
                ports: vec![PortEntry::Port(443), PortEntry::Port(8443)],
                override_destination: None,
            },
            quic: SniffEntry {
                ports: vec![PortEntry::Port(443), PortEntry::Port(8443)],
                override_destination: None,
            },
        },
        skip_domain: vec![
            "Mijia Cloud".to_string(),
            "+.push.apple.com".to_string(),
            "dlg.io.mi.com".to_string(),
        ],
        force_domain: vec!["google.com".to_string()],
    }
}

fn geox_url() -> GeoxUrl {
    GeoxUrl {
        geosite: "https://gh-proxy.com/https://github.com/v2fly/domain-list-community/releases/latest/download/dlc.dat".to_string(),
        geoip: "https://testingcf.jsdelivr.net/gh/MetaCubeX/meta-rules-dat@release/geoip-lite.dat".to_string(),
        mmdb: "https://testingcf.jsdelivr.net/gh/MetaCubeX/meta-rules-dat@release/geoip.metadb".to_string(),
        asn: "https://testingcf.jsdelivr.net/gh/MetaCubeX/meta-rules-dat@release/GeoLite2-ASN.mmdb".to_string(),
    }
}

/// Replace the top-level runtime options.
pub fn overwrite_basic_options(config: &mut MihomoConfig) {
    config.mixed_port = Some(7890);
    config.allow_lan = Some(false);
    config.mode = Some(RunMode::Rule);
    config.log_level = Some(LogLevel::Warning);
    config.ipv6 = Some(false);
    config.find_process_mode = Some(FindProcessMode::Strict);
    config.profile = Some(ProfileOptions {
        store_selected: true,
        store_fake_ip: true,
    });
    config.unified_delay = Some(true);
    config.tcp_concurrent = Some(true);
    config.global_client_fingerprint = Some("chrome".to_string());
    config.sniffer = Some(sniffer());
    config.geodata_mode = Some(true);
    config.geox_url = Some(geox_url());
    config.external_controller = Some("127.0.0.1:9090".to_string());
    config.external_ui = Some("ui".to_string());
    config.external_ui_url = Some(
        "https://gh-proxy.com/https://github.com/Zephyruso/zashboard/releases/latest/download/dist.zip"
            .to_string(),
    );
}

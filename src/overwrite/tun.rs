//! Tunnel overwriter

use crate::config::MihomoConfig;
use crate::config::tun::{Tun, TunStack};

/// Replace the `tun` block. The interface ships disabled; the host toggles
/// it at runtime.
pub fn overwrite_tunnel(config: &mut MihomoConfig) {
    config.tun = Some(Tun {
        enable: false,
        stack: TunStack::Mixed,
        dns_hijack: vec!["any:53".to_string(), "tcp://any:53".to_string()],
        auto_route: true,
        auto_detect_interface: true,
        strict_route: true,
        route_exclude_address: Vec::new(),
    });
}

use serde::{Deserialize, Serialize};

// ============================================================================
// Tunnel Configuration
// ============================================================================

/// Network stack backing the virtual interface.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TunStack {
    System,
    Gvisor,
    Mixed,
}

/// The `tun` block: virtual-interface capture of device traffic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Tun {
    pub enable: bool,

    pub stack: TunStack,

    /// Listen addresses whose DNS traffic is redirected into the engine
    pub dns_hijack: Vec<String>,

    pub auto_route: bool,

    pub auto_detect_interface: bool,

    pub strict_route: bool,

    /// CIDRs left outside the tunnel, environment dependent
    pub route_exclude_address: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tun_serialization_field_names() {
        let tun = Tun {
            enable: false,
            stack: TunStack::Mixed,
            dns_hijack: vec!["any:53".to_string(), "tcp://any:53".to_string()],
            auto_route: true,
            auto_detect_interface: true,
            strict_route: true,
            route_exclude_address: Vec::new(),
        };
        let yaml = serde_yml::to_string(&tun).unwrap();
        assert!(yaml.contains("stack: mixed"));
        assert!(yaml.contains("dns-hijack:"));
        assert!(yaml.contains("- any:53"));
        assert!(yaml.contains("auto-detect-interface: true"));
        assert!(yaml.contains("route-exclude-address: []"));
    }

    #[test]
    fn test_tun_roundtrip() {
        let tun = Tun {
            enable: true,
            stack: TunStack::System,
            dns_hijack: vec!["any:53".to_string()],
            auto_route: true,
            auto_detect_interface: false,
            strict_route: false,
            route_exclude_address: vec!["10.0.0.0/8".to_string()],
        };
        let yaml = serde_yml::to_string(&tun).unwrap();
        let parsed: Tun = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, tun);
    }
}

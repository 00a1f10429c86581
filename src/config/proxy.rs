use serde::{Deserialize, Serialize};

// ============================================================================
// Proxy Entries
// ============================================================================

/// A single proxy server entry.
///
/// Proxy entries come from the base config or the overwrite profile and are
/// passed through to the runtime verbatim; this crate only ever looks at the
/// `name` field, so the rest of the shape stays an untyped YAML value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ProxyNode(pub serde_yml::Value);

impl ProxyNode {
    /// Create a proxy entry carrying only a name.
    pub fn named(name: &str) -> Self {
        let mut mapping = serde_yml::Mapping::new();
        mapping.insert("name".into(), name.into());
        Self(serde_yml::Value::Mapping(mapping))
    }

    /// The proxy's display name, if the entry has one.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(|v| v.as_str())
    }
}

//! In-memory lookup backed by the embedded interface table.
//!
//! The process-wide map is built once, either explicitly through [`init`] or
//! lazily by the first [`interface_name`] call. It is never mutated afterwards.
//! The table is only embedded in debug builds (or with the `embedded-table`
//! feature); otherwise the map is empty and every lookup returns its input.

use crate::generated::INTERFACES;
use fxhash::FxHashMap;
use guidex_domain::guid::normalize_key;
use std::sync::OnceLock;
use tracing::debug;

static REGISTRY: OnceLock<InterfaceRegistry> = OnceLock::new();

/// Builds the process-wide map from the embedded table. Later calls are no-ops.
pub fn init() -> &'static InterfaceRegistry {
    REGISTRY.get_or_init(|| {
        let registry = InterfaceRegistry::embedded();
        debug!(entries = registry.len(), "Interface registry initialized");
        registry
    })
}

/// Returns the name registered for `guid` (any case), or `guid` unchanged.
pub fn interface_name(guid: &str) -> String {
    init().interface_name(guid)
}

/// GUID to name map with upper-cased keys.
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    names: FxHashMap<String, String>,
}

impl InterfaceRegistry {
    /// Builds a registry from `(guid, name)` pairs. For repeated GUIDs the last pair wins.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let names = entries.into_iter().map(|(guid, name)| (normalize_key(guid.as_ref()), name.into())).collect();
        Self { names }
    }

    /// The table compiled into this build.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(INTERFACES.iter().copied())
    }

    #[must_use]
    pub fn name_of(&self, guid: &str) -> Option<&str> {
        self.names.get(&normalize_key(guid)).map(String::as_str)
    }

    /// The mapped name, or `guid` unchanged.
    #[must_use]
    pub fn interface_name(&self, guid: &str) -> String {
        self.name_of(guid).map_or_else(|| guid.to_owned(), str::to_owned)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let registry = InterfaceRegistry::from_entries([("{GUID-1}", "Ethernet")]);

        assert_eq!(registry.interface_name("{guid-1}"), "Ethernet");
        assert_eq!(registry.interface_name("{GUID-1}"), "Ethernet");
        assert_eq!(registry.name_of("{Guid-1}"), Some("Ethernet"));
    }

    #[test]
    fn unknown_guid_is_returned_unchanged() {
        let registry = InterfaceRegistry::from_entries([("{GUID-1}", "Ethernet")]);

        assert_eq!(registry.interface_name("{unknown}"), "{unknown}");
        assert_eq!(registry.name_of("{unknown}"), None);
    }

    #[test]
    fn keys_are_stored_upper_case() {
        let registry = InterfaceRegistry::from_entries([("af86e2e0-b12d-4c6a-9c5a-d7aa65101e90", "IInspectable")]);

        assert!(registry.names.contains_key("AF86E2E0-B12D-4C6A-9C5A-D7AA65101E90"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn later_entries_win() {
        let registry = InterfaceRegistry::from_entries([
            ("94EA2B94-E9CC-49E0-C0FF-EE64CA8F5B90", "AgileObject"),
            ("94ea2b94-e9cc-49e0-c0ff-ee64ca8f5b90", "IAgileObject"),
        ]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name_of("94EA2B94-E9CC-49E0-C0FF-EE64CA8F5B90"), Some("IAgileObject"));
    }

    #[test]
    fn empty_registry_is_identity() {
        let registry = InterfaceRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.interface_name("00000000-0000-0000-C000-000000000046"), "00000000-0000-0000-C000-000000000046");
    }

    #[test]
    #[cfg(debug_assertions)]
    fn global_registry_resolves_embedded_table() {
        let first = init();
        let second = init();
        assert!(std::ptr::eq(first, second), "init must build the map only once");

        assert_eq!(interface_name("00000000-0000-0000-c000-000000000046"), "IUnknown");
        assert_eq!(interface_name("{not-a-guid}"), "{not-a-guid}");
    }
}

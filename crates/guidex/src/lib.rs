//! Facade crate for GUIDEX features and shared modules.
//! Re-exports domain/kernel primitives and the lookup and scanner slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `guidex` with the desired feature flags (`scanner`/`embedded-table`).
//! - Resolve names with [`interface_name`] or the [`lookup`] module directly.

pub use guidex_domain as domain;
pub use guidex_kernel as kernel;
pub use guidex_lookup as lookup;
#[cfg(feature = "scanner")]
pub use guidex_scanner as scanner;

use std::path::Path;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "lookup",
        #[cfg(feature = "scanner")]
        "scanner",
        #[cfg(feature = "embedded-table")]
        "embedded-table",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Resolves `guid` from the INI database at `ini` when given, otherwise from
/// the embedded table. Unknown GUIDs come back unchanged.
#[must_use]
pub fn interface_name(guid: &str, ini: Option<&Path>) -> String {
    match ini {
        Some(path) => lookup::ini::interface_name(guid, path),
        None => lookup::registry::interface_name(guid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_always_enabled() {
        assert!(features::is_enabled("lookup"));
        assert!(!features::is_enabled("server"));
    }

    #[test]
    fn missing_database_returns_the_guid() {
        let guid = "{7DDB9F21-1D8E-4F8B-8B4F-000000000000}";
        assert_eq!(interface_name(guid, Some(Path::new("does-not-exist.ini"))), guid);
    }
}

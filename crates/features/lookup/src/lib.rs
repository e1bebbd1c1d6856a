//! # Interface name lookup
//!
//! Debugging helpers that turn an interface GUID into a readable name.
//!
//! Two sources are supported:
//! * [`ini`]: the `[All Interfaces]` section of an INI database produced by the scanner;
//! * [`registry`]: a table embedded at build time into debug builds, behind a
//!   process-wide map that is initialized once.
//!
//! Neither lookup fails: an unknown GUID is returned unchanged.
//!
//! ```rust
//! use guidex_lookup::registry::InterfaceRegistry;
//!
//! let registry = InterfaceRegistry::from_entries([("{GUID-1}", "Ethernet")]);
//! assert_eq!(registry.interface_name("{guid-1}"), "Ethernet");
//! assert_eq!(registry.interface_name("{unknown}"), "{unknown}");
//! ```

mod error;
mod generated;
pub mod ini;
pub mod registry;

pub use error::{LookupError, LookupErrorExt};
pub use ini::IniCatalog;
pub use registry::InterfaceRegistry;

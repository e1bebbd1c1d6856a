//! # SDK scanner
//!
//! Builds the interface database from the header files of a Windows SDK.
//!
//! * [`parse`]: recognizes GUID declarations in header text;
//! * [`catalog`]: collects names and GUIDs, resolving duplicates;
//! * [`sdk`]: walks the SDK include folders;
//! * [`export`]: writes the database as INI, XML, HTML or a Rust table;
//! * [`activation`]: activatable WinRT classes per DLL, read from the registry.
//!
//! ```rust
//! use guidex_scanner::{HeaderParser, InterfaceCatalog};
//!
//! let header = r#"MIDL_INTERFACE("00000000-0000-0000-C000-000000000046")
//! IUnknown
//! {"#;
//!
//! let mut catalog = InterfaceCatalog::new();
//! for declaration in HeaderParser::new(false).parse("Unknwn.h", header).declarations {
//!     catalog.add(&declaration.guid, &declaration.name).ok();
//! }
//! assert_eq!(catalog.name_of("00000000-0000-0000-c000-000000000046"), Some("IUnknown"));
//! ```

pub mod activation;
pub mod catalog;
mod error;
pub mod export;
pub mod parse;
pub mod sdk;

pub use activation::ActivatableClasses;
pub use catalog::{InterfaceCatalog, Rejection};
pub use error::{ScanError, ScanErrorExt};
pub use export::{ClassExporter, ExportError, Exporter, windows_version};
pub use parse::{Diagnostic, HeaderParser};
pub use sdk::{ScanReport, SdkScanner};

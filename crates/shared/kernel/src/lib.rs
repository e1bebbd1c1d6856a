//! Kernel utilities shared across the GUIDEX crates.
//! Keep this crate lightweight: configuration loading and re-exports of the domain types.
//!
//! ## Config loading
//! ```rust,no_run
//! use guidex_kernel::config::load_settings;
//!
//! let settings = load_settings(None::<&str>).unwrap();
//! println!("scanning {}", settings.scan.sdk_path.display());
//! ```

pub mod config;

pub use guidex_domain as domain;

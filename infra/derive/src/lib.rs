#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the GUIDEX workspace.
//!
//! The only macro today is [`macro@guidex_error`], which turns a plain enum into
//! the error type shape used by every library crate (lookup, scanner, kernel,
//! logger).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! guidex-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants holding a source field,
///   so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **Formatting Helper**: Emits `format_context(&Option<Cow<'static, str>>)` for use in
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants must use named fields; tuple and unit variants are rejected.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///    carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use guidex_derive::guidex_error;
/// use std::borrow::Cow;
///
/// #[guidex_error]
/// pub enum ScanError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal scanner error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<Vec<u8>, ScanError> {
///     std::fs::read(path).context("Reading header file")
/// }
/// ```
#[proc_macro_attribute]
pub fn guidex_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

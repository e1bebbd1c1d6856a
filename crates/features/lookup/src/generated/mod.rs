//! Build-time interface table. Regenerate with `gdx scan --format rust`.

#[cfg(any(debug_assertions, feature = "embedded-table"))]
#[rustfmt::skip]
mod interfaces;

#[cfg(any(debug_assertions, feature = "embedded-table"))]
pub(crate) use interfaces::INTERFACES;

#[cfg(not(any(debug_assertions, feature = "embedded-table")))]
pub(crate) static INTERFACES: &[(&str, &str)] = &[];

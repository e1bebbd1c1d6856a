//! Auto-generated by `gdx scan --format rust`.
//! Do not edit by hand.
//!
//! {title}
//! {comment}

/// `(GUID, interface name)` pairs, sorted by interface name.
pub(crate) static INTERFACES: &[(&str, &str)] = &[
{body}
];

//! GUID key helpers.
//!
//! Keys are compared in upper case. Braces are part of the key when the
//! caller supplies them; only [`strip_decoration`] removes them.

use crate::constants::{GUID_DASHES, GUID_LEN};

/// Normalizes a lookup key: surrounding whitespace removed, upper-cased.
#[must_use]
pub fn normalize_key(guid: &str) -> String {
    guid.trim().to_uppercase()
}

/// Removes quotes, spaces and braces around a GUID taken from source text.
#[must_use]
pub fn strip_decoration(guid: &str) -> &str {
    guid.trim_matches(|c| matches!(c, '"' | ' ' | '{' | '}'))
}

/// Returns `true` for `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX` (hex digits, any case).
#[must_use]
pub fn is_canonical(guid: &str) -> bool {
    guid.len() == GUID_LEN
        && guid.char_indices().all(|(i, c)| {
            if GUID_DASHES.contains(&i) { c == '-' } else { c.is_ascii_hexdigit() }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_upper_cases_and_trims() {
        assert_eq!(normalize_key(" {guid-1} "), "{GUID-1}");
        assert_eq!(normalize_key("af86e2e0-b12d-4c6a-9c5a-d7aa65101e90"), "AF86E2E0-B12D-4C6A-9C5A-D7AA65101E90");
    }

    #[test]
    fn strip_removes_source_decoration() {
        assert_eq!(strip_decoration("\"{C31ADBAE-527F-4ff5-A230-F62BB61FF70C}\""), "C31ADBAE-527F-4ff5-A230-F62BB61FF70C");
        assert_eq!(strip_decoration(" 00000000-0000-0000-C000-000000000046"), "00000000-0000-0000-C000-000000000046");
    }

    #[test]
    fn canonical_shape() {
        assert!(is_canonical("00000035-0000-0000-C000-000000000046"));
        assert!(is_canonical("905a0fef-bc53-11df-8c49-001e4fc686da"));
        assert!(!is_canonical("{00000035-0000-0000-C000-000000000046}"));
        assert!(!is_canonical("00000035-0000-0000-C000-00000000004"));
        assert!(!is_canonical("00000035_0000-0000-C000-000000000046"));
        assert!(!is_canonical("0000003G-0000-0000-C000-000000000046"));
    }
}
